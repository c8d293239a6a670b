//! Common test utilities
//!
//! Drives the axum router in-process, without binding a socket.

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use fitcoach::catalog::Catalog;
use fitcoach::server::{CatalogServer, ServerConfig};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// Seed catalog stamped at a fixed instant
pub fn fixed_catalog() -> Catalog {
    let seeded_at = Utc
        .with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    Catalog::seeded_at(seeded_at)
}

/// Router over the seed catalog with default configuration
pub fn test_router() -> Router {
    router_with(ServerConfig::default(), fixed_catalog())
}

/// Router with a custom configuration and catalog
pub fn router_with(config: ServerConfig, catalog: Catalog) -> Router {
    CatalogServer::new(config, catalog)
        .expect("valid server config")
        .build_router()
}

/// Request builder for in-process router tests
pub struct TestRequest {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
}

impl TestRequest {
    /// Create a new GET request
    pub fn get(uri: &str) -> Self {
        Self {
            method: Method::GET,
            uri: uri.to_owned(),
            headers: Vec::new(),
        }
    }

    /// Create a new OPTIONS request
    #[allow(dead_code)]
    pub fn options(uri: &str) -> Self {
        Self {
            method: Method::OPTIONS,
            uri: uri.to_owned(),
            headers: Vec::new(),
        }
    }

    /// Create a new POST request
    #[allow(dead_code)]
    pub fn post(uri: &str) -> Self {
        Self {
            method: Method::POST,
            uri: uri.to_owned(),
            headers: Vec::new(),
        }
    }

    /// Add a header to the request
    #[allow(dead_code)]
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Execute the request against a router
    pub async fn send(self, app: Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);

        for (key, value) in self.headers {
            builder = builder.header(key, value);
        }

        let request = builder.body(Body::empty()).expect("Failed to build request");

        let response = app
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Buffered response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Deserialize the body
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON body")
    }

    /// Body as an untyped JSON value
    pub fn value(&self) -> serde_json::Value {
        self.json()
    }

    /// Header value as a string
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Ids of a JSON array body
    pub fn ids(&self) -> Vec<i64> {
        self.value()
            .as_array()
            .expect("array body")
            .iter()
            .map(|item| item["id"].as_i64().expect("numeric id"))
            .collect()
    }
}
