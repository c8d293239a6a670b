//! HTTP client for the catalog API
//!
//! The client mirrors every catalog route with a typed method. Transient
//! failures (network errors and 5xx responses) are retried with a fixed
//! delay; 4xx responses come back immediately.
//!
//! # Example
//!
//! ```ignore
//! use fitcoach::client::{CatalogClient, ClientConfig};
//!
//! let client = CatalogClient::new(ClientConfig::new("http://localhost:5000/api"))?;
//! let featured = client.featured_coaches().await?;
//! ```

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::error::{ErrorCategory, FitcoachErrorTrait};
use crate::models::{Coach, TrainingProgram};
use crate::server::api::{ErrorResponse, HealthResponse};

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

// ============================================================================
// Client Configuration
// ============================================================================

/// Configuration for the catalog client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, including the route prefix
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// Retry count for transient failures
    pub retry_count: u32,

    /// Retry delay
    pub retry_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    /// Create a new client config
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            retry_count: 3,
            retry_delay: Duration::from_millis(500),
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set retry count
    pub fn with_retry_count(mut self, count: u32) -> Self {
        self.retry_count = count;
        self
    }

    /// Set retry delay
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

// ============================================================================
// Catalog Client
// ============================================================================

/// Health status reported by the server
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    pub environment: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Client for the catalog API
pub struct CatalogClient {
    config: ClientConfig,
    base: Url,
    http_client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.base_url.clone()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Init(e.to_string()))?;

        Ok(Self {
            config,
            base,
            http_client,
        })
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Coaches
    // ------------------------------------------------------------------------

    /// All coaches
    pub async fn coaches(&self) -> Result<Vec<Coach>, ClientError> {
        self.get_with_retry(self.endpoint(&["coaches"])?).await
    }

    /// A single coach, `None` when the server reports 404
    pub async fn coach(&self, id: i32) -> Result<Option<Coach>, ClientError> {
        let url = self.endpoint(&["coaches", &id.to_string()])?;
        not_found_as_none(self.get_with_retry(url).await)
    }

    /// Coaches flagged for the homepage
    pub async fn featured_coaches(&self) -> Result<Vec<Coach>, ClientError> {
        self.get_with_retry(self.endpoint(&["coaches", "featured"])?)
            .await
    }

    /// Coaches whose specialization contains `specialization`
    pub async fn coaches_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Coach>, ClientError> {
        let url = self.endpoint(&["coaches", "specialization", specialization])?;
        self.get_with_retry(url).await
    }

    /// Coaches accepting clients
    pub async fn available_coaches(&self) -> Result<Vec<Coach>, ClientError> {
        self.get_with_retry(self.endpoint(&["coaches", "available"])?)
            .await
    }

    /// Top-rated coaches, best first
    pub async fn top_rated_coaches(&self) -> Result<Vec<Coach>, ClientError> {
        self.get_with_retry(self.endpoint(&["coaches", "top-rated"])?)
            .await
    }

    // ------------------------------------------------------------------------
    // Programs
    // ------------------------------------------------------------------------

    /// All programs
    pub async fn programs(&self) -> Result<Vec<TrainingProgram>, ClientError> {
        self.get_with_retry(self.endpoint(&["programs"])?).await
    }

    /// A single program, `None` when the server reports 404
    pub async fn program(&self, id: i32) -> Result<Option<TrainingProgram>, ClientError> {
        let url = self.endpoint(&["programs", &id.to_string()])?;
        not_found_as_none(self.get_with_retry(url).await)
    }

    /// Programs flagged for the homepage
    pub async fn featured_programs(&self) -> Result<Vec<TrainingProgram>, ClientError> {
        self.get_with_retry(self.endpoint(&["programs", "featured"])?)
            .await
    }

    /// Programs at exactly this difficulty level
    pub async fn programs_by_difficulty(
        &self,
        level: &str,
    ) -> Result<Vec<TrainingProgram>, ClientError> {
        let url = self.endpoint(&["programs", "difficulty", level])?;
        self.get_with_retry(url).await
    }

    /// Programs owned by a coach
    pub async fn programs_by_coach(
        &self,
        coach_id: i32,
    ) -> Result<Vec<TrainingProgram>, ClientError> {
        let url = self.endpoint(&["programs", "coach", &coach_id.to_string()])?;
        self.get_with_retry(url).await
    }

    /// Programs whose goal contains `goal`
    pub async fn programs_by_goal(&self, goal: &str) -> Result<Vec<TrainingProgram>, ClientError> {
        let url = self.endpoint(&["programs", "goal", goal])?;
        self.get_with_retry(url).await
    }

    /// Programs priced within `[min, max]`
    pub async fn programs_by_price_range(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<TrainingProgram>, ClientError> {
        let mut url = self.endpoint(&["programs", "price-range"])?;
        url.query_pairs_mut()
            .append_pair("min", &min.to_string())
            .append_pair("max", &max.to_string());
        self.get_with_retry(url).await
    }

    // ------------------------------------------------------------------------
    // Service
    // ------------------------------------------------------------------------

    /// Check server health; the health route lives at the server root
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let mut url = self.base.clone();
        url.set_path("/health");
        url.set_query(None);

        let response: HealthResponse = self.get_with_retry(url).await?;

        Ok(HealthStatus {
            healthy: response.status == "Healthy",
            environment: response.environment,
            version: response.version,
            uptime_secs: response.uptime_secs,
        })
    }

    // Internal: base URL plus percent-encoded path segments
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.config.base_url.clone()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    // Internal: GET request with retry on transient failures
    async fn get_with_retry<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let mut attempt = 0;

        loop {
            match self.get_once(url.clone()).await {
                Err(e) if e.is_recoverable() && attempt < self.config.retry_count => {
                    attempt += 1;
                    tracing::warn!(url = %url, attempt, error = %e, "Request failed, retrying");
                    tokio::time::sleep(self.config.retry_delay).await;
                }
                result => return result,
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|r| r.error)
                .unwrap_or(body);
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

fn not_found_as_none<T>(result: Result<T, ClientError>) -> Result<Option<T>, ClientError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ClientError::Http { status: 404, .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Client Errors
// ============================================================================

/// Client errors
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Response body did not decode
    #[error("Parse error: {0}")]
    Parse(String),

    /// Base URL rejected
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FitcoachErrorTrait for ClientError {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http { status, .. } => *status >= 500,
            Self::Init(_) | Self::Parse(_) | Self::InvalidUrl(_) => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::Http { status: 404, .. } => ErrorCategory::NotFound,
            Self::Http { status, .. } if (400..500).contains(status) => ErrorCategory::InvalidInput,
            Self::Http { .. } => ErrorCategory::Network,
            Self::Parse(_) => ErrorCategory::Parsing,
            Self::Init(_) | Self::InvalidUrl(_) => ErrorCategory::Config,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
