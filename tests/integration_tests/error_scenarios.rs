//! Error scenario integration tests
//!
//! Tests various failure modes and error handling:
//! 1. Malformed or blank path parameters
//! 2. Invalid price-range queries
//! 3. Unknown routes and methods
//! 4. Handler panics
//! 5. Cross-origin requests

use axum::{http::StatusCode, routing::get, Router};
use fitcoach::server::api::{handle_panic, INTERNAL_ERROR_MESSAGE};
use fitcoach::server::ServerConfig;
use tower_http::catch_panic::CatchPanicLayer;

use crate::common::{fixed_catalog, router_with, test_router, TestRequest};

async fn assert_bad_request(uri: &str, message: &str) {
    let response = TestRequest::get(uri).send(test_router()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST, "status for {uri}");
    let body = response.value();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], message, "message for {uri}");
}

// ============================================================================
// Path Parameter Errors
// ============================================================================

#[tokio::test]
async fn test_blank_text_parameters() {
    assert_bad_request(
        "/api/coaches/specialization/%20",
        "Specialization cannot be empty",
    )
    .await;
    assert_bad_request(
        "/api/programs/difficulty/%20%20",
        "Difficulty level cannot be empty",
    )
    .await;
    assert_bad_request("/api/programs/goal/%09", "Goal cannot be empty").await;
}

#[tokio::test]
async fn test_empty_filter_segments() {
    assert_bad_request(
        "/api/coaches/specialization/",
        "Specialization cannot be empty",
    )
    .await;
    assert_bad_request(
        "/api/programs/difficulty/",
        "Difficulty level cannot be empty",
    )
    .await;
    assert_bad_request("/api/programs/goal/", "Goal cannot be empty").await;
    assert_bad_request("/api/programs/coach/", "Coach ID must be greater than 0").await;
}

#[tokio::test]
async fn test_undecodable_segments_return_json() {
    for uri in [
        "/api/coaches/specialization/%FF",
        "/api/programs/goal/%C3%28",
        "/api/programs/difficulty/%FF",
        "/api/coaches/%FF",
        "/api/programs/%FF",
        "/api/programs/coach/%FF",
    ] {
        let response = TestRequest::get(uri).send(test_router()).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "status for {uri}");
        assert_eq!(
            response.header("content-type"),
            Some("application/json"),
            "content type for {uri}"
        );
        let body = response.value();
        assert_eq!(body["success"], false);
        assert!(
            body["error"].as_str().is_some_and(|e| e.contains("UTF-8")),
            "message for {uri}: {body}"
        );
    }
}

#[tokio::test]
async fn test_non_positive_coach_id() {
    assert_bad_request("/api/programs/coach/-1", "Coach ID must be greater than 0").await;
    assert_bad_request("/api/programs/coach/0", "Coach ID must be greater than 0").await;
}

#[tokio::test]
async fn test_non_integer_ids() {
    assert_bad_request("/api/coaches/abc", "'abc' is not a valid ID").await;
    assert_bad_request("/api/programs/1.5", "'1.5' is not a valid ID").await;
    assert_bad_request("/api/programs/coach/three", "'three' is not a valid ID").await;
}

#[tokio::test]
async fn test_negative_id_lookup_is_not_found() {
    let response = TestRequest::get("/api/coaches/-1").send(test_router()).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.value()["error"], "Coach with ID -1 not found");
}

// ============================================================================
// Price Range Errors
// ============================================================================

#[tokio::test]
async fn test_price_range_requires_both_bounds() {
    assert_bad_request(
        "/api/programs/price-range?min=100",
        "Both min and max price are required",
    )
    .await;
    assert_bad_request(
        "/api/programs/price-range",
        "Both min and max price are required",
    )
    .await;
}

#[tokio::test]
async fn test_price_range_rejects_bad_values() {
    assert_bad_request(
        "/api/programs/price-range?min=-5&max=100",
        "Prices must be non-negative numbers",
    )
    .await;
    assert_bad_request(
        "/api/programs/price-range?min=500&max=100",
        "Minimum price cannot exceed maximum price",
    )
    .await;

    let response = TestRequest::get("/api/programs/price-range?min=cheap&max=100")
        .send(test_router())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Routing Errors
// ============================================================================

#[tokio::test]
async fn test_unknown_route() {
    let response = TestRequest::get("/api/trainers").send(test_router()).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_write_methods_not_allowed() {
    let response = TestRequest::post("/api/coaches").send(test_router()).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

// ============================================================================
// Panic Recovery
// ============================================================================

#[tokio::test]
async fn test_panic_becomes_generic_500() {
    async fn boom() -> &'static str {
        panic!("catalog index out of bounds")
    }

    let app = Router::new()
        .route("/boom", get(boom))
        .layer(CatchPanicLayer::custom(handle_panic));

    let response = TestRequest::get("/boom").send(app).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.value();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    assert!(!String::from_utf8_lossy(&response.body).contains("out of bounds"));
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let response = TestRequest::get("/api/coaches")
        .header("origin", "http://localhost:3000")
        .send(test_router())
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("access-control-allow-origin"),
        Some("http://localhost:3000")
    );
    assert_eq!(
        response.header("access-control-allow-credentials"),
        Some("true")
    );
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let response = TestRequest::get("/api/coaches")
        .header("origin", "https://evil.example.com")
        .send(test_router())
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_cors_preflight() {
    let response = TestRequest::options("/api/coaches/featured")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "GET")
        .header("access-control-request-headers", "content-type")
        .send(test_router())
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.header("access-control-allow-origin"),
        Some("http://localhost:3000")
    );
    assert_eq!(response.header("access-control-allow-methods"), Some("GET"));
    assert_eq!(
        response.header("access-control-allow-headers"),
        Some("content-type")
    );
}

#[tokio::test]
async fn test_cors_disabled() {
    let config = ServerConfig::builder().enable_cors(false).build().unwrap();
    let app = router_with(config, fixed_catalog());

    let response = TestRequest::get("/api/coaches")
        .header("origin", "http://localhost:3000")
        .send(app)
        .await;

    assert!(response.header("access-control-allow-origin").is_none());
}
