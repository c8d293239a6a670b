//! Integration tests module
//!
//! End-to-end tests for the catalog API:
//! - Every route, status code and response shape
//! - Typed client against a real listener
//! - Error handling, CORS and panic recovery

pub mod client_roundtrip;
pub mod error_scenarios;
pub mod fixtures;
