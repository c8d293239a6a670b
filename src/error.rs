//! Unified error handling for the fitcoach crate
//!
//! This module provides a unified error type covering catalog lookups,
//! request arguments and catalog loading, while the server, API and client
//! modules keep their own narrower error enums.
//!
//! # Architecture
//!
//! - [`FitcoachErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum
//!
//! # Usage
//!
//! ```rust,ignore
//! use fitcoach::error::{Error, FitcoachErrorTrait};
//!
//! fn handle_error(err: Error) {
//!     if err.is_recoverable() {
//!         println!("Retrying: {}", err);
//!     } else {
//!         eprintln!("Fatal error ({}): {}", err.category().label(), err);
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

/// Common trait for all fitcoach error types
pub trait FitcoachErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A lookup by id found nothing
    NotFound,
    /// Caller-supplied input was rejected
    InvalidInput,
    /// Network-related errors (HTTP, timeout)
    Network,
    /// Serialization and data-format errors
    Parsing,
    /// File system errors
    Storage,
    /// Configuration and validation errors
    Config,
}

impl ErrorCategory {
    /// Human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::InvalidInput => "invalid input",
            Self::Network => "network error",
            Self::Parsing => "parse error",
            Self::Storage => "storage error",
            Self::Config => "configuration error",
        }
    }
}

/// Unified error type for the fitcoach crate
#[derive(Error, Debug)]
pub enum Error {
    /// A record lookup by id found nothing
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Caller-supplied argument was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Catalog construction errors (duplicate ids, malformed seed file)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FitcoachErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true, // I/O errors are often transient
            Self::NotFound { .. }
            | Self::InvalidArgument(_)
            | Self::Catalog(_)
            | Self::Json(_) => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidArgument(_) => ErrorCategory::InvalidInput,
            Self::Catalog(_) => ErrorCategory::Config,
            Self::Io(_) => ErrorCategory::Storage,
            Self::Json(_) => ErrorCategory::Parsing,
        }
    }
}

impl Error {
    /// Create a not-found error for a coach id
    pub fn coach_not_found(id: i32) -> Self {
        Self::NotFound { entity: "Coach", id }
    }

    /// Create a not-found error for a program id
    pub fn program_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Program",
            id,
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
