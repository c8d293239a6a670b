//! fitcoach - Fitness coach catalog API
//!
//! A read-only REST API over an in-memory catalog of coaches and training
//! programs, with a typed client and a landing page renderer.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`] - Coach and training program records
//! - [`catalog`] - Immutable in-memory catalog and seed data
//! - [`service`] - Read-only query services over the catalog
//! - [`server`] - HTTP routes, middleware and server lifecycle
//! - [`client`] - Typed HTTP client for the API
//! - [`landing`] - Landing page rendering from featured coaches
//! - [`config`] - Configuration management and settings
//! - [`error`] - Unified error handling
//!
//! # Example
//!
//! ```no_run
//! use fitcoach::catalog::Catalog;
//! use fitcoach::config::Config;
//! use fitcoach::server::CatalogServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = CatalogServer::new(config.server, Catalog::seeded())?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod landing;
pub mod models;
pub mod server;
pub mod service;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::client::{CatalogClient, ClientConfig};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, FitcoachErrorTrait, Result};
    pub use crate::models::{Coach, TrainingProgram};
    pub use crate::server::{CatalogServer, ServerConfig};
    pub use crate::service::{CoachQueryService, ProgramQueryService};
}

// Direct re-exports for convenience
pub use models::{Coach, TrainingProgram};
