//! HTTP server for the coach catalog
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                Catalog Server                │
//! │                                              │
//! │  CatchPanic -> CORS -> TraceLayer -> Router  │
//! │                                              │
//! │  ┌────────────────────────────────────────┐  │
//! │  │            REST API (/api)             │  │
//! │  │  GET /coaches[/featured|/available|    │  │
//! │  │      /top-rated|/{id}|                 │  │
//! │  │      /specialization/{s}]              │  │
//! │  │  GET /programs[/featured|/{id}|        │  │
//! │  │      /difficulty/{d}|/coach/{id}|      │  │
//! │  │      /goal/{g}|/price-range]           │  │
//! │  └────────────────────────────────────────┘  │
//! │  GET /health    GET /                        │
//! │                                              │
//! │  AppState: CoachQueryService,                │
//! │            ProgramQueryService (Arc<Catalog>)│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use fitcoach::catalog::Catalog;
//! use fitcoach::server::{CatalogServer, ServerConfig};
//!
//! let server = CatalogServer::new(ServerConfig::default(), Catalog::seeded())?;
//! server.start().await?;
//! ```

pub mod api;
pub mod config;
pub mod http;

// Re-export main types
pub use config::{ConfigError, ServerConfig};
pub use http::{AppState, CatalogServer, ServerError, ServerInfo};
