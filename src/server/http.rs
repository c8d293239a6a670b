//! Catalog server implementation
//!
//! This module owns the shared state, the middleware stack and the listener
//! lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::http::HeaderValue;
use axum::Router;
use thiserror::Error;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::error::{ErrorCategory, FitcoachErrorTrait};
use crate::service::{CoachQueryService, ProgramQueryService};

use super::api::{create_router, handle_panic};
use super::config::{ConfigError, ServerConfig};

// ============================================================================
// App State
// ============================================================================

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Coach queries
    pub coaches: CoachQueryService,

    /// Program queries
    pub programs: ProgramQueryService,

    /// Server start time
    pub start_time: Instant,

    /// Configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state over a catalog
    pub fn new(config: ServerConfig, catalog: Arc<Catalog>) -> Self {
        Self {
            coaches: CoachQueryService::new(catalog.clone()),
            programs: ProgramQueryService::new(catalog),
            start_time: Instant::now(),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Catalog Server
// ============================================================================

/// HTTP server for the coach catalog
pub struct CatalogServer {
    config: ServerConfig,
    state: AppState,
}

impl CatalogServer {
    /// Create a new catalog server
    pub fn new(config: ServerConfig, catalog: Catalog) -> Result<Self, ServerError> {
        config.validate()?;

        for program in catalog.dangling_coach_refs() {
            tracing::warn!(
                program_id = program.id,
                coach_id = program.coach_id,
                "Program references a coach that is not in the catalog"
            );
        }

        tracing::info!(
            coaches = catalog.list_coaches().len(),
            programs = catalog.list_programs().len(),
            "Catalog loaded"
        );

        let state = AppState::new(config.clone(), Arc::new(catalog));

        Ok(Self { config, state })
    }

    /// Get the application state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .config
            .cors_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let mut router =
            create_router(self.state.clone()).layer(CatchPanicLayer::custom(handle_panic));

        // Add CORS layer if enabled
        if self.config.enable_cors {
            router = router.layer(self.cors_layer());
        }

        // Add tracing layer if enabled
        if self.config.enable_request_logging {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Start the server
    pub async fn start(&self) -> Result<(), ServerError> {
        let router = self.build_router();
        let addr = self.config.bind_address;

        tracing::info!("Starting catalog server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        axum::serve(listener, router)
            .await
            .map_err(ServerError::Serve)?;

        Ok(())
    }

    /// Start with graceful shutdown
    pub async fn start_with_shutdown(
        &self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), ServerError> {
        let router = self.build_router();
        let addr = self.config.bind_address;

        tracing::info!("Starting catalog server on {} (with graceful shutdown)", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(ServerError::Serve)?;

        tracing::info!("Catalog server shutdown complete");
        Ok(())
    }

    /// Get server info
    pub fn info(&self) -> ServerInfo {
        ServerInfo {
            bind_address: self.config.bind_address,
            api_prefix: self.config.api_prefix.clone(),
            cors_origins: self.config.cors_origins.clone(),
            cors_enabled: self.config.enable_cors,
            request_logging_enabled: self.config.enable_request_logging,
            environment: self.config.environment.clone(),
        }
    }
}

/// Server information
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub bind_address: SocketAddr,
    pub api_prefix: String,
    pub cors_origins: Vec<String>,
    pub cors_enabled: bool,
    pub request_logging_enabled: bool,
    pub environment: String,
}

impl ServerInfo {
    /// Format as display string
    pub fn display(&self) -> String {
        format!(
            "Catalog Server\n\
             {:-<40}\n\
             Bind Address: {}\n\
             API Prefix: {}\n\
             Environment: {}\n\
             CORS: {}\n\
             Request Logging: {}",
            "",
            self.bind_address,
            if self.api_prefix.is_empty() { "/" } else { self.api_prefix.as_str() },
            self.environment,
            if self.cors_enabled {
                self.cors_origins.join(", ")
            } else {
                "disabled".to_string()
            },
            if self.request_logging_enabled { "enabled" } else { "disabled" }
        )
    }
}

// ============================================================================
// Server Errors
// ============================================================================

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to bind to address
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Server error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl FitcoachErrorTrait for ServerError {
    fn is_recoverable(&self) -> bool {
        matches!(self, Self::Bind { .. })
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Config,
            Self::Bind { .. } | Self::Serve(_) => ErrorCategory::Network,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
