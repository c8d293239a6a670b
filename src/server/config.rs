//! Server configuration

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_API_PREFIX: &str = "/api";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_ENVIRONMENT: &str = "Development";

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5000))
}

/// Configuration for the catalog API server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,

    /// Prefix for catalog routes; empty mounts them at the root
    pub api_prefix: String,

    /// Front-end origins allowed to make cross-origin requests
    pub cors_origins: Vec<String>,

    /// Enable CORS for API
    pub enable_cors: bool,

    /// Enable request logging
    pub enable_request_logging: bool,

    /// Environment name reported by the health endpoint
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            enable_cors: true,
            enable_request_logging: true,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a new config builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.api_prefix;
        if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
            return Err(ConfigError::InvalidValue {
                field: "api_prefix".to_string(),
                reason: format!("'{prefix}' must start with '/' and must not end with '/'"),
            });
        }

        for origin in &self.cors_origins {
            if HeaderValue::from_str(origin).is_err() || origin == "*" {
                return Err(ConfigError::InvalidValue {
                    field: "cors_origins".to_string(),
                    reason: format!("Invalid origin: {origin}"),
                });
            }
        }

        if self.environment.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "environment".to_string(),
            });
        }

        Ok(())
    }

    /// Prefixed path for a catalog route
    pub fn api_path(&self, route: &str) -> String {
        format!("{}{}", self.api_prefix, route)
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    bind_address: Option<SocketAddr>,
    api_prefix: Option<String>,
    cors_origins: Option<Vec<String>>,
    enable_cors: Option<bool>,
    enable_request_logging: Option<bool>,
    environment: Option<String>,
}

impl ServerConfigBuilder {
    /// Set bind address
    pub fn bind_address(mut self, addr: SocketAddr) -> Self {
        self.bind_address = Some(addr);
        self
    }

    /// Set bind address from string
    pub fn bind_address_str(mut self, addr: &str) -> Result<Self, ConfigError> {
        self.bind_address = Some(addr.parse().map_err(|_| ConfigError::InvalidValue {
            field: "bind_address".to_string(),
            reason: format!("Invalid address: {addr}"),
        })?);
        Ok(self)
    }

    /// Set the route prefix
    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(prefix.into());
        self
    }

    /// Replace the allowed CORS origins
    pub fn cors_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cors_origins = Some(origins.into_iter().map(Into::into).collect());
        self
    }

    /// Enable/disable CORS
    pub fn enable_cors(mut self, enable: bool) -> Self {
        self.enable_cors = Some(enable);
        self
    }

    /// Enable/disable request logging
    pub fn enable_request_logging(mut self, enable: bool) -> Self {
        self.enable_request_logging = Some(enable);
        self
    }

    /// Set environment name
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Build the config
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            bind_address: self.bind_address.unwrap_or_else(default_bind_address),
            api_prefix: self
                .api_prefix
                .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string()),
            cors_origins: self
                .cors_origins
                .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]),
            enable_cors: self.enable_cors.unwrap_or(true),
            enable_request_logging: self.enable_request_logging.unwrap_or(true),
            environment: self
                .environment
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}
