//! Configuration management for fitcoach
//!
//! This module handles loading and validating configuration from environment variables,
//! files, and command-line arguments.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::Catalog;
use crate::client::{ClientConfig, DEFAULT_API_URL};
use crate::server::ServerConfig;

/// Log formats accepted by the subscriber setup
pub const LOG_FORMATS: &[&str] = &["text", "json"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API server configuration
    pub server: ServerConfig,

    /// API client configuration
    pub client: ClientSettings,

    /// Catalog source
    pub catalog: CatalogSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Client-side configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// API base URL, including the route prefix
    pub api_url: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Retries for transient failures
    pub retry_count: u32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            request_timeout_secs: 10,
            retry_count: 3,
        }
    }
}

impl ClientSettings {
    /// Build a client config from these settings
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_retry_count(self.retry_count)
    }
}

/// Catalog source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON file replacing the built-in seed data
    pub path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("FITCOACH_BIND_ADDRESS") {
            config.server.bind_address = addr
                .parse()
                .with_context(|| format!("Invalid FITCOACH_BIND_ADDRESS: {addr}"))?;
        }

        if let Ok(prefix) = std::env::var("FITCOACH_API_PREFIX") {
            config.server.api_prefix = prefix;
        }

        if let Ok(origins) = std::env::var("FITCOACH_CORS_ORIGINS") {
            config.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Ok(environment) = std::env::var("FITCOACH_ENVIRONMENT") {
            config.server.environment = environment;
        }

        if let Ok(api_url) = std::env::var("FITCOACH_API_URL") {
            config.client.api_url = api_url;
        }

        config.client.request_timeout_secs = std::env::var("FITCOACH_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(config.client.request_timeout_secs);

        config.catalog.path = std::env::var("FITCOACH_CATALOG_PATH").ok().map(PathBuf::from);

        if let Ok(level) = std::env::var("FITCOACH_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(format) = std::env::var("FITCOACH_LOG_FORMAT") {
            config.logging.format = format;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.server
            .validate()
            .context("Invalid server configuration")?;

        if self.client.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            anyhow::bail!(
                "Unknown log format '{}', expected one of: {}",
                self.logging.format,
                LOG_FORMATS.join(", ")
            );
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.client.request_timeout_secs)
    }

    /// Load the configured catalog, falling back to the built-in seed
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display())),
            None => Ok(Catalog::seeded()),
        }
    }
}
