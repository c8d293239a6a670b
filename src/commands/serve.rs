use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use fitcoach::config::Config;
use fitcoach::server::api::CATALOG_ROUTES;
use fitcoach::server::CatalogServer;

/// Command-line overrides for the API server
#[derive(Debug, Default)]
pub struct ServeParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub api_prefix: Option<String>,
    pub cors_origins: Vec<String>,
    pub environment: Option<String>,
    pub catalog: Option<PathBuf>,
    pub no_cors: bool,
    pub no_request_logging: bool,
}

impl ServeParams {
    /// Apply the overrides on top of file/env configuration
    pub fn apply(self, config: &mut Config) -> Result<()> {
        let ServeParams {
            host,
            port,
            api_prefix,
            cors_origins,
            environment,
            catalog,
            no_cors,
            no_request_logging,
        } = self;

        if let Some(host) = host {
            let ip: IpAddr = host
                .parse()
                .with_context(|| format!("Invalid host address: {host}"))?;
            let port = port.unwrap_or(config.server.bind_address.port());
            config.server.bind_address = SocketAddr::new(ip, port);
        } else if let Some(port) = port {
            config.server.bind_address.set_port(port);
        }

        if let Some(prefix) = api_prefix {
            config.server.api_prefix = prefix;
        }
        if !cors_origins.is_empty() {
            config.server.cors_origins = cors_origins;
        }
        if let Some(environment) = environment {
            config.server.environment = environment;
        }
        if catalog.is_some() {
            config.catalog.path = catalog;
        }
        if no_cors {
            config.server.enable_cors = false;
        }
        if no_request_logging {
            config.server.enable_request_logging = false;
        }

        Ok(())
    }
}

/// Start the catalog API server
pub async fn serve(config: Config) -> Result<()> {
    let catalog = config.load_catalog()?;

    println!("Starting Catalog Server");
    println!("=======================");
    println!(
        "  Catalog: {}",
        config
            .catalog
            .path
            .as_ref()
            .map_or_else(|| "built-in seed".to_string(), |p| p.display().to_string())
    );
    println!(
        "  Records: {} coaches, {} programs",
        catalog.list_coaches().len(),
        catalog.list_programs().len()
    );
    println!();

    let server =
        CatalogServer::new(config.server.clone(), catalog).context("Failed to create catalog server")?;

    println!("{}", server.info().display());
    println!();
    println!("API Endpoints:");
    for route in CATALOG_ROUTES {
        println!("  GET  {}", config.server.api_path(route));
    }
    println!("  GET  /health");
    println!("  GET  /");
    println!();
    println!(
        "Catalog server listening on http://{}",
        config.server.bind_address
    );
    println!("Press Ctrl+C to stop.\n");

    // Start with graceful shutdown
    server
        .start_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Shutdown signal received");
                }
                Err(e) => {
                    tracing::error!("Failed to wait for Ctrl+C: {}", e);
                }
            }
        })
        .await?;

    println!("Catalog server stopped.");
    Ok(())
}
