use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitcoach::client::CatalogClient;
use fitcoach::config::Config;

mod commands;

use commands::{CoachQuery, ProgramQuery, ServeParams};

#[derive(Parser)]
#[command(
    name = "fitcoach",
    version,
    about = "Fitness coach catalog API server and client",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML); environment variables are used otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

/// Options shared by the client commands
#[derive(Args)]
struct ClientArgs {
    /// API base URL, including the route prefix
    #[arg(long)]
    api_url: Option<String>,

    /// Print raw JSON instead of a summary
    #[arg(long, default_value = "false")]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the catalog API server
    Serve {
        /// Host to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Route prefix for catalog endpoints
        #[arg(long)]
        api_prefix: Option<String>,

        /// Allowed CORS origin (repeatable)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,

        /// Environment name reported by /health
        #[arg(long)]
        environment: Option<String>,

        /// JSON catalog file replacing the built-in seed
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Disable CORS
        #[arg(long, default_value = "false")]
        no_cors: bool,

        /// Disable request logging
        #[arg(long, default_value = "false")]
        no_request_logging: bool,
    },

    /// Query coaches from a running server
    Coaches {
        #[command(subcommand)]
        query: Option<CoachQuery>,

        #[command(flatten)]
        client: ClientArgs,
    },

    /// Query training programs from a running server
    Programs {
        #[command(subcommand)]
        query: Option<ProgramQuery>,

        #[command(flatten)]
        client: ClientArgs,
    },

    /// Render the landing page from featured coaches
    Landing {
        /// API base URL, including the route prefix
        #[arg(long)]
        api_url: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Custom Handlebars template
        #[arg(short, long)]
        template: Option<PathBuf>,
    },

    /// Check server health
    Health {
        /// API base URL, including the route prefix
        #[arg(long)]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }

    // Initialize tracing/logging
    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            api_prefix,
            cors_origins,
            environment,
            catalog,
            no_cors,
            no_request_logging,
        } => {
            ServeParams {
                host,
                port,
                api_prefix,
                cors_origins,
                environment,
                catalog,
                no_cors,
                no_request_logging,
            }
            .apply(&mut config)?;
            config.validate()?;

            tracing::info!(bind_address = %config.server.bind_address, "Starting serve command");
            commands::serve(config).await?;
        }

        Commands::Coaches { query, client } => {
            let api = build_client(&mut config, client.api_url)?;
            commands::coaches(&api, query.unwrap_or(CoachQuery::All), client.json).await?;
        }

        Commands::Programs { query, client } => {
            let api = build_client(&mut config, client.api_url)?;
            commands::programs(&api, query.unwrap_or(ProgramQuery::All), client.json).await?;
        }

        Commands::Landing {
            api_url,
            output,
            template,
        } => {
            let api = build_client(&mut config, api_url)?;
            commands::landing(&api, output, template).await?;
        }

        Commands::Health { api_url } => {
            let api = build_client(&mut config, api_url)?;
            commands::health(&api).await?;
        }
    }

    Ok(())
}

fn build_client(config: &mut Config, api_url: Option<String>) -> Result<CatalogClient> {
    if let Some(url) = api_url {
        config.client.api_url = url;
    }
    config.validate()?;

    tracing::debug!(api_url = %config.client.api_url, "Creating catalog client");
    Ok(CatalogClient::new(config.client.to_client_config())?)
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("fitcoach=debug,tower_http=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!("fitcoach={level},tower_http={level},warn"))
        })
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
