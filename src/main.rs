//! texpress — LaTeX equations to PDF over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────┐
//!                  │                    TEXPRESS                      │
//!                  │                                                  │
//!   POST /render   │  ┌─────────┐   ┌───────────┐   ┌─────────────┐  │
//!   ───────────────┼─▶│  http   │──▶│  render   │──▶│  compiler   │  │
//!                  │  │ server  │   │ decode +  │   │  invoker    │──┼──▶ latexmk
//!                  │  └─────────┘   │ assemble  │   │ (temp dir)  │  │   subprocess
//!                  │                └───────────┘   └──────┬──────┘  │
//!   PDF bytes      │                                       │         │
//!   ◀──────────────┼───────────────────────────────────────┘         │
//!                  │                                                  │
//!                  │  ┌────────────────────────────────────────────┐  │
//!                  │  │           Cross-Cutting Concerns           │  │
//!                  │  │  ┌────────┐ ┌─────────────┐ ┌───────────┐  │  │
//!                  │  │  │ config │ │observability│ │ lifecycle │  │  │
//!                  │  │  └────────┘ └─────────────┘ └───────────┘  │  │
//!                  │  └────────────────────────────────────────────┘  │
//!                  └──────────────────────────────────────────────────┘
//! ```
//!
//! Each request runs decode → assemble → compile → respond to completion
//! inside its handler; requests share nothing but the temp-dir namespace.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use texpress::config::{self, ServiceConfig};
use texpress::http::HttpServer;
use texpress::lifecycle::Shutdown;
use texpress::observability::metrics;

#[derive(Parser)]
#[command(name = "texpress")]
#[command(about = "LaTeX equations to PDF rendering service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "texpress=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("texpress v{} starting", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        config::validate_config(&config)
            .map_err(|errors| config::ConfigError::Validation(errors))?;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        compiler = %config.compiler.program,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
