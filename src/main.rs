//! Ping service.
//!
//! A demo of mediator-style request dispatch built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ http::server ──▶ http::ping ──▶ mediator ──▶ ping::validation
//!                    (request id,     (controller)   (dispatch)        │
//!                     trace, limits)                                   ▼
//!     Client Response                                             ping::handler
//!     ◀───────────── http::response ◀──────────────────────────────────┘
//!                    (text, or problem+json)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ping_service::config::{load_config, validate_config, ServiceConfig};
use ping_service::lifecycle::{self, Shutdown};
use ping_service::observability::logging;

#[derive(Parser)]
#[command(name = "ping-service")]
#[command(about = "Echo service demonstrating validated mediator dispatch", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

fn load(cli: &Cli) -> Result<ServiceConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ping_service::config::ConfigError::Invalid)?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability);
    tracing::info!("ping-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown.clone().trigger_on_signal());

    if let Err(e) = lifecycle::start(config, &shutdown).await {
        tracing::error!(error = %e, "Service failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
