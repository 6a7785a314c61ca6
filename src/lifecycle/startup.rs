//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid metrics address '{address}': {source}")]
    MetricsAddress {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the service and serve until `shutdown` triggers.
pub async fn start(config: ServiceConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let address = &config.observability.metrics_address;
        let addr: SocketAddr = address.parse().map_err(|source| StartupError::MetricsAddress {
            address: address.clone(),
            source,
        })?;
        metrics::init_metrics(addr);
    }

    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
