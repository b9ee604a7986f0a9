//! HTTP exposition server for the LED exporter.
//!
//! Serves the Prometheus scrape endpoint together with a landing page and a
//! health check. Each `/metrics` request triggers a fresh collect pass; the
//! server keeps no sample state between scrapes.

pub mod config;
pub mod handlers;
pub mod router;

// Re-export commonly used items
pub use config::WebConfig;
pub use router::create_app;

use std::net::SocketAddr;
use std::sync::Arc;

use prometheus::Registry;
use tracing::info;

use crate::error::{ExporterError, Result};

/// Start the web server and serve scrape requests until shutdown.
///
/// Bind or listen failures are fatal; the exporter has no
/// partial-availability mode.
pub async fn start_web_server(config: WebConfig, registry: Registry) -> Result<()> {
    let app = create_app(Arc::new(registry));

    let addr = config
        .bind_address()
        .parse::<SocketAddr>()
        .map_err(|e| ExporterError::config_error(format!("Invalid bind address: {}", e)))?;

    info!("Starting LED exporter on http://{}", addr);
    info!("Metrics endpoint: http://{}/metrics", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ExporterError::web_server_error(format!("Failed to bind to address: {}", e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ExporterError::web_server_error(format!("Server error: {}", e)))?;

    Ok(())
}
