//! HTTP handlers for the exporter endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use prometheus::{Encoder, Registry, TextEncoder};
use serde_json::json;
use tracing::error;

/// Render the current sample set in the Prometheus text format.
///
/// Every request runs a fresh collect pass over the registered collectors.
/// Individual device read failures surface only as missing samples, never as
/// an error response; encoding failure is the sole 500 path.
pub async fn get_metrics(State(registry): State<Arc<Registry>>) -> Result<String, StatusCode> {
    let encoder = TextEncoder::new();
    let families = registry.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&families, &mut buffer) {
        error!("Failed to encode metrics: {}", e);
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    String::from_utf8(buffer).map_err(|e| {
        error!("Metrics output was not valid UTF-8: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Landing page linking to the metrics endpoint.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "led_exporter",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>LED Exporter</title>
</head>
<body>
    <h1>LED Exporter</h1>
    <p><a href="/metrics">Metrics</a></p>
</body>
</html>
"#;
