//! Web application router and middleware setup.

use std::sync::Arc;

use axum::{routing::get, Router};
use prometheus::Registry;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::web::handlers;

/// Create the axum application serving the exporter endpoints.
pub fn create_app(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/metrics", get(handlers::get_metrics))
        .route("/health", get(handlers::health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(registry)
}
