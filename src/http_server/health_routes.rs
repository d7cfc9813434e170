//! Liveness route

use axum::{routing::get, Router};

/// Plain-text liveness message served at `/`
pub const LIVENESS_MESSAGE: &str = "API server is running";

/// Create health routes
pub fn health_routes() -> Router {
    Router::new().route("/", get(liveness_handler))
}

async fn liveness_handler() -> &'static str {
    LIVENESS_MESSAGE
}
