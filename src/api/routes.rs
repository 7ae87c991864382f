//! API route configuration.

use crate::api::handlers::{health_handler, metrics_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST /shorten`  - Allocate a short code for a URL
/// - `GET  /health`   - Store liveness
/// - `GET  /metrics`  - Prometheus metrics
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
}
