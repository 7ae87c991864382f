//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports whether the code store answers a ping.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: `{"status": "ok"}`
/// - **503 Service Unavailable**: `{"status": "redis_unavailable"}`
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.allocator.store().ping().await {
        Ok(()) => Ok(Json(HealthResponse::ok())),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::redis_unavailable()),
            ))
        }
    }
}
