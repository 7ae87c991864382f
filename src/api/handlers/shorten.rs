//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use std::time::Instant;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::entities::AllocationOutcome;
use crate::error::AppError;
use crate::infrastructure::metrics;
use crate::state::AppState;

/// Allocates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// { "code": "k3x9q", "short_url": "http://localhost:3000/k3x9q" }
/// ```
///
/// `short_url` is present only when `REDIRECT_BASE_URL` is configured.
///
/// # Errors
///
/// - **400**: `{"error": "url is required"}` when the body carries no usable URL
/// - **500**: `{"error": "could not allocate code"}` when every attempt collided
///   or the store is unavailable
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let started = Instant::now();
    let request = ShortenRequest::from_body(&body);

    let outcome = state.allocator.allocate(request.url()).await;
    metrics::record_request(outcome.result_label(), started.elapsed());

    match outcome {
        AllocationOutcome::Allocated(code) => {
            let short_url = state
                .redirect_base_url
                .as_deref()
                .map(|base| code.to_url(base));

            Ok((
                StatusCode::CREATED,
                Json(ShortenResponse {
                    code: code.into_inner(),
                    short_url,
                }),
            ))
        }
        AllocationOutcome::InvalidInput => Err(AppError::bad_request("url is required")),
        AllocationOutcome::Exhausted | AllocationOutcome::StoreUnavailable(_) => {
            Err(AppError::internal("could not allocate code"))
        }
    }
}
