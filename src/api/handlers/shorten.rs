//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_target_url;

/// Allocates (or reuses) a short identifier for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_id": "1",
///   "short_url": "http://localhost:5000/1",
///   "target_url": "https://example.com"
/// }
/// ```
///
/// Shortening the same URL again returns the same identifier.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is malformed or not HTTP(S).
/// Returns 503 Service Unavailable if the store cannot be reached.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    validate_target_url(&payload.url).map_err(|e| {
        AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
    })?;

    let short_id = state.registry.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&short_id),
        short_id,
        target_url: payload.url,
    }))
}
