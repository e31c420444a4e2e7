//! Handler for link lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the target and click count of a short link without counting a click.
///
/// # Endpoint
///
/// `GET /api/links/{short_id}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
/// Returns 503 Service Unavailable if the store cannot be reached.
pub async fn link_details_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let details = state.registry.get_details(&short_id).await?;
    let short_url = state.short_url(&details.short_id);

    Ok(Json(LinkResponse::new(details, short_url)))
}
