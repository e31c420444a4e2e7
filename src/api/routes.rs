//! API route configuration.

use crate::api::handlers::{link_details_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`             - Allocate or reuse a short identifier
/// - `GET  /links/{short_id}`    - Target URL and click count
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links/{short_id}", get(link_details_handler))
}
