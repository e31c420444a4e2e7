//! Browser-facing route configuration.

use crate::state::AppState;
use crate::web::handlers::{new_url_form_handler, new_url_submit_handler, short_link_handler};
use axum::{Router, routing::get};

/// Public HTML routes.
///
/// # Endpoints
///
/// - `GET  /`              - Submission form
/// - `POST /`              - Shorten and redirect to the details page
/// - `GET  /{short_id}`    - Redirect to the target
/// - `GET  /{short_id}+`   - Details page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(new_url_form_handler).post(new_url_submit_handler))
        .route("/{segment}", get(short_link_handler))
}
