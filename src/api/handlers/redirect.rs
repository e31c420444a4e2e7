//! Following a short link.

use axum::response::Redirect;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its target URL and counts the click.
///
/// Called from [`crate::web::handlers::short_link_handler`], which owns the
/// `/{short_id}` route and dispatches on the `+` suffix.
///
/// # Response
///
/// 307 Temporary Redirect with `Location` set to the target URL.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
/// Returns 503 Service Unavailable if the lookup fails. A failed click
/// increment does not fail the redirect.
pub async fn follow_short_link(state: &AppState, short_id: &str) -> Result<Redirect, AppError> {
    let target_url = state.registry.resolve(short_id).await?;

    Ok(Redirect::temporary(&target_url))
}
