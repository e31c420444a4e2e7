//! Short link page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::api::handlers::follow_short_link;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the details page.
///
/// Renders `templates/short_link_details.html` with the target and click count.
#[derive(Template, WebTemplate)]
#[template(path = "short_link_details.html")]
pub struct ShortLinkDetailsTemplate {
    pub short_id: String,
    pub link_target: String,
    pub click_count: i64,
}

/// Dispatches `/{segment}` to the redirect or the details page.
///
/// # Endpoints
///
/// - `GET /{short_id}`  - 307 redirect to the target, counts a click
/// - `GET /{short_id}+` - HTML details page, counts nothing
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn short_link_handler(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Response, AppError> {
    match segment.strip_suffix('+') {
        Some(short_id) => Ok(details_page(&state, short_id).await?.into_response()),
        None => Ok(follow_short_link(&state, &segment).await?.into_response()),
    }
}

async fn details_page(
    state: &AppState,
    short_id: &str,
) -> Result<ShortLinkDetailsTemplate, AppError> {
    let details = state.registry.get_details(short_id).await?;

    Ok(ShortLinkDetailsTemplate {
        short_id: details.short_id,
        link_target: details.target_url,
        click_count: details.click_count,
    })
}
