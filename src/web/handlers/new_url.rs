//! URL submission form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_target_url;

/// Template for the submission page.
///
/// Renders `templates/new_url.html` with the previously submitted value and
/// an optional error line.
#[derive(Template, WebTemplate)]
#[template(path = "new_url.html")]
pub struct NewUrlTemplate {
    pub error: Option<String>,
    pub url: String,
}

/// Form body posted by the submission page.
#[derive(Debug, Deserialize)]
pub struct NewUrlForm {
    #[serde(default)]
    pub url: String,
}

/// Renders the empty submission form.
///
/// # Endpoint
///
/// `GET /`
pub async fn new_url_form_handler() -> impl IntoResponse {
    NewUrlTemplate {
        error: None,
        url: String::new(),
    }
}

/// Shortens the submitted URL and redirects to its details page.
///
/// # Endpoint
///
/// `POST /` (form field `url`)
///
/// # Response
///
/// - Valid URL: 303 See Other to `/{short_id}+`
/// - Invalid URL: the form again, keeping the submitted value
///
/// # Errors
///
/// Returns 503 Service Unavailable if the store cannot be reached.
pub async fn new_url_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<NewUrlForm>,
) -> Result<Response, AppError> {
    if let Err(e) = validate_target_url(&form.url) {
        debug!("Rejected submitted URL '{}': {}", form.url, e);
        return Ok(NewUrlTemplate {
            error: Some("Please enter a valid URL".to_string()),
            url: form.url,
        }
        .into_response());
    }

    let short_id = state.registry.shorten(&form.url).await?;

    Ok(Redirect::to(&format!("/{}+", short_id)).into_response())
}
