//! Top-level router combining HTML, API, and health routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - Submission form (POST submits it)
//! - `GET  /{short_id}`    - Redirect to the target URL
//! - `GET  /{short_id}+`   - Details page with click count
//! - `GET  /health`        - Store health check
//! - `/api/*`              - JSON API
//! - `/static/*`           - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with every route and the tracing layer.
///
/// `static_dir` is served under `/static`.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .merge(web::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] with trailing slashes trimmed.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
