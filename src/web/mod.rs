//! Browser-facing pages.
//!
//! Server-side rendered with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Form, redirect dispatch, and details page
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod routes;
