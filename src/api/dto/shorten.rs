//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The target URL (must be an absolute HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Identifier allocated (or reused) for the submitted URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
    pub short_url: String,
    pub target_url: String,
}
