//! DTOs for link lookup.

use serde::Serialize;

use crate::domain::LinkDetails;

/// A short link with its click counter.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub short_id: String,
    pub short_url: String,
    pub target_url: String,
    pub click_count: i64,
}

impl LinkResponse {
    pub fn new(details: LinkDetails, short_url: String) -> Self {
        Self {
            short_id: details.short_id,
            short_url,
            target_url: details.target_url,
            click_count: details.click_count,
        }
    }
}
