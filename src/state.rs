//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::LinkRegistry;
use crate::domain::KeyValueStore;

/// State cloned into each request.
///
/// Holds the registry over a shared store handle; there is no other
/// long-lived in-process state.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<LinkRegistry>,
    /// Public origin used to build absolute short URLs, without trailing slash.
    pub base_url: String,
}

impl AppState {
    /// Builds the state over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>, base_url: impl Into<String>) -> Self {
        Self {
            registry: Arc::new(LinkRegistry::new(store)),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of the redirect endpoint for `short_id`.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}/{}", self.base_url, short_id)
    }
}
