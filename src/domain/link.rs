//! Link value types.

/// A short link together with its click counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDetails {
    pub short_id: String,
    pub target_url: String,
    pub click_count: i64,
}
