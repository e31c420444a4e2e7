//! Store key namespace.
//!
//! These names are shared with data already persisted by earlier deployments
//! and must not change.

/// Counter incremented once per newly allocated identifier.
pub const COUNTER_KEY: &str = "last-url-id";

const TARGET_PREFIX: &str = "url-target:";
// Earlier deployments read from "revers-url:" while writing here; reads and
// writes now both use this prefix.
const REVERSE_PREFIX: &str = "reverse-url:";
const CLICKS_PREFIX: &str = "click-count:";

/// `url-target:<short_id>` -> target URL.
pub fn target_key(short_id: &str) -> String {
    format!("{TARGET_PREFIX}{short_id}")
}

/// `reverse-url:<url>` -> short identifier.
pub fn reverse_key(url: &str) -> String {
    format!("{REVERSE_PREFIX}{url}")
}

/// `click-count:<short_id>` -> number of resolutions.
pub fn clicks_key(short_id: &str) -> String {
    format!("{CLICKS_PREFIX}{short_id}")
}
