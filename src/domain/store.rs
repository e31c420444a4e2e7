//! Key-value store contract used by the link registry.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while talking to the key-value store.
///
/// Every variant means the store could not serve the request; callers treat
/// them uniformly as "store unavailable".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store command error: {0}")]
    Command(String),

    #[error("Store command timed out after {0}ms")]
    Timeout(u64),

    #[error("Store holds a malformed value under '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal string key-value store with an atomic counter primitive.
///
/// Implementations must guarantee that [`KeyValueStore::incr`] is atomic
/// across every client sharing the store, and read-after-write consistency
/// for a single key. No multi-key transactions are required.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis (`GET`, `SET`, `INCR`)
/// - [`crate::infrastructure::store::MemoryStore`] - in-process map for tests and development
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Atomically increments the integer under `key` and returns the new value.
    ///
    /// An absent key counts as `0`, so the first call returns `1`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidValue`] if the existing value is not an integer.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Checks if the store is reachable.
    async fn health_check(&self) -> bool;
}
