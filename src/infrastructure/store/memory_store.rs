//! In-process store implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};

/// A [`KeyValueStore`] backed by a mutex-guarded `HashMap`.
///
/// Every operation takes the single lock, so `incr` is atomic for all
/// clients sharing this instance. State is lost on drop and is not shared
/// between processes.
///
/// # Use Cases
///
/// - Unit and integration tests
/// - Local development without Redis (`REDIS_URL=memory://`)
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (state is not persisted)");
        Self::default()
    }

    /// Returns the number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut entries = self.entries.lock();

        let current = match entries.get(key) {
            Some(raw) => raw.parse::<i64>().map_err(|e| StoreError::InvalidValue {
                key: key.to_string(),
                reason: e.to_string(),
            })?,
            None => 0,
        };

        let next = current.checked_add(1).ok_or_else(|| StoreError::InvalidValue {
            key: key.to_string(),
            reason: "increment would overflow".to_string(),
        })?;

        entries.insert(key.to_string(), next.to_string());
        Ok(next)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("k", "v1").await.unwrap();
        store.set("k", "v2").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_incr_starts_from_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.incr("counter").await.unwrap(), 1);
        assert_eq!(store.incr("counter").await.unwrap(), 2);
        assert_eq!(store.get("counter").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_incr_continues_from_stored_integer() {
        let store = MemoryStore::new();
        store.set("counter", "41").await.unwrap();
        assert_eq!(store.incr("counter").await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_incr_rejects_non_integer() {
        let store = MemoryStore::new();
        store.set("counter", "abc").await.unwrap();

        let result = store.incr("counter").await;
        assert!(matches!(result, Err(StoreError::InvalidValue { .. })));
        assert_eq!(store.get("counter").await.unwrap().as_deref(), Some("abc"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_incr_never_repeats() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let mut values = Vec::new();
                for _ in 0..50 {
                    values.push(store.incr("counter").await.unwrap());
                }
                values
            }));
        }

        let mut all = Vec::new();
        for handle in handles {
            all.extend(handle.await.unwrap());
        }
        all.sort_unstable();

        assert_eq!(all, (1..=400).collect::<Vec<i64>>());
    }
}
