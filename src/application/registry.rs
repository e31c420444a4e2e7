//! Short identifier allocation and resolution.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::codec;
use crate::domain::error::RegistryError;
use crate::domain::keys::{COUNTER_KEY, clicks_key, reverse_key, target_key};
use crate::domain::link::LinkDetails;
use crate::domain::store::{KeyValueStore, StoreError};

/// Maps URLs to short identifiers and back on top of a [`KeyValueStore`].
///
/// Uniqueness comes from the store's atomic counter: every new identifier is
/// the base-36 encoding of a fresh `INCR` result, so identifiers are never
/// reused, only occasionally wasted.
///
/// # Concurrency
///
/// No in-process locking. Two concurrent `shorten` calls for the same URL can
/// both miss the reverse lookup and allocate two identifiers; both forward
/// mappings stay valid and the reverse mapping keeps whichever write landed
/// last. Idempotence is guaranteed for sequential callers only.
pub struct LinkRegistry {
    store: Arc<dyn KeyValueStore>,
}

impl LinkRegistry {
    /// Creates a registry over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the short identifier for `url`, allocating one if needed.
    ///
    /// The URL is used verbatim as the reverse-mapping key; callers validate
    /// it beforehand.
    ///
    /// # Partial Failure
    ///
    /// If the counter increment succeeds but a later write fails, the counter
    /// value stays consumed and the identifier is orphaned. There is no
    /// rollback.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] if any store call fails.
    pub async fn shorten(&self, url: &str) -> Result<String, RegistryError> {
        if let Some(existing) = self.store.get(&reverse_key(url)).await? {
            debug!("Reusing short id {} for {}", existing, url);
            return Ok(existing);
        }

        let n = self.store.incr(COUNTER_KEY).await?;
        let short_id = codec::encode(n)?;

        self.store.set(&target_key(&short_id), url).await?;
        self.store.set(&reverse_key(url), &short_id).await?;

        info!("Allocated short id {} for {}", short_id, url);

        Ok(short_id)
    }

    /// Returns the target URL of `short_id` and counts the click.
    ///
    /// The click increment is best-effort: a failing increment is logged and
    /// the target is still returned.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if `short_id` has no forward mapping.
    /// Returns [`RegistryError::StoreUnavailable`] if the lookup fails.
    pub async fn resolve(&self, short_id: &str) -> Result<String, RegistryError> {
        let target_url = self.lookup_target(short_id).await?;

        if let Err(e) = self.store.incr(&clicks_key(short_id)).await {
            warn!("Failed to count click for {}: {}", short_id, e);
        }

        Ok(target_url)
    }

    /// Returns the target URL and click count of `short_id` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if `short_id` has no forward mapping.
    /// Returns [`RegistryError::StoreUnavailable`] if a lookup fails or the
    /// stored click count is not an integer.
    pub async fn get_details(&self, short_id: &str) -> Result<LinkDetails, RegistryError> {
        let target_url = self.lookup_target(short_id).await?;

        let click_count = self.read_counter(clicks_key(short_id)).await?;

        Ok(LinkDetails {
            short_id: short_id.to_string(),
            target_url,
            click_count,
        })
    }

    /// Returns how many identifiers have been allocated so far.
    ///
    /// This is the current value of the allocation counter; the most recent
    /// identifier is its base-36 encoding. An absent counter reads as 0.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StoreUnavailable`] if the lookup fails or the
    /// stored counter is not an integer.
    pub async fn allocated_count(&self) -> Result<i64, RegistryError> {
        self.read_counter(COUNTER_KEY.to_string()).await
    }

    /// Checks if the backing store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.store.health_check().await
    }

    async fn read_counter(&self, key: String) -> Result<i64, RegistryError> {
        match self.store.get(&key).await? {
            Some(raw) => Ok(raw.parse::<i64>().map_err(|e| StoreError::InvalidValue {
                key,
                reason: e.to_string(),
            })?),
            None => Ok(0),
        }
    }

    async fn lookup_target(&self, short_id: &str) -> Result<String, RegistryError> {
        self.store
            .get(&target_key(short_id))
            .await?
            .ok_or_else(|| RegistryError::NotFound {
                short_id: short_id.to_string(),
            })
    }
}
