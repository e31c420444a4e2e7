//! Redis-backed store implementation.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};

/// Redis implementation of [`KeyValueStore`].
///
/// Uses a multiplexed `ConnectionManager` that is cloned per call and
/// reconnects on its own. Every command is bounded by `command_timeout`;
/// an expired command surfaces as [`StoreError::Timeout`].
pub struct RedisStore {
    conn: ConnectionManager,
    command_timeout: Duration,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// is refused, or the PING fails.
    /// Returns [`StoreError::Timeout`] if the connection cannot be established
    /// within `command_timeout`.
    pub async fn connect(redis_url: &str, command_timeout: Duration) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(command_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout(command_timeout.as_millis() as u64))?
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            conn: manager,
            command_timeout,
        };

        let mut conn = store.conn.clone();
        store
            .bounded(conn.ping::<()>())
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(store)
    }

    async fn bounded<T>(&self, command: impl Future<Output = RedisResult<T>>) -> StoreResult<T> {
        match tokio::time::timeout(self.command_timeout, command).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(StoreError::Command(e.to_string())),
            Err(_) => Err(StoreError::Timeout(self.command_timeout.as_millis() as u64)),
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value = self.bounded(conn.get::<_, Option<String>>(key)).await?;

        match &value {
            Some(_) => debug!("Store HIT: {}", key),
            None => debug!("Store MISS: {}", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        self.bounded(conn.set::<_, _, ()>(key, value)).await?;
        debug!("Store SET: {}", key);
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.conn.clone();
        let value = self.bounded(conn.incr::<_, _, i64>(key, 1)).await?;
        debug!("Store INCR: {} -> {}", key, value);
        Ok(value)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        self.bounded(conn.ping::<()>()).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisStore::connect("not-a-redis-url", Duration::from_millis(200)).await;

        assert!(matches!(result, Err(StoreError::Connection(_))));
    }
}
