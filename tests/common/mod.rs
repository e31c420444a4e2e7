#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortly::domain::{KeyValueStore, StoreError, StoreResult};
use shortly::infrastructure::store::MemoryStore;
use axum::Router;
use shortly::routes::{app_router, router};
use shortly::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://s.example.com";

/// Store whose every call fails, as if Redis were unreachable.
pub struct DownStore;

#[async_trait]
impl KeyValueStore for DownStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn incr(&self, _key: &str) -> StoreResult<i64> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), BASE_URL);
    (state, store)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    (server_for(state), store)
}

pub fn server_for(state: AppState) -> TestServer {
    TestServer::new(router(state, "static")).unwrap()
}

/// Server over the full application service, trailing-slash trimming included.
pub fn create_app_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    let app = Router::new().fallback_service(app_router(state, "static"));
    (TestServer::new(app).unwrap(), store)
}

pub async fn seed_link(store: &MemoryStore, short_id: &str, url: &str) {
    store
        .set(&format!("url-target:{}", short_id), url)
        .await
        .unwrap();
    store
        .set(&format!("reverse-url:{}", url), short_id)
        .await
        .unwrap();
}
