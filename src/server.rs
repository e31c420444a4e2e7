//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, state construction, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::KeyValueStore;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Connects the store selected by the configuration.
///
/// # Errors
///
/// Returns an error if Redis cannot be reached or does not answer PING.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    if config.uses_memory_store() {
        tracing::warn!("Using in-memory store; links are lost on shutdown");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = RedisStore::connect(&config.redis_url, config.store_timeout())
        .await
        .context("Failed to connect to Redis")?;

    Ok(Arc::new(store))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Key-value store (Redis or in-memory)
/// - Shared application state
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;
    let state = AppState::new(store, config.base_url.clone());

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
