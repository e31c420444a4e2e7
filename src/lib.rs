//! # Shortly
//!
//! A small URL shortener: submit a long URL, get a short base-36 identifier,
//! follow the identifier to be redirected while a click counter ticks.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Identifier codec, store contract, key namespace
//! - **Application Layer** ([`application`]) - [`application::LinkRegistry`], the only code touching link data
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - JSON endpoints, redirect, health, tracing
//! - **Web Layer** ([`web`]) - HTML form and details page
//!
//! ## Storage
//!
//! All state lives in Redis under four key families:
//!
//! | Key | Value |
//! |---|---|
//! | `last-url-id` | counter, `INCR`ed once per new identifier |
//! | `url-target:<id>` | target URL |
//! | `reverse-url:<url>` | identifier, makes re-shortening idempotent |
//! | `click-count:<id>` | resolutions of `<id>` |
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::LinkRegistry;
    pub use crate::domain::{KeyValueStore, LinkDetails, RegistryError, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
