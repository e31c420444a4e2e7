//! Domain layer: identifier codec, store contract, and key namespace.
//!
//! Nothing in this layer depends on HTTP or on a concrete store.
//!
//! - [`codec`] - base-36 mapping between counter values and short identifiers
//! - [`store`] - [`store::KeyValueStore`] trait implemented by the infrastructure layer
//! - [`keys`] - names of the keys the registry reads and writes
//! - [`error`] - [`error::RegistryError`] taxonomy
//! - [`link`] - value types returned by the registry

pub mod codec;
pub mod error;
pub mod keys;
pub mod link;
pub mod store;

pub use error::RegistryError;
pub use link::LinkDetails;
pub use store::{KeyValueStore, StoreError, StoreResult};

#[cfg(test)]
pub use store::MockKeyValueStore;
