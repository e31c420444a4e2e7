//! Failures surfaced by the link registry.

use thiserror::Error;

use crate::domain::codec::CodecError;
use crate::domain::store::StoreError;

/// Typed failure of a registry operation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Malformed input reached the identifier codec.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The short identifier has no forward mapping.
    #[error("Short link '{short_id}' not found")]
    NotFound { short_id: String },

    /// The underlying key-value operation failed.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

impl From<CodecError> for RegistryError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::InvalidArgument(message) => Self::InvalidArgument(message),
        }
    }
}
