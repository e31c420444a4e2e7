//! Helpers shared by the HTTP adapters.
//!
//! - [`url_validator`] - accepts only absolute HTTP(S) target URLs

pub mod url_validator;
