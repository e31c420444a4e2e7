//! Application layer orchestrating the store and the identifier codec.
//!
//! [`registry::LinkRegistry`] is the only component that reads or writes
//! link data. HTTP handlers and the admin CLI call it and nothing below it.

pub mod registry;

pub use registry::LinkRegistry;
