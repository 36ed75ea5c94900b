//! Tracing/logging setup shared by the libris binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{init, init_with_default};
