//! Tracing/logging (shared setup).

/// Tracing configuration (filters, writers).
pub mod tracing;

pub use tracing::{init, init_with_writer};
