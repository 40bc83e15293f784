//! Domain layer for the postcache fetch service.
//!
//! This module contains the wire model, port traits, and error types.
//! It performs no I/O of its own.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ApiError, CacheError, FetchError, FetchResult};
