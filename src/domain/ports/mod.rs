//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters
//! must implement:
//! - `CacheStore`: key/value operations against the external cache store
//! - `PostApi`: call/response contract of the remote posts API
//!
//! These traits keep the fetch service independent of the concrete cache
//! and HTTP implementations, and let tests substitute either collaborator.

mod cache_store;
mod post_api;

pub use cache_store::CacheStore;
pub use post_api::PostApi;
