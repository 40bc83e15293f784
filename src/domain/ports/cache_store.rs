//! Cache store port.

use async_trait::async_trait;

use crate::domain::errors::CacheError;

/// Key/value interface over the external cache store.
///
/// Only `GET` and `SET` are consumed; eviction, TTL, and durability are
/// the store's own concern. Implementations must tolerate concurrent
/// reads and writes on independent keys.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a key. `Ok(None)` is a miss; an `Err` is a store failure
    /// and is fatal for the caller's fetch.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Write a serialized value under a key, unconditionally overwriting
    /// any existing entry.
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;
}
