//! Process-local in-memory cache store.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::errors::CacheError;
use crate::domain::ports::CacheStore;

/// `CacheStore` backed by a concurrent in-process map.
///
/// Used for cache-less runs (`--no-cache`) and tests. Entries live for
/// the lifetime of the process; there is no eviction.
#[derive(Default)]
pub struct InMemoryCacheStore {
    entries: DashMap<String, Vec<u8>>,
}

impl InMemoryCacheStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_overwrites_existing_entry() {
        let store = InMemoryCacheStore::new();
        store.set("k", b"old").await.unwrap();
        store.set("k", b"new").await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some(b"new".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_of_absent_key_is_a_miss() {
        let store = InMemoryCacheStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }
}
