//! Redis-backed cache store.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::debug;

use crate::domain::errors::CacheError;
use crate::domain::ports::CacheStore;

/// `CacheStore` implementation over a Redis connection manager.
///
/// The connection is constructed explicitly and injected into the service
/// rather than referenced globally; the manager reconnects on its own and
/// is cheap to clone per command, so concurrent fetches on independent
/// keys share it safely. Dropping the store releases the connection.
pub struct RedisCacheStore {
    conn: ConnectionManager,
}

impl RedisCacheStore {
    /// Connect to the store at `url` (e.g. `redis://127.0.0.1:6379`).
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client =
            redis::Client::open(url).map_err(|err| CacheError::Connection(err.to_string()))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|err| CacheError::Connection(err.to_string()))?;

        debug!(%url, "connected to cache store");
        Ok(Self { conn })
    }

    /// Round-trip a `PING`, for startup health checks.
    pub async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }
}
