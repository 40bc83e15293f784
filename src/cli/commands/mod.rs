//! Subcommand implementations.

pub mod init;
pub mod post;
pub mod posts;
pub mod recent;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::domain::ports::CacheStore;
use crate::infrastructure::api::HttpPostApi;
use crate::infrastructure::cache::{InMemoryCacheStore, RedisCacheStore};
use crate::services::PostService;

/// Wire a `PostService` from configuration.
///
/// `no_cache` swaps the Redis store for a process-local map so commands
/// can run without cache infrastructure.
pub(crate) async fn build_service(config: &Config, no_cache: bool) -> Result<PostService> {
    let api = Arc::new(HttpPostApi::new(&config.api)?);

    let cache: Arc<dyn CacheStore> = if no_cache {
        Arc::new(InMemoryCacheStore::new())
    } else {
        let store = RedisCacheStore::connect(&config.cache.url)
            .await
            .with_context(|| format!("failed to connect to cache store at {}", config.cache.url))?;
        store
            .ping()
            .await
            .context("cache store did not answer PING")?;
        Arc::new(store)
    };

    Ok(PostService::new(
        cache,
        api,
        config.cache.namespace.clone(),
    ))
}
