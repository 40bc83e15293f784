//! Cache-aside post fetching and fan-out aggregation.
//!
//! `posts_by_user` implements the cache-aside read path: check the store,
//! deserialize on a hit, go remote on a miss and write the result back.
//! `posts_for_users` fans that out over a batch of user ids, dropping and
//! logging failed partitions instead of aborting the batch.

use std::sync::Arc;

use tracing::{debug, error, instrument, warn};

use crate::domain::errors::{ApiError, CacheError, FetchError, FetchResult};
use crate::domain::models::Post;
use crate::domain::ports::{CacheStore, PostApi};
use crate::util::settle::settle_all;

/// Cache-aside fetch service over an injected cache store and posts API.
pub struct PostService {
    cache: Arc<dyn CacheStore>,
    api: Arc<dyn PostApi>,
    namespace: String,
}

impl PostService {
    /// Create a new service. `namespace` prefixes every cache key.
    pub fn new(cache: Arc<dyn CacheStore>, api: Arc<dyn PostApi>, namespace: String) -> Self {
        Self {
            cache,
            api,
            namespace,
        }
    }

    /// Cache key for one user's post collection.
    pub fn cache_key(&self, user_id: u64) -> String {
        format!("{}:{}", self.namespace, user_id)
    }

    /// Fetch one user's posts, cache-aside.
    ///
    /// A store error or malformed cached value is fatal for the call; the
    /// remote API is consulted only after a clean miss. On a successful
    /// remote fetch the serialized collection overwrites the cache entry
    /// whole. A failed write-back is logged and the fetched collection is
    /// still returned.
    ///
    /// Concurrent misses for the same key are not coalesced; both fetch
    /// remotely and the last write wins with equivalent data.
    #[instrument(skip(self))]
    pub async fn posts_by_user(&self, user_id: u64) -> FetchResult<Vec<Post>> {
        let key = self.cache_key(user_id);

        let cached = self
            .cache
            .get(&key)
            .await
            .map_err(|source| FetchError::CacheRead {
                key: key.clone(),
                source,
            })?;

        if let Some(bytes) = cached {
            let posts: Vec<Post> =
                serde_json::from_slice(&bytes).map_err(|err| FetchError::CacheRead {
                    key: key.clone(),
                    source: CacheError::Decode(err.to_string()),
                })?;
            debug!(key = %key, count = posts.len(), "cache hit");
            return Ok(posts);
        }
        debug!(key = %key, "cache miss");

        let posts = self
            .api
            .posts_by_user(user_id)
            .await
            .map_err(|source| FetchError::RemoteFetch { user_id, source })?;

        self.write_back(&key, &posts).await;

        Ok(posts)
    }

    /// Fetch posts for a batch of users concurrently and concatenate the
    /// successful collections in input order.
    ///
    /// Every fetch is driven to settlement; a failed partition is logged
    /// with its user id and excluded. When every partition fails the
    /// result is simply empty.
    pub async fn posts_for_users(&self, user_ids: &[u64]) -> Vec<Post> {
        let fetches = user_ids.iter().map(|&user_id| async move {
            self.posts_by_user(user_id)
                .await
                .map_err(|err| (user_id, err))
        });

        let settled = settle_all(fetches).await;
        for (user_id, err) in &settled.failures {
            error!(user_id = *user_id, error = %err, "dropping failed partition from aggregate");
        }

        settled.successes.into_iter().flatten().collect()
    }

    /// Fetch a single post by id, uncached.
    pub async fn post_by_id(&self, post_id: u64) -> Result<Option<Post>, ApiError> {
        self.api.post_by_id(post_id).await
    }

    /// Fetch the most recent posts, uncached.
    pub async fn recent_posts(&self, limit: usize) -> Result<Vec<Post>, ApiError> {
        self.api.recent_posts(limit).await
    }

    /// Persist a fetched collection under `key`, overwriting whole.
    ///
    /// Write failure leaves the cache cold for the next call but never
    /// fails the fetch that produced the data.
    async fn write_back(&self, key: &str, posts: &[Post]) {
        let bytes = match serde_json::to_vec(posts) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(key, error = %err, "could not serialize posts for write-back");
                return;
            }
        };

        if let Err(source) = self.cache.set(key, &bytes).await {
            let err = FetchError::CacheWrite {
                key: key.to_string(),
                source,
            };
            warn!(error = %err, "cache write-back failed");
        } else {
            debug!(key, bytes = bytes.len(), "cache entry written");
        }
    }
}
