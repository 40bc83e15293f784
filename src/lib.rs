//! Postcache - cache-aside blog post fetching
//!
//! Postcache fetches per-user collections of blog posts from a remote API
//! through a cache-aside read path backed by an external key-value store,
//! and aggregates independent per-user fetches concurrently, tolerating
//! partial failure.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): wire model, port traits, error types
//! - **Service Layer** (`services`): the cache-aside fetcher and fan-out
//!   aggregator
//! - **Infrastructure Layer** (`infrastructure`): reqwest API client,
//!   Redis and in-memory cache stores, configuration loading
//! - **Utilities** (`util`): domain-independent settle/partition combinator
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use postcache::{HttpPostApi, InMemoryCacheStore, PostService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api = Arc::new(HttpPostApi::new(&Default::default())?);
//!     let cache = Arc::new(InMemoryCacheStore::new());
//!     let service = PostService::new(cache, api, "posts:user".to_string());
//!
//!     let all_posts = service.posts_for_users(&[1, 2, 3]).await;
//!     println!("{} posts", all_posts.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod util;

// Re-export commonly used types for convenience
pub use domain::errors::{ApiError, CacheError, FetchError, FetchResult};
pub use domain::models::{ApiConfig, CacheConfig, Config, LoggingConfig, Post};
pub use domain::ports::{CacheStore, PostApi};
pub use infrastructure::api::HttpPostApi;
pub use infrastructure::cache::{InMemoryCacheStore, RedisCacheStore};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::PostService;
pub use util::settle::{settle_all, Settled};
