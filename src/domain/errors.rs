//! Domain errors for cache-aside post fetching.

use thiserror::Error;

/// Errors from the cache store collaborator.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection failed: {0}")]
    Connection(String),

    #[error("cache command failed: {0}")]
    Command(String),

    #[error("cached value is not a valid post collection: {0}")]
    Decode(String),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_connection_refusal() || err.is_connection_dropped() || err.is_io_error() {
            Self::Connection(err.to_string())
        } else {
            Self::Command(err.to_string())
        }
    }
}

/// Errors from the remote posts API collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("response body is not a valid post collection: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Per-key failure taxonomy for a cache-aside fetch.
///
/// A `CacheRead` is fatal for the key: the remote API is only consulted
/// after a cache *miss*, never after a cache error. A `CacheWrite` never
/// fails the overall fetch; it is logged and the remote result is returned
/// anyway, leaving the cache cold for the next call.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cache read failed for key {key}: {source}")]
    CacheRead {
        key: String,
        #[source]
        source: CacheError,
    },

    #[error("failed to fetch posts for user {user_id}: {source}")]
    RemoteFetch {
        user_id: u64,
        #[source]
        source: ApiError,
    },

    #[error("cache write failed for key {key}: {source}")]
    CacheWrite {
        key: String,
        #[source]
        source: CacheError,
    },
}

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
