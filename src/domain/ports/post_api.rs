//! Remote posts API port.

use async_trait::async_trait;

use crate::domain::errors::ApiError;
use crate::domain::models::Post;

/// Call/response contract of the remote posts API.
#[async_trait]
pub trait PostApi: Send + Sync {
    /// Fetch every post belonging to one user (`GET /posts?userId=<id>`).
    async fn posts_by_user(&self, user_id: u64) -> Result<Vec<Post>, ApiError>;

    /// Fetch a single post (`GET /posts/<id>`); a not-found signal maps
    /// to `Ok(None)`.
    async fn post_by_id(&self, post_id: u64) -> Result<Option<Post>, ApiError>;

    /// Fetch the most recent posts (`GET /posts?_limit=<n>`).
    async fn recent_posts(&self, limit: usize) -> Result<Vec<Post>, ApiError>;
}
