//! HTTP client for the remote posts API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use tracing::debug;

use crate::domain::errors::ApiError;
use crate::domain::models::{ApiConfig, Post};
use crate::domain::ports::PostApi;

/// `PostApi` implementation backed by reqwest.
///
/// The underlying client is built once and pools connections; every
/// request carries the configured timeout. The base URL is injectable so
/// tests can point the adapter at a mock server.
pub struct HttpPostApi {
    http: ReqwestClient,
    base_url: String,
}

impl HttpPostApi {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check status and construct an `ApiError::Status` for non-2xx.
    fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn posts_by_user(&self, user_id: u64) -> Result<Vec<Post>, ApiError> {
        let url = format!("{}/posts", self.base_url);
        debug!(user_id, %url, "fetching posts for user");

        let response = self
            .http
            .get(&url)
            .query(&[("userId", user_id)])
            .send()
            .await?;

        let posts = Self::check_status(response)?.json::<Vec<Post>>().await?;
        debug!(user_id, count = posts.len(), "remote fetch succeeded");
        Ok(posts)
    }

    async fn post_by_id(&self, post_id: u64) -> Result<Option<Post>, ApiError> {
        let url = format!("{}/posts/{post_id}", self.base_url);
        debug!(post_id, %url, "fetching post");

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let post = Self::check_status(response)?.json::<Post>().await?;
        Ok(Some(post))
    }

    async fn recent_posts(&self, limit: usize) -> Result<Vec<Post>, ApiError> {
        let url = format!("{}/posts", self.base_url);
        debug!(limit, %url, "fetching recent posts");

        let response = self
            .http
            .get(&url)
            .query(&[("_limit", limit)])
            .send()
            .await?;

        Ok(Self::check_status(response)?.json::<Vec<Post>>().await?)
    }
}
