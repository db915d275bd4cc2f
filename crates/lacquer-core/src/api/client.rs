use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::{PaginatedPosts, Post, PostFeed};
use crate::config::AppSettings;
use crate::error::FetchError;

/// HTTP client for the content API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client from application settings
    pub fn new(settings: &AppSettings) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("lacquer/0.1.0")
            .timeout(Duration::from_secs(settings.request_timeout_secs()))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: settings.api_base_url().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, url: String) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                code: response.status().as_u16(),
            });
        }

        response.json().await.map_err(FetchError::Decode)
    }
}

impl PostFeed for ApiClient {
    fn fetch_post(&self, id: u64) -> impl Future<Output = Result<Post, FetchError>> + Send {
        self.get_json(format!("{}/api/auth/posts/{}/", self.base_url, id))
    }

    fn fetch_related(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<PaginatedPosts, FetchError>> + Send {
        self.get_json(format!("{}/api/auth/posts/{}/more/", self.base_url, id))
    }
}
