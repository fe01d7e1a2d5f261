//! News collaborator: fetches headlines for a topic.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument};

use super::error::NewsError;
use crate::core::config::Config;

/// One headline with its link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
}

/// Source of headlines for the news tool.
#[async_trait::async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch at most `max_articles` recent items about `topic`, newest first.
    async fn fetch(&self, topic: &str, max_articles: usize) -> Result<Vec<NewsItem>, NewsError>;
}

/// NewsAPI `/v2/everything` client.
#[derive(Clone)]
pub struct NewsApiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    url: Option<String>,
}

impl NewsApiClient {
    /// Create a client with an explicit endpoint, key and request timeout.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, NewsError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewsError::request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// Create a client from the server configuration.
    pub fn from_config(config: &Config) -> Result<Self, NewsError> {
        Self::new(
            config.tools.news_api_url.clone(),
            config.credentials.news_api_key.clone(),
            config.tools.timeout(),
        )
    }
}

#[async_trait::async_trait]
impl NewsSource for NewsApiClient {
    #[instrument(skip(self))]
    async fn fetch(&self, topic: &str, max_articles: usize) -> Result<Vec<NewsItem>, NewsError> {
        let api_key = self.api_key.as_deref().ok_or(NewsError::MissingApiKey)?;
        let page_size = max_articles.to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", topic),
                ("apiKey", api_key),
                ("pageSize", page_size.as_str()),
                ("sortBy", "publishedAt"),
                ("language", "en"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NewsError::request("Request timed out")
                } else if e.is_connect() {
                    NewsError::request("Connection failed")
                } else {
                    NewsError::request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status(status.as_u16()));
        }

        let body: EverythingResponse = response
            .json()
            .await
            .map_err(|e| NewsError::decode(e.to_string()))?;

        debug!("News API returned {} articles", body.articles.len());

        Ok(into_items(body.articles, max_articles))
    }
}

/// Keep articles that carry a link, in the order received.
fn into_items(articles: Vec<Article>, max_articles: usize) -> Vec<NewsItem> {
    articles
        .into_iter()
        .filter_map(|article| {
            let url = article.url?;
            let title = article
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Untitled".to_string());
            Some(NewsItem { title, url })
        })
        .take(max_articles)
        .collect()
}
