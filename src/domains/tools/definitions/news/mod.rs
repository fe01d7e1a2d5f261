//! Personalized news tool.
//!
//! Fetches recent headlines for a topic through a [`NewsSource`] and renders
//! them as a bullet list. The production source is NewsAPI
//! ([`NewsApiClient`]).

mod error;
mod fetcher;

pub use error::NewsError;
pub use fetcher::{NewsApiClient, NewsItem, NewsSource};

use std::sync::Arc;

use tracing::{info, warn};

use crate::domains::tools::error::{HandlerError, RegistryError};
use crate::domains::tools::handlers::{HandlerResult, ToolHandler, ToolParams};
use crate::domains::tools::registry::Tool;
use crate::domains::tools::schema::{ParamType, ParameterSpec};

/// Default number of articles returned.
pub const DEFAULT_MAX_ARTICLES: usize = 5;

/// Upper bound accepted for `max_articles`.
pub const MAX_ARTICLES_LIMIT: usize = 20;

/// Clamp a requested article count to `1..=MAX_ARTICLES_LIMIT`.
pub fn validate_max_articles(requested: Option<i64>) -> usize {
    match requested {
        None => DEFAULT_MAX_ARTICLES,
        Some(n) => n.clamp(1, MAX_ARTICLES_LIMIT as i64) as usize,
    }
}

/// Render items as `- <title>: <url>` lines.
pub fn format_items(items: &[NewsItem]) -> String {
    items
        .iter()
        .map(|item| format!("- {}: {}", item.title, item.url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// News tool implementation.
pub struct NewsTool {
    source: Arc<dyn NewsSource>,
}

impl NewsTool {
    /// Tool name as listed in the manifest.
    pub const NAME: &'static str = "get_personalized_news";

    pub const ENDPOINT: &'static str = "/get_personalized_news";

    pub const DESCRIPTION: &'static str =
        "Fetches the latest news headlines with links for a topic.";

    pub const USE_WHEN: &'static str =
        "The user asks for news, headlines, or recent articles about a topic.";

    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }

    /// Create the Tool definition for the registry.
    pub fn to_tool(source: Arc<dyn NewsSource>) -> Result<Tool, RegistryError> {
        Tool::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::ENDPOINT,
            Arc::new(Self::new(source)),
        )
        .with_use_when(Self::USE_WHEN)
        .with_parameter(ParameterSpec::required(
            "topic",
            ParamType::String,
            "The topic to find news about.",
        ))?
        .with_parameter(ParameterSpec::optional(
            "max_articles",
            ParamType::Integer,
            "Maximum number of articles to return (default 5, max 20).",
        ))
    }
}

#[async_trait::async_trait]
impl ToolHandler for NewsTool {
    async fn call(&self, params: &ToolParams) -> HandlerResult {
        let topic = params.required_str("topic")?;
        let max_articles = validate_max_articles(params.integer("max_articles"));

        info!("Fetching up to {} articles about '{}'", max_articles, topic);

        let items = self.source.fetch(topic, max_articles).await.map_err(|e| {
            warn!("Error fetching news: {}", e);
            HandlerError::from(e)
        })?;

        if items.is_empty() {
            return Ok(format!(
                "Sorry, I couldn't find any recent articles about {}.",
                topic
            ));
        }

        Ok(format_items(&items))
    }
}
