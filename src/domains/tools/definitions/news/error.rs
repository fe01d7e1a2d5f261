//! News collaborator error types.

use thiserror::Error;

use crate::domains::tools::error::HandlerError;

/// Errors raised while fetching news.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NewsError {
    /// No API key is configured.
    #[error("News API key is not configured.")]
    MissingApiKey,

    /// The request could not be sent or timed out.
    #[error("Request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("News API returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl NewsError {
    /// Create a new "request" error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create a new "decode" error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

impl From<NewsError> for HandlerError {
    fn from(err: NewsError) -> Self {
        match err {
            NewsError::MissingApiKey => HandlerError::unavailable(err.to_string()),
            NewsError::Request(_) | NewsError::Status(_) | NewsError::Decode(_) => {
                HandlerError::unavailable("Could not connect to the news service.")
            }
        }
    }
}
