//! Configuration management for the tool server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use super::error::{Error, Result};

/// Default NewsAPI endpoint used by the news tool.
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// Main configuration structure for the tool server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification reported in the manifest.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub transport: HttpConfig,

    /// Ownership check and external API credentials.
    pub credentials: CredentialsConfig,

    /// Tool execution settings.
    pub tools: ToolsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in the manifest.
    pub name: String,

    /// The description reported in the manifest.
    pub description: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Deployment identity and external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Token returned by the `validate` tool. The calling platform compares
    /// it against the number the deployer registered with.
    pub validation_token: Option<String>,

    /// NewsAPI key. When absent the news tool answers with an error message
    /// instead of headlines.
    pub news_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "validation_token",
                &self.validation_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "news_api_key",
                &self.news_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Tool execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Upper bound for a single handler call, in seconds.
    pub timeout_secs: u64,

    /// Endpoint queried by the news tool.
    pub news_api_url: String,
}

impl ToolsConfig {
    /// Handler timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            news_api_url: DEFAULT_NEWS_API_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Fake News Verifier".to_string(),
                description: "A tool to help users fact-check and verify news claims."
                    .to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: HttpConfig::default(),
            credentials: CredentialsConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`. The news key is also
    /// accepted under its bare `NEWS_API_KEY` name.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(description) = std::env::var("MCP_SERVER_DESCRIPTION") {
            config.server.description = description;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = HttpConfig::from_env();

        config.credentials.validation_token = std::env::var("MCP_VALIDATION_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        config.credentials.news_api_key = std::env::var("MCP_NEWS_API_KEY")
            .or_else(|_| std::env::var("NEWS_API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        if let Ok(url) = std::env::var("MCP_NEWS_API_URL") {
            config.tools.news_api_url = url;
        }

        if let Some(secs) = std::env::var("MCP_TOOL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.tools.timeout_secs = secs;
        }

        config
    }

    /// Check the settings a deployment cannot run without.
    ///
    /// A missing news key is only reported: the news tool answers with an
    /// error message until one is configured.
    pub fn validate(&self) -> Result<()> {
        if self.credentials.news_api_key.is_some() {
            info!("News API key loaded from environment");
        } else {
            warn!(
                "No news API key configured. Set MCP_NEWS_API_KEY (or NEWS_API_KEY); \
                 the news tool will report an error until then."
            );
        }

        match self.credentials.validation_token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(()),
            _ => Err(Error::config(
                "MCP_VALIDATION_TOKEN must be set to the number registered with the calling platform",
            )),
        }
    }

    /// The identity token, or an empty string when none is configured.
    pub fn validation_token(&self) -> &str {
        self.credentials.validation_token.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_VALIDATION_TOKEN", "919999999999");
            std::env::set_var("MCP_NEWS_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.validation_token(), "919999999999");
        assert_eq!(
            config.credentials.news_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var("MCP_VALIDATION_TOKEN");
            std::env::remove_var("MCP_NEWS_API_KEY");
        }
    }

    #[test]
    fn test_bare_news_key_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_NEWS_API_KEY");
            std::env::set_var("NEWS_API_KEY", "bare_key");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.news_api_key.as_deref(), Some("bare_key"));
        unsafe {
            std::env::remove_var("NEWS_API_KEY");
        }
    }

    #[test]
    fn test_timeout_from_env_ignores_garbage() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TOOL_TIMEOUT_SECS", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.timeout_secs, 5);

        unsafe {
            std::env::set_var("MCP_TOOL_TIMEOUT_SECS", "12");
        }
        let config = Config::from_env();
        assert_eq!(config.tools.timeout(), Duration::from_secs(12));
        unsafe {
            std::env::remove_var("MCP_TOOL_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_validate_requires_token() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.credentials.validation_token = Some("   ".to_string());
        assert!(config.validate().is_err());

        config.credentials.validation_token = Some("917700000000".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            validation_token: Some("917700000000".to_string()),
            news_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(!debug_str.contains("917700000000"));
    }

    #[test]
    fn test_config_default_manifest_identity() {
        let config = Config::default();
        assert_eq!(config.server.name, "Fake News Verifier");
        assert!(config.credentials.news_api_key.is_none());
    }
}
