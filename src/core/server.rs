//! Tool server implementation and lifecycle management.
//!
//! The [`ToolServer`] owns the read-only tool registry and exposes the three
//! operations the transport needs: building the manifest, resolving an
//! endpoint and invoking a tool.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered in `domains/tools/registry.rs`. The registry is built once
//! here and shared behind an `Arc`; the manifest builder and the dispatcher
//! both read from that single instance.
//! **Adding a new tool does NOT require modifying this file!**

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{
    DispatchError, Dispatcher, InvocationResponse, Manifest, ManifestBuilder, ToolRegistry,
    default_registry,
};

/// The tool server.
///
/// Cheap to clone; all clones share the same registry.
#[derive(Debug, Clone)]
pub struct ToolServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Builds the discovery document.
    manifest: ManifestBuilder,

    /// Validates and routes tool calls.
    dispatcher: Dispatcher,
}

impl ToolServer {
    /// Create a server with the built-in tool set.
    pub fn new(config: Config) -> Result<Self> {
        let registry = default_registry(&config)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an already populated registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        let config = Arc::new(config);
        let registry = Arc::new(registry);

        info!("Serving {} tools", registry.len());

        Self {
            manifest: ManifestBuilder::new(
                config.server.name.clone(),
                config.server.description.clone(),
                registry.clone(),
            ),
            dispatcher: Dispatcher::new(registry, config.tools.timeout()),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        self.dispatcher.registry()
    }

    /// Build the discovery manifest from the current registry.
    pub fn manifest(&self) -> Manifest<'_> {
        self.manifest.build()
    }

    /// Invoke the tool routed at `endpoint`.
    pub async fn call_endpoint(
        &self,
        endpoint: &str,
        arguments: Map<String, Value>,
    ) -> std::result::Result<InvocationResponse, DispatchError> {
        let name = self.dispatcher.resolve_endpoint(endpoint)?.name().to_string();
        self.call_tool(&name, arguments).await
    }

    /// Invoke a tool by name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> std::result::Result<InvocationResponse, DispatchError> {
        self.dispatcher.invoke(name, arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.credentials.validation_token = Some("917700000000".to_string());
        config
    }

    #[test]
    fn test_server_manifest_lists_builtin_tools() {
        let server = ToolServer::new(test_config()).unwrap();
        let value = serde_json::to_value(server.manifest()).unwrap();
        assert_eq!(value["name"], "Fake News Verifier");
        let tools = value["tools"].as_object().unwrap();
        assert_eq!(tools.len(), 4);
        for name in ["validate", "verify", "hello", "get_personalized_news"] {
            assert!(tools[name]["parameters"].is_object(), "{} has parameters", name);
        }
    }

    #[tokio::test]
    async fn test_call_endpoint_routes_by_path() {
        let server = ToolServer::new(test_config()).unwrap();
        let response = server.call_endpoint("/validate", Map::new()).await.unwrap();
        assert_eq!(response.content, "917700000000");
    }

    #[tokio::test]
    async fn test_call_endpoint_unknown() {
        let server = ToolServer::new(test_config()).unwrap();
        let err = server
            .call_endpoint("/nonexistent_tool", Map::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::UnknownTool(_)));
    }

    #[tokio::test]
    async fn test_news_without_key_degrades_to_content() {
        let server = ToolServer::new(test_config()).unwrap();
        let args = json!({ "topic": "ai" }).as_object().cloned().unwrap();
        let response = server.call_tool("get_personalized_news", args).await.unwrap();
        assert_eq!(response.content, "Error: News API key is not configured.");
    }
}
