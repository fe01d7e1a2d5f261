//! Tool Registry - central registration of all tools.
//!
//! This module provides:
//! - The [`Tool`] definition (metadata, parameter schema and handler)
//! - An append-only [`ToolRegistry`] that keeps registration order
//! - [`builtin_registry`] / [`default_registry`], which register the built-in
//!   tool set
//!
//! The registry is filled once at startup and shared read-only behind an
//! `Arc`; nothing mutates it while requests are served.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use super::definitions::{
    HelloWorldTool, NewsApiClient, NewsSource, NewsTool, ValidateTool, VerifyNewsTool,
};
use super::error::RegistryError;
use super::handlers::ToolHandler;
use super::schema::ParameterSpec;
use crate::core::{Error, config::Config};

/// Paths the HTTP transport serves itself.
pub const RESERVED_ENDPOINTS: &[&str] = &["/", "/mcp", "/health"];

/// A registered tool: what the manifest advertises plus the handler to run.
#[derive(Clone)]
pub struct Tool {
    name: String,
    description: String,
    use_when: Option<String>,
    endpoint: String,
    parameters: Vec<ParameterSpec>,
    handler: Arc<dyn ToolHandler>,
}

impl Tool {
    /// Create a tool without parameters.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        endpoint: impl Into<String>,
        handler: Arc<dyn ToolHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            use_when: None,
            endpoint: endpoint.into(),
            parameters: Vec::new(),
            handler,
        }
    }

    /// Set the natural-language hint telling the agent when to pick this tool.
    pub fn with_use_when(mut self, use_when: impl Into<String>) -> Self {
        self.use_when = Some(use_when.into());
        self
    }

    /// Declare a parameter. Names must be unique within the tool.
    pub fn with_parameter(mut self, spec: ParameterSpec) -> Result<Self, RegistryError> {
        if self.parameters.iter().any(|p| p.name == spec.name) {
            return Err(RegistryError::duplicate_parameter(&self.name, spec.name));
        }
        self.parameters.push(spec);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn use_when(&self) -> Option<&str> {
        self.use_when.as_deref()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Declared parameters, in declaration order.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn handler(&self) -> &Arc<dyn ToolHandler> {
        &self.handler
    }
}

impl fmt::Debug for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Tool registry - holds every tool the server exposes.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool.
    ///
    /// Fails when the name or endpoint is already taken, or when the endpoint
    /// is not an absolute path or is one of [`RESERVED_ENDPOINTS`].
    pub fn register(&mut self, tool: Tool) -> Result<(), RegistryError> {
        if self.get(tool.name()).is_some() {
            return Err(RegistryError::duplicate_tool(tool.name()));
        }
        if !tool.endpoint().starts_with('/') {
            return Err(RegistryError::InvalidEndpoint(tool.endpoint().to_string()));
        }
        if RESERVED_ENDPOINTS.contains(&tool.endpoint()) {
            return Err(RegistryError::ReservedEndpoint(tool.endpoint().to_string()));
        }
        if let Some(existing) = self.find_by_endpoint(tool.endpoint()) {
            return Err(RegistryError::DuplicateEndpoint {
                endpoint: tool.endpoint().to_string(),
                existing: existing.name().to_string(),
            });
        }

        debug!(tool = tool.name(), endpoint = tool.endpoint(), "Registering tool");
        self.tools.push(tool);
        Ok(())
    }

    /// All tools in registration order.
    pub fn list(&self) -> &[Tool] {
        &self.tools
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name() == name)
    }

    /// Look up the tool routed at `endpoint`.
    pub fn find_by_endpoint(&self, endpoint: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.endpoint() == endpoint)
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(Tool::name).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Build the registry with every built-in tool, backed by the live NewsAPI
/// client.
pub fn default_registry(config: &Config) -> crate::core::Result<ToolRegistry> {
    let news = NewsApiClient::from_config(config)
        .map_err(|e| Error::config(format!("Failed to build news client: {}", e)))?;
    Ok(builtin_registry(config, Arc::new(news))?)
}

/// Build the registry with every built-in tool.
///
/// This is the central place where tools are registered. When adding a new
/// tool, add it here.
pub fn builtin_registry(
    config: &Config,
    news: Arc<dyn NewsSource>,
) -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();

    registry.register(ValidateTool::to_tool(config.validation_token()))?;
    registry.register(VerifyNewsTool::to_tool()?)?;
    registry.register(HelloWorldTool::to_tool())?;
    registry.register(NewsTool::to_tool(news)?)?;

    info!(
        "Registered {} tools: {:?}",
        registry.len(),
        registry.tool_names()
    );

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::handlers::FnHandler;
    use crate::domains::tools::schema::ParamType;

    fn echo(name: &str, endpoint: &str) -> Tool {
        Tool::new(
            name,
            "echo",
            endpoint,
            Arc::new(FnHandler::new(|_| Ok("echo".to_string()))),
        )
    }

    fn test_config() -> Config {
        let mut config = Config::default();
        config.credentials.validation_token = Some("910000000000".to_string());
        config
    }

    #[test]
    fn test_register_keeps_order() {
        let mut registry = ToolRegistry::new();
        registry.register(echo("b", "/b")).unwrap();
        registry.register(echo("a", "/a")).unwrap();
        registry.register(echo("c", "/c")).unwrap();
        assert_eq!(registry.tool_names(), vec!["b", "a", "c"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_register_duplicate_name() {
        let mut registry = ToolRegistry::new();
        registry.register(echo("hello", "/hello_world")).unwrap();
        let err = registry.register(echo("hello", "/other")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTool("hello".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_duplicate_endpoint() {
        let mut registry = ToolRegistry::new();
        registry.register(echo("one", "/shared")).unwrap();
        let err = registry.register(echo("two", "/shared")).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateEndpoint { ref existing, .. } if existing == "one"
        ));
    }

    #[test]
    fn test_register_rejects_bad_endpoints() {
        let mut registry = ToolRegistry::new();
        assert_eq!(
            registry.register(echo("x", "no_slash")).unwrap_err(),
            RegistryError::InvalidEndpoint("no_slash".to_string())
        );
        assert_eq!(
            registry.register(echo("y", "/mcp")).unwrap_err(),
            RegistryError::ReservedEndpoint("/mcp".to_string())
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_parameter() {
        let err = echo("x", "/x")
            .with_parameter(ParameterSpec::required("q", ParamType::String, "query"))
            .unwrap()
            .with_parameter(ParameterSpec::optional("q", ParamType::Integer, "again"))
            .unwrap_err();
        assert_eq!(err, RegistryError::duplicate_parameter("x", "q"));
    }

    #[test]
    fn test_lookup_by_endpoint() {
        let mut registry = ToolRegistry::new();
        registry.register(echo("hello", "/hello_world")).unwrap();
        assert_eq!(
            registry.find_by_endpoint("/hello_world").map(Tool::name),
            Some("hello")
        );
        assert!(registry.find_by_endpoint("/nonexistent_tool").is_none());
        assert!(registry.get("hello").is_some());
    }

    #[test]
    fn test_default_registry_tools() {
        let registry = default_registry(&test_config()).unwrap();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.tool_names(),
            vec!["validate", "verify", "hello", "get_personalized_news"]
        );
        assert_eq!(
            registry.get("verify").map(Tool::endpoint),
            Some("/verify_news")
        );
    }
}
