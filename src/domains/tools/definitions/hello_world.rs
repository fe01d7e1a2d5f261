//! Connectivity check tool.

use std::sync::Arc;

use tracing::info;

use crate::domains::tools::handlers::{HandlerResult, ToolHandler, ToolParams};
use crate::domains::tools::registry::Tool;

/// Answers with a fixed greeting so a deployer can confirm the wiring.
#[derive(Debug, Clone, Default)]
pub struct HelloWorldTool;

impl HelloWorldTool {
    /// Tool name as listed in the manifest.
    pub const NAME: &'static str = "hello";

    pub const ENDPOINT: &'static str = "/hello_world";

    pub const DESCRIPTION: &'static str = "A simple tool that says hello.";

    pub const USE_WHEN: &'static str =
        "The user wants to check whether the custom tool server is connected.";

    pub const GREETING: &'static str = "Hello from my custom tool! The connection is working!";

    /// Create the Tool definition for the registry.
    pub fn to_tool() -> Tool {
        Tool::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::ENDPOINT,
            Arc::new(Self),
        )
        .with_use_when(Self::USE_WHEN)
    }
}

#[async_trait::async_trait]
impl ToolHandler for HelloWorldTool {
    async fn call(&self, _params: &ToolParams) -> HandlerResult {
        info!("Hello world tool called");
        Ok(Self::GREETING.to_string())
    }
}
