//! Ownership check tool.
//!
//! The calling platform hits `/validate` when the server is connected and
//! compares the returned token with the number the deployer registered with.
//! The token is fixed per deployment, so the handler is a constant lookup.

use std::sync::Arc;

use tracing::info;

use crate::domains::tools::handlers::{HandlerResult, ToolHandler, ToolParams};
use crate::domains::tools::registry::Tool;

/// Returns the configured identity token.
#[derive(Debug, Clone)]
pub struct ValidateTool {
    token: String,
}

impl ValidateTool {
    /// Tool name as listed in the manifest.
    pub const NAME: &'static str = "validate";

    pub const ENDPOINT: &'static str = "/validate";

    pub const DESCRIPTION: &'static str = "Validates server ownership.";

    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Create the Tool definition for the registry.
    pub fn to_tool(token: impl Into<String>) -> Tool {
        Tool::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::ENDPOINT,
            Arc::new(Self::new(token)),
        )
    }
}

#[async_trait::async_trait]
impl ToolHandler for ValidateTool {
    async fn call(&self, _params: &ToolParams) -> HandlerResult {
        info!("Validation request received");
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validate_returns_token_every_time() {
        let tool = ValidateTool::new("917700000000");
        for _ in 0..3 {
            let out = tool.call(&ToolParams::default()).await.unwrap();
            assert_eq!(out, "917700000000");
        }
    }

    #[test]
    fn test_validate_definition() {
        let tool = ValidateTool::to_tool("1");
        assert_eq!(tool.name(), "validate");
        assert_eq!(tool.endpoint(), "/validate");
        assert!(tool.use_when().is_none());
        assert!(tool.parameters().is_empty());
    }
}
