//! Invocation dispatcher.
//!
//! Looks a tool up, validates the raw parameters against its schema, runs
//! the handler under a timeout and wraps the outcome in the content
//! envelope. Structural problems (unknown tool, bad parameters) come back as
//! [`DispatchError`]; handler failures come back as content.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use super::error::{DispatchError, HandlerError};
use super::handlers::ToolParams;
use super::registry::{Tool, ToolRegistry};
use super::schema::validate_arguments;

/// Response envelope returned for every routed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    pub content: String,
}

impl InvocationResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Envelope for a handler that failed: the agent still gets a string.
    pub fn from_handler_error(err: &HandlerError) -> Self {
        Self::new(format!("Error: {}", err))
    }
}

/// Routes validated calls to tool handlers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>, timeout: Duration) -> Self {
        Self { registry, timeout }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Resolve the tool served at `endpoint`.
    pub fn resolve_endpoint(&self, endpoint: &str) -> Result<&Tool, DispatchError> {
        self.registry
            .find_by_endpoint(endpoint)
            .ok_or_else(|| DispatchError::unknown_tool(endpoint))
    }

    /// Invoke the tool named `name` with `raw` parameters.
    #[instrument(skip(self, raw))]
    pub async fn invoke(
        &self,
        name: &str,
        raw: Map<String, Value>,
    ) -> Result<InvocationResponse, DispatchError> {
        let received = Value::Object(raw.clone());
        info!("Tool '{}' called with parameters: {}", name, received);

        let tool = self.registry.get(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            DispatchError::unknown_tool(name)
        })?;

        let params = match validate_arguments(tool.parameters(), raw) {
            Ok(values) => ToolParams::new(values),
            Err(e) => {
                warn!("Rejected call to '{}': {}", name, e);
                return Err(e);
            }
        };

        let outcome = match tokio::time::timeout(self.timeout, tool.handler().call(&params)).await
        {
            Ok(result) => result,
            Err(_) => Err(HandlerError::Timeout(self.timeout)),
        };

        Ok(match outcome {
            Ok(content) => InvocationResponse::new(content),
            Err(e) => {
                warn!("Tool '{}' failed: {}", name, e);
                InvocationResponse::from_handler_error(&e)
            }
        })
    }
}
