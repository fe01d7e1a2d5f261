//! Tool handler contract.
//!
//! A handler receives parameters that already passed schema validation and
//! returns the text for the content envelope, or a [`HandlerError`] that the
//! dispatcher turns into an explanatory message.

use serde_json::{Map, Value};

use super::error::HandlerError;

/// Result type returned by tool handlers.
pub type HandlerResult = Result<String, HandlerError>;

/// Trait implemented by every tool's execution logic.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with validated parameters.
    async fn call(&self, params: &ToolParams) -> HandlerResult;
}

/// Parameters of one invocation, validated against the tool's schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolParams {
    values: Map<String, Value>,
}

impl ToolParams {
    pub(crate) fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Raw value of a parameter, if supplied.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// String value of a parameter, if supplied.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Integer value of a parameter, if supplied. Unsigned values beyond
    /// `i64::MAX` saturate.
    pub fn integer(&self, name: &str) -> Option<i64> {
        let value = self.get(name)?;
        value
            .as_i64()
            .or_else(|| value.as_u64().map(|_| i64::MAX))
    }

    /// String value of a parameter the schema marks as required.
    pub fn required_str(&self, name: &str) -> Result<&str, HandlerError> {
        self.string(name)
            .ok_or_else(|| HandlerError::failed(format!("Parameter '{}' was not provided.", name)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Handler backed by a plain synchronous function.
pub struct FnHandler<F>(F);

impl<F> FnHandler<F>
where
    F: Fn(&ToolParams) -> HandlerResult + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

#[async_trait::async_trait]
impl<F> ToolHandler for FnHandler<F>
where
    F: Fn(&ToolParams) -> HandlerResult + Send + Sync,
{
    async fn call(&self, params: &ToolParams) -> HandlerResult {
        (self.0)(params)
    }
}
