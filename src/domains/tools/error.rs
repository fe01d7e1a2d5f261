//! Tool-specific error types.
//!
//! Three families, matching where a failure originates:
//! - [`RegistryError`]: a tool set that cannot be served (startup, fatal)
//! - [`DispatchError`]: a call the caller got wrong (reported to the caller)
//! - [`HandlerError`]: a tool that ran but could not produce its answer
//!   (absorbed into the content envelope)

use std::time::Duration;

use thiserror::Error;

use super::schema::ParamType;

/// Errors raised while building the tool registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two tools share a name.
    #[error("Duplicate tool: {0}")]
    DuplicateTool(String),

    /// Two tools share an endpoint.
    #[error("Endpoint {endpoint} is already used by tool {existing}")]
    DuplicateEndpoint { endpoint: String, existing: String },

    /// The endpoint collides with a path the server serves itself.
    #[error("Endpoint {0} is reserved by the server")]
    ReservedEndpoint(String),

    /// The endpoint is not an absolute path.
    #[error("Invalid endpoint '{0}': must start with '/'")]
    InvalidEndpoint(String),

    /// A tool declares the same parameter twice.
    #[error("Tool {tool} declares parameter {parameter} more than once")]
    DuplicateParameter { tool: String, parameter: String },
}

impl RegistryError {
    /// Create a new "duplicate tool" error.
    pub fn duplicate_tool(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    /// Create a new "duplicate parameter" error.
    pub fn duplicate_parameter(tool: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::DuplicateParameter {
            tool: tool.into(),
            parameter: parameter.into(),
        }
    }
}

/// Errors that reject an invocation before its handler runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No tool is registered under the requested name or endpoint.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A required parameter is absent (or null).
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// A parameter value has the wrong JSON type.
    #[error("Invalid type for parameter '{name}': expected {expected}, found {found}")]
    InvalidParameterType {
        name: String,
        expected: ParamType,
        found: &'static str,
    },

    /// The caller sent a parameter the tool does not declare.
    #[error("Unexpected parameter: {0}")]
    UnexpectedParameter(String),

    /// The request body is not a JSON object.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl DispatchError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "missing parameter" error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Create a new "invalid body" error.
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::MissingParameter(_) => "missing_parameter",
            Self::InvalidParameterType { .. } => "invalid_parameter_type",
            Self::UnexpectedParameter(_) => "unexpected_parameter",
            Self::InvalidBody(_) => "invalid_body",
        }
    }
}

/// Failure inside a tool handler.
///
/// The dispatcher turns these into `{"content": "Error: ..."}`, so the
/// display text is what the calling agent reads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// A collaborator the tool depends on is not reachable or not configured.
    #[error("{0}")]
    Unavailable(String),

    /// The tool ran but could not complete.
    #[error("{0}")]
    Failed(String),

    /// The handler did not finish within the configured timeout.
    #[error("The tool did not respond within {} seconds.", .0.as_secs())]
    Timeout(Duration),
}

impl HandlerError {
    /// Create a new "unavailable" error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a new "failed" error.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}
