//! Error types and handling for the tool server.
//!
//! This module defines a unified error type for process-level failures:
//! invalid configuration, a malformed tool registry and transport errors.
//! Per-request failures are modelled by the tools domain instead.

use thiserror::Error;

/// A specialized Result type for tool server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the tool server.
#[derive(Debug, Error)]
pub enum Error {
    /// The tool registry could not be assembled.
    #[error("Registry error: {0}")]
    Registry(#[from] crate::domains::tools::RegistryError),

    /// Error raised by the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
