//! News Verifier Tool Server Library
//!
//! This crate provides an HTTP tool server: a set of self-describing tools
//! published through a discovery manifest, so that an assistant can learn
//! which operations exist and invoke them.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the server and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: tool definitions, the registry, the manifest builder and
//!     the invocation dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use news_verifier_mcp_server::core::{Config, HttpTransport, ToolServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = ToolServer::new(config.clone())?;
//!     HttpTransport::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ToolServer};
