//! Tools domain module.
//!
//! This module handles everything about the tools the server exposes: how
//! they describe themselves, how they are discovered and how calls reach
//! them.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `schema.rs` - Parameter declarations and argument validation
//! - `registry.rs` - Tool definition and the append-only registry
//! - `manifest.rs` - Discovery document built from the registry
//! - `dispatcher.rs` - Validation, handler execution and the content envelope
//! - `handlers.rs` - The handler trait tools implement
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolHandler` and a `to_tool()` constructor
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `registry.rs` (`builtin_registry`)
//!
//! The HTTP transport routes by endpoint, so no route has to be added.

pub mod definitions;
mod dispatcher;
mod error;
mod handlers;
mod manifest;
mod registry;
mod schema;

pub use dispatcher::{Dispatcher, InvocationResponse};
pub use error::{DispatchError, HandlerError, RegistryError};
pub use handlers::{FnHandler, HandlerResult, ToolHandler, ToolParams};
pub use manifest::{Manifest, ManifestBuilder};
pub use registry::{RESERVED_ENDPOINTS, Tool, ToolRegistry, builtin_registry, default_registry};
pub use schema::{ParamType, ParameterSpec, validate_arguments};
