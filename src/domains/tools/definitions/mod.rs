//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod hello_world;
pub mod news;
pub mod validate;
pub mod verify_news;

pub use hello_world::HelloWorldTool;
pub use news::{NewsApiClient, NewsError, NewsItem, NewsSource, NewsTool};
pub use validate::ValidateTool;
pub use verify_news::VerifyNewsTool;
