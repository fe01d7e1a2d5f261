//! Transport layer for the tool server.
//!
//! The server speaks plain HTTP with JSON bodies: `GET|POST /mcp` serves the
//! manifest and every tool is reachable with `POST <endpoint>`. The
//! transport only decodes requests and encodes responses; validation and
//! dispatch live in the tools domain.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, router};
