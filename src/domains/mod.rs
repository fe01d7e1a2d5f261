//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single domain, `tools`: the tool definitions,
//! their discovery manifest and the invocation path.

pub mod tools;
