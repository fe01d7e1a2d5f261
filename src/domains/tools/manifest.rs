//! Discovery manifest.
//!
//! The manifest is what a calling agent reads to learn which tools exist,
//! when to use them, where to send calls and which parameters to supply:
//!
//! ```json
//! { "name": "...", "description": "...",
//!   "tools": { "<tool>": { "description": "...", "use_when": "...",
//!              "endpoint": "/...", "parameters": { "<param>": {
//!                "type": "string", "description": "...", "required": true } } } } }
//! ```
//!
//! It is derived from the registry on every request and never stored.

use std::sync::Arc;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::registry::{Tool, ToolRegistry};
use super::schema::{ParameterEntry, ParameterSpec};

/// Builds manifests from a shared, read-only registry.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    name: String,
    description: String,
    registry: Arc<ToolRegistry>,
}

impl ManifestBuilder {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        registry: Arc<ToolRegistry>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            registry,
        }
    }

    /// Snapshot the registry into a manifest.
    pub fn build(&self) -> Manifest<'_> {
        Manifest {
            name: &self.name,
            description: &self.description,
            tools: ToolEntries(self.registry.list()),
        }
    }
}

/// The discovery document.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub tools: ToolEntries<'a>,
}

impl Manifest<'_> {
    /// Number of tool entries.
    pub fn len(&self) -> usize {
        self.tools.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.0.is_empty()
    }
}

/// Tools keyed by name, serialized in registration order.
#[derive(Debug)]
pub struct ToolEntries<'a>(&'a [Tool]);

impl Serialize for ToolEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for tool in self.0 {
            map.serialize_entry(tool.name(), &ToolEntry::from(tool))?;
        }
        map.end()
    }
}

/// Manifest shape of one tool.
#[derive(Debug, Serialize)]
struct ToolEntry<'a> {
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    use_when: Option<&'a str>,
    endpoint: &'a str,
    parameters: ParameterEntries<'a>,
}

impl<'a> From<&'a Tool> for ToolEntry<'a> {
    fn from(tool: &'a Tool) -> Self {
        Self {
            description: tool.description(),
            use_when: tool.use_when(),
            endpoint: tool.endpoint(),
            parameters: ParameterEntries(tool.parameters()),
        }
    }
}

/// Parameters keyed by name, in declaration order. Always serialized, as
/// `{}` when the tool takes none.
#[derive(Debug)]
struct ParameterEntries<'a>(&'a [ParameterSpec]);

impl Serialize for ParameterEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for spec in self.0 {
            map.serialize_entry(&spec.name, &ParameterEntry::from(spec))?;
        }
        map.end()
    }
}
