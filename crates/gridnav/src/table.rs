//! Equipment tables: the caller-supplied node table and edge list.
//!
//! The engine itself only consumes in-memory data. This module is the
//! boundary where that data comes from a JSON or YAML file:
//!
//! ```yaml
//! nodes:
//!   - key: TOB6
//!     label: TOB No. 6
//!   - key: KAV1001          # label defaults to the key
//! edges:
//!   - [TOB6, KAV1001]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result, TopologyError};
use crate::topology::Topology;
use crate::types::{Edge, Node, NodeKey};

/// A node row as written in a table file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Equipment tag
    pub key: NodeKey,
    /// Display label; the key is shown when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl From<NodeSpec> for Node {
    fn from(spec: NodeSpec) -> Self {
        let label = spec.label.unwrap_or_else(|| spec.key.to_string());
        Node::new(spec.key, label)
    }
}

/// Serialized form of an equipment hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentTable {
    /// Node table, in display order
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    /// Feed edges as `[from, to]` pairs
    #[serde(default)]
    pub edges: Vec<(NodeKey, NodeKey)>,
}

/// File formats an equipment table can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl TableFormat {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Self::Yaml)
            }
            _ => Err(Error::Config(format!(
                "cannot tell the format of '{}': expected a .json, .yaml or .yml file",
                path.display()
            ))),
        }
    }
}

impl EquipmentTable {
    /// Create a table from node and edge rows.
    #[must_use]
    pub fn new(nodes: Vec<NodeSpec>, edges: Vec<(NodeKey, NodeKey)>) -> Self {
        Self { nodes, edges }
    }

    /// Read a table file, choosing the parser from its extension.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for an unknown extension, `Error::Io` if the
    /// file cannot be read and `Error::Parse` if it cannot be decoded.
    pub fn load(path: &Path) -> Result<Self> {
        let format = TableFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("cannot read equipment table {}: {e}", path.display()),
            ))
        })?;

        let table = Self::parse(&content, format)?;
        debug!(
            path = %path.display(),
            nodes = table.nodes.len(),
            edges = table.edges.len(),
            "Equipment table loaded"
        );
        Ok(table)
    }

    /// Decode a table from a string in the given format.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if the content is not a valid table.
    pub fn parse(content: &str, format: TableFormat) -> Result<Self> {
        match format {
            TableFormat::Json => serde_json::from_str(content)
                .map_err(|e| Error::Parse(format!("invalid JSON equipment table: {e}"))),
            TableFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| Error::Parse(format!("invalid YAML equipment table: {e}"))),
        }
    }

    /// Validate the table and build a topology from it.
    ///
    /// # Errors
    ///
    /// Returns the first `TopologyError` found.
    pub fn build(&self) -> std::result::Result<Topology, TopologyError> {
        self.clone().into_topology()
    }

    /// Consuming form of [`EquipmentTable::build`].
    ///
    /// # Errors
    ///
    /// Returns the first `TopologyError` found.
    pub fn into_topology(self) -> std::result::Result<Topology, TopologyError> {
        Topology::build(
            self.nodes.into_iter().map(Node::from),
            self.edges.into_iter().map(Edge::from),
        )
    }
}
