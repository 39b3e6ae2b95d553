//! Error types for gridnav operations.
//!
//! Errors fall into two groups:
//!
//! - **Integrity errors** (`TopologyError`): the equipment table is malformed.
//!   Construction is all-or-nothing, so any of these means no topology exists.
//! - **Usage errors** (`UnknownNode`, `Error::AmbiguousLabel`): a query named
//!   equipment the topology does not know. The topology stays valid and the
//!   caller can simply ask again.
//!
//! None of these are transient, so nothing in the crate retries.

use thiserror::Error;

use crate::types::NodeKey;

/// Result type for gridnav operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An equipment table violates one of the topology invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// Two nodes share the same key.
    #[error("duplicate node key: {key}")]
    DuplicateNodeKey {
        /// The repeated key
        key: NodeKey,
    },

    /// An edge references a key that is not in the node table.
    #[error("edge {from} -> {to} references unknown node {missing}")]
    DanglingEdge {
        /// Upstream end of the offending edge
        from: NodeKey,
        /// Downstream end of the offending edge
        to: NodeKey,
        /// Whichever endpoint is missing (`from` if both are)
        missing: NodeKey,
    },

    /// The feed edges form a directed cycle.
    #[error("feed cycle detected: {}", format_cycle(.cycle))]
    CycleDetected {
        /// Cycle members in feed order; the last member feeds the first
        cycle: Vec<NodeKey>,
    },
}

/// A query named a key that is not in the topology.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node: {key}")]
pub struct UnknownNode {
    /// The key that was looked up
    pub key: NodeKey,
}

impl UnknownNode {
    /// Create an unknown-node error for `key`.
    #[must_use]
    pub fn new(key: impl Into<NodeKey>) -> Self {
        Self { key: key.into() }
    }
}

/// Top-level error type for gridnav operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The equipment table failed validation
    #[error("invalid topology: {0}")]
    Topology(#[from] TopologyError),

    /// A query referenced equipment that does not exist
    #[error(transparent)]
    UnknownNode(#[from] UnknownNode),

    /// A display label matched more than one node
    #[error("label '{label}' matches several nodes: {}", join_keys(.candidates))]
    AmbiguousLabel {
        /// The label that was searched for
        label: String,
        /// Keys of every node carrying that label
        candidates: Vec<NodeKey>,
    },

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An equipment table file could not be decoded
    #[error("parse error: {0}")]
    Parse(String),

    /// Output could not be encoded as JSON
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

fn join_keys(keys: &[NodeKey]) -> String {
    keys.iter()
        .map(NodeKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a cycle as `a -> b -> c -> a`.
fn format_cycle(cycle: &[NodeKey]) -> String {
    let mut rendered = cycle
        .iter()
        .map(NodeKey::as_str)
        .collect::<Vec<_>>()
        .join(" -> ");
    if let Some(first) = cycle.first() {
        rendered.push_str(" -> ");
        rendered.push_str(first.as_str());
    }
    rendered
}
