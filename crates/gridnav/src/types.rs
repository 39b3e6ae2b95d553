//! Core domain types for the equipment hierarchy.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a piece of equipment (its tag, e.g. `"KV4501"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    /// Create a new node key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&NodeKey> for NodeKey {
    fn from(key: &NodeKey) -> Self {
        key.clone()
    }
}

impl Borrow<str> for NodeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A piece of equipment in the feed hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Equipment tag
    pub key: NodeKey,
    /// Human-readable name shown to operators
    pub label: String,
}

impl Node {
    /// Create a node from a key and a display label.
    pub fn new(key: impl Into<NodeKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A feed: power flows from `from` into `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Upstream (energizing) end
    pub from: NodeKey,
    /// Downstream (energized) end
    pub to: NodeKey,
}

impl Edge {
    /// Create an edge meaning "`from` energizes `to`".
    pub fn new(from: impl Into<NodeKey>, to: impl Into<NodeKey>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl<A: Into<NodeKey>, B: Into<NodeKey>> From<(A, B)> for Edge {
    fn from((from, to): (A, B)) -> Self {
        Self::new(from, to)
    }
}

/// Position of a node in the hierarchy, derived from its degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Feeds something, fed by nothing
    Source,
    /// Both fed and feeding
    Intermediate,
    /// Fed, feeds nothing (end load)
    Load,
    /// No feeds in either direction
    Isolated,
}

impl NodeRole {
    /// Classify a node from its in-degree and out-degree.
    #[must_use]
    pub fn from_degree(in_degree: usize, out_degree: usize) -> Self {
        match (in_degree, out_degree) {
            (0, 0) => Self::Isolated,
            (0, _) => Self::Source,
            (_, 0) => Self::Load,
            _ => Self::Intermediate,
        }
    }

    /// Returns `true` if nothing upstream can energize this node.
    #[must_use]
    pub fn has_no_upstream(self) -> bool {
        matches!(self, Self::Source | Self::Isolated)
    }

    /// Returns `true` if switching this node off affects nothing else.
    #[must_use]
    pub fn has_no_downstream(self) -> bool {
        matches!(self, Self::Load | Self::Isolated)
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Load => write!(f, "load"),
            Self::Isolated => write!(f, "isolated"),
        }
    }
}
