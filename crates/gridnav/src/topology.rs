//! The topology store: a validated, immutable feed hierarchy.
//!
//! A `Topology` is only obtainable through [`Topology::build`], which checks
//! key uniqueness, referential integrity and acyclicity before anything can
//! be queried. After that it is a frozen value: there are no mutating
//! methods, so a single instance can be shared across threads without locks.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::cycle::find_cycle;
use crate::error::{Error, Result, TopologyError, UnknownNode};
use crate::types::{Edge, Node, NodeKey, NodeRole};

/// A validated equipment hierarchy.
///
/// Nodes keep the order of the input table and edges keep the order of the
/// input edge list; every accessor that returns a sequence follows those
/// orders, which is what makes query results reproducible.
#[derive(Debug, Clone)]
pub struct Topology {
    nodes: Vec<Node>,
    index: HashMap<NodeKey, usize>,
    /// Deduplicated edges as (from, to) node indices, in input order.
    edges: Vec<(usize, usize)>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

/// Build a topology from a node table and an edge list.
///
/// Free-function form of [`Topology::build`].
///
/// # Errors
///
/// See [`Topology::build`].
pub fn build<N, E>(nodes: N, edges: E) -> std::result::Result<Topology, TopologyError>
where
    N: IntoIterator<Item = Node>,
    E: IntoIterator<Item = Edge>,
{
    Topology::build(nodes, edges)
}

impl Topology {
    /// Validate the inputs and freeze them into a topology.
    ///
    /// Checks run in this order and the first violation is returned:
    /// 1. every node key is unique
    /// 2. every edge endpoint names a node
    /// 3. the edges contain no directed cycle
    ///
    /// An edge listed more than once is kept once.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateNodeKey`, `DanglingEdge` or `CycleDetected`.
    pub fn build<N, E>(nodes: N, edges: E) -> std::result::Result<Self, TopologyError>
    where
        N: IntoIterator<Item = Node>,
        E: IntoIterator<Item = Edge>,
    {
        let nodes: Vec<Node> = nodes.into_iter().collect();

        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.key.clone(), i).is_some() {
                return Err(TopologyError::DuplicateNodeKey {
                    key: node.key.clone(),
                });
            }
        }

        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut resolved = Vec::new();
        for edge in edges {
            let from = index.get(&edge.from).copied();
            let to = index.get(&edge.to).copied();
            let (Some(from), Some(to)) = (from, to) else {
                let missing = if from.is_none() {
                    edge.from.clone()
                } else {
                    edge.to.clone()
                };
                return Err(TopologyError::DanglingEdge {
                    from: edge.from,
                    to: edge.to,
                    missing,
                });
            };

            if seen.insert((from, to)) {
                resolved.push((from, to));
            } else {
                warn!(from = %edge.from, to = %edge.to, "Ignoring duplicate feed edge");
            }
        }

        let mut outgoing = vec![Vec::new(); nodes.len()];
        let mut incoming = vec![Vec::new(); nodes.len()];
        for &(from, to) in &resolved {
            outgoing[from].push(to);
            incoming[to].push(from);
        }

        if let Some(cycle) = find_cycle(&outgoing) {
            let cycle: Vec<NodeKey> = cycle.into_iter().map(|i| nodes[i].key.clone()).collect();
            debug!(cycle_length = cycle.len(), "Feed cycle found during build");
            return Err(TopologyError::CycleDetected { cycle });
        }

        info!(
            node_count = nodes.len(),
            edge_count = resolved.len(),
            "Topology built"
        );

        Ok(Self {
            nodes,
            index,
            edges: resolved,
            outgoing,
            incoming,
        })
    }

    // === Lookup ===

    /// Get a node by key.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNode` if no node has this key.
    pub fn node(&self, key: &str) -> std::result::Result<&Node, UnknownNode> {
        self.index_of(key).map(|i| &self.nodes[i])
    }

    /// Returns `true` if a node with this key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All node keys in table order.
    pub fn all_node_keys(&self) -> impl ExactSizeIterator<Item = &NodeKey> + '_ {
        self.nodes.iter().map(|n| &n.key)
    }

    /// All nodes in table order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the topology has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct feed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All feed edges as `(from, to)` in input order, duplicates removed.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (&NodeKey, &NodeKey)> + '_ {
        self.edges
            .iter()
            .map(|&(from, to)| (&self.nodes[from].key, &self.nodes[to].key))
    }

    /// Keys of the nodes `key` feeds directly.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNode` if no node has this key.
    pub fn out_edges(
        &self,
        key: &str,
    ) -> std::result::Result<impl ExactSizeIterator<Item = &NodeKey> + '_, UnknownNode> {
        let i = self.index_of(key)?;
        Ok(self.outgoing[i].iter().map(|&j| &self.nodes[j].key))
    }

    /// Keys of the nodes that feed `key` directly.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNode` if no node has this key.
    pub fn in_edges(
        &self,
        key: &str,
    ) -> std::result::Result<impl ExactSizeIterator<Item = &NodeKey> + '_, UnknownNode> {
        let i = self.index_of(key)?;
        Ok(self.incoming[i].iter().map(|&j| &self.nodes[j].key))
    }

    /// Classify a node by whether it is fed and whether it feeds.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNode` if no node has this key.
    pub fn role(&self, key: &str) -> std::result::Result<NodeRole, UnknownNode> {
        self.index_of(key).map(|i| self.role_at(i))
    }

    /// Find a node by key, falling back to an exact display-label match.
    ///
    /// Operators usually pick equipment by its label, so the CLI accepts
    /// either form.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownNode` if neither a key nor a label matches, and
    /// `Error::AmbiguousLabel` if the label belongs to more than one node.
    pub fn resolve(&self, query: &str) -> Result<&Node> {
        if let Some(&i) = self.index.get(query) {
            return Ok(&self.nodes[i]);
        }

        let mut matches = self.nodes.iter().filter(|n| n.label == query);
        match (matches.next(), matches.next()) {
            (Some(node), None) => Ok(node),
            (None, _) => Err(UnknownNode::new(query).into()),
            (Some(first), Some(second)) => {
                let mut candidates = vec![first.key.clone(), second.key.clone()];
                candidates.extend(matches.map(|n| n.key.clone()));
                Err(Error::AmbiguousLabel {
                    label: query.to_string(),
                    candidates,
                })
            }
        }
    }

    // === Index-level access for the query engine ===

    pub(crate) fn index_of(&self, key: &str) -> std::result::Result<usize, UnknownNode> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| UnknownNode::new(key))
    }

    pub(crate) fn node_at(&self, i: usize) -> &Node {
        &self.nodes[i]
    }

    pub(crate) fn successors(&self, i: usize) -> &[usize] {
        &self.outgoing[i]
    }

    pub(crate) fn predecessors(&self, i: usize) -> &[usize] {
        &self.incoming[i]
    }

    pub(crate) fn edge_indices(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub(crate) fn role_at(&self, i: usize) -> NodeRole {
        NodeRole::from_degree(self.incoming[i].len(), self.outgoing[i].len())
    }
}
