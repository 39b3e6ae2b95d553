//! Upstream and downstream reachability.
//!
//! Both directions share one breadth-first walk over the topology's
//! adjacency lists. A visited set stops re-expansion, so every node is
//! emitted at most once and the walk terminates even on cyclic data.
//!
//! Edge direction is the direction power flows:
//! - **Upstream** follows incoming edges (what can energize this node)
//! - **Downstream** follows outgoing edges (what this node energizes)

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UnknownNode;
use crate::topology::Topology;
use crate::types::NodeKey;

/// Direction of a reachability walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards the sources (ancestors)
    Upstream,
    /// Towards the loads (descendants)
    Downstream,
}

/// A node found by a walk, with its hop distance from the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reached {
    /// The reached node
    pub key: NodeKey,
    /// Number of feed edges on the shortest path from the start (at least 1)
    pub distance: usize,
}

/// Walk the topology from `key` in `direction`.
///
/// Returns every reachable node except `key` itself, in discovery order
/// (nearest first, ties broken by edge order).
///
/// # Errors
///
/// Returns `UnknownNode` if `key` is not in the topology.
pub fn traverse(
    topology: &Topology,
    key: &str,
    direction: Direction,
) -> Result<Vec<Reached>, UnknownNode> {
    let start = topology.index_of(key)?;
    let reached = walk(topology, start, direction)
        .into_iter()
        .map(|(i, distance)| Reached {
            key: topology.node_at(i).key.clone(),
            distance,
        })
        .collect::<Vec<_>>();

    debug!(
        node = key,
        direction = ?direction,
        reached = reached.len(),
        "Reachability walk complete"
    );

    Ok(reached)
}

/// Everything that can energize `key`.
///
/// # Errors
///
/// Returns `UnknownNode` if `key` is not in the topology.
pub fn ancestors(topology: &Topology, key: &str) -> Result<Vec<NodeKey>, UnknownNode> {
    Ok(keys_only(traverse(topology, key, Direction::Upstream)?))
}

/// Everything `key` energizes, directly or through other equipment.
///
/// # Errors
///
/// Returns `UnknownNode` if `key` is not in the topology.
pub fn descendants(topology: &Topology, key: &str) -> Result<Vec<NodeKey>, UnknownNode> {
    Ok(keys_only(traverse(topology, key, Direction::Downstream)?))
}

fn keys_only(reached: Vec<Reached>) -> Vec<NodeKey> {
    reached.into_iter().map(|r| r.key).collect()
}

/// Breadth-first walk over node indices.
///
/// Returns `(index, distance)` pairs in discovery order, excluding `start`.
pub(crate) fn walk(topology: &Topology, start: usize, direction: Direction) -> Vec<(usize, usize)> {
    let mut visited = vec![false; topology.len()];
    visited[start] = true;

    let mut result = Vec::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        let neighbors = match direction {
            Direction::Upstream => topology.predecessors(current),
            Direction::Downstream => topology.successors(current),
        };

        for &next in neighbors {
            if !visited[next] {
                visited[next] = true;
                result.push((next, depth + 1));
                queue.push_back((next, depth + 1));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, Node};

    /// ```text
    ///   T1    T2
    ///    \   /
    ///     SB
    ///    /  \
    ///   X1   X2
    ///   |     |
    ///   L1   L2
    /// ```
    fn diamond_top() -> Topology {
        Topology::build(
            ["T1", "T2", "SB", "X1", "X2", "L1", "L2"].map(|k| Node::new(k, k)),
            [
                ("T1", "SB"),
                ("T2", "SB"),
                ("SB", "X1"),
                ("SB", "X2"),
                ("X1", "L1"),
                ("X2", "L2"),
            ]
            .map(Edge::from),
        )
        .unwrap()
    }

    fn strs(keys: &[NodeKey]) -> Vec<&str> {
        keys.iter().map(NodeKey::as_str).collect()
    }

    #[test]
    fn ancestors_in_discovery_order() {
        let topo = diamond_top();
        assert_eq!(strs(&ancestors(&topo, "L1").unwrap()), ["X1", "SB", "T1", "T2"]);
    }

    #[test]
    fn descendants_in_discovery_order() {
        let topo = diamond_top();
        assert_eq!(strs(&descendants(&topo, "SB").unwrap()), ["X1", "X2", "L1", "L2"]);
    }

    #[test]
    fn traverse_reports_distances() {
        let topo = diamond_top();
        let reached = traverse(&topo, "T1", Direction::Downstream).unwrap();
        let distances: Vec<(&str, usize)> = reached
            .iter()
            .map(|r| (r.key.as_str(), r.distance))
            .collect();
        assert_eq!(distances, [("SB", 1), ("X1", 2), ("X2", 2), ("L1", 3), ("L2", 3)]);
    }

    #[test]
    fn isolated_node_reaches_nothing() {
        let topo = Topology::build([Node::new("I", "Isolated")], Vec::<Edge>::new()).unwrap();
        assert!(ancestors(&topo, "I").unwrap().is_empty());
        assert!(descendants(&topo, "I").unwrap().is_empty());
    }

    #[test]
    fn unknown_start_is_an_error() {
        let topo = diamond_top();
        assert_eq!(
            descendants(&topo, "ZZ").unwrap_err(),
            UnknownNode::new("ZZ")
        );
        assert!(ancestors(&topo, "ZZ").is_err());
    }

    #[test]
    fn shared_descendant_is_reported_once() {
        // Two paths from A reach D
        let topo = Topology::build(
            ["A", "B", "C", "D"].map(|k| Node::new(k, k)),
            [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")].map(Edge::from),
        )
        .unwrap();

        assert_eq!(strs(&descendants(&topo, "A").unwrap()), ["B", "C", "D"]);
    }
}
