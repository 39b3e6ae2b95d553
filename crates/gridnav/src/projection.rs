//! Subgraph projection and layered layout.
//!
//! Turns a focal node and its upstream/downstream sets into the structure a
//! layered-graph renderer needs: every relevant node with a (layer, rank)
//! position, and the edges to draw between them. This is the only place that
//! decides which edges are drawn.
//!
//! ## Layers
//!
//! ```text
//! layer 0  upstream    ancestors, ranked in discovery order
//! layer 1  focal       the selected node, rank 0
//! layer 2  downstream  descendants, ranked in discovery order
//! ```
//!
//! A node listed as both ancestor and descendant (only possible with
//! malformed input) goes to the upstream layer.

use serde::{Deserialize, Serialize};

use crate::error::UnknownNode;
use crate::topology::Topology;
use crate::types::{Edge, NodeKey};

/// Vertical tier of a projected node.
///
/// Serialized as its numeric index (0 = top) for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Layer {
    /// Ancestors of the focal node (top)
    Upstream,
    /// The focal node itself (middle)
    Focal,
    /// Descendants of the focal node (bottom)
    Downstream,
}

impl Layer {
    /// Numeric tier, 0 at the top.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Upstream => 0,
            Self::Focal => 1,
            Self::Downstream => 2,
        }
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer.index()
    }
}

impl TryFrom<u8> for Layer {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Upstream),
            1 => Ok(Self::Focal),
            2 => Ok(Self::Downstream),
            other => Err(format!("invalid layer index {other} (expected 0, 1 or 2)")),
        }
    }
}

/// Which topology edges a projection keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgePolicy {
    /// Edges leaving an ancestor or the focal node and landing anywhere in
    /// the projection. Feeds between two descendants are not drawn.
    #[default]
    FeedPath,
    /// Every edge whose endpoints are both in the projection.
    Induced,
}

/// A node placed in the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedNode {
    /// Equipment tag
    pub key: NodeKey,
    /// Display label
    pub label: String,
    /// Vertical tier
    pub layer: Layer,
    /// Position within the tier, starting at 0
    pub rank: usize,
    /// Hops from the focal node, when the caller supplied walk distances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
}

/// Renderable subgraph for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedGraph {
    /// The focal node
    pub focal: NodeKey,
    /// Nodes ordered by (layer, rank)
    pub nodes: Vec<ProjectedNode>,
    /// Edges to draw, in topology edge order
    pub edges: Vec<Edge>,
}

impl ProjectedGraph {
    /// Nodes in `layer`, in rank order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &ProjectedNode> + '_ {
        self.nodes.iter().filter(move |n| n.layer == layer)
    }

    /// Find a projected node by key.
    #[must_use]
    pub fn node(&self, key: &str) -> Option<&ProjectedNode> {
        self.nodes.iter().find(|n| n.key.as_str() == key)
    }

    /// Returns `true` if `(from, to)` is drawn.
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.from.as_str() == from && e.to.as_str() == to)
    }
}

/// Project with the default [`EdgePolicy::FeedPath`].
///
/// # Errors
///
/// Returns `UnknownNode` if `focal` or any listed key is not in the topology.
pub fn project(
    topology: &Topology,
    focal: &str,
    ancestors: &[NodeKey],
    descendants: &[NodeKey],
) -> Result<ProjectedGraph, UnknownNode> {
    project_with(topology, focal, ancestors, descendants, EdgePolicy::default())
}

/// Project with an explicit edge policy.
///
/// # Errors
///
/// Returns `UnknownNode` if `focal` or any listed key is not in the topology.
pub fn project_with(
    topology: &Topology,
    focal: &str,
    ancestors: &[NodeKey],
    descendants: &[NodeKey],
    policy: EdgePolicy,
) -> Result<ProjectedGraph, UnknownNode> {
    let focal = topology.index_of(focal)?;
    let upstream = to_indices(topology, ancestors)?;
    let downstream = to_indices(topology, descendants)?;
    Ok(project_indices(topology, focal, &upstream, &downstream, policy))
}

fn to_indices(
    topology: &Topology,
    keys: &[NodeKey],
) -> Result<Vec<(usize, Option<usize>)>, UnknownNode> {
    keys.iter()
        .map(|k| topology.index_of(k.as_str()).map(|i| (i, None)))
        .collect()
}

/// Core projection over node indices.
///
/// `upstream` and `downstream` carry an optional walk distance per node; the
/// query facade passes the distances it already has.
pub(crate) fn project_indices(
    topology: &Topology,
    focal: usize,
    upstream: &[(usize, Option<usize>)],
    downstream: &[(usize, Option<usize>)],
    policy: EdgePolicy,
) -> ProjectedGraph {
    let mut layer_of: Vec<Option<Layer>> = vec![None; topology.len()];
    layer_of[focal] = Some(Layer::Focal);

    let mut nodes = Vec::with_capacity(upstream.len() + downstream.len() + 1);
    place(topology, &mut layer_of, &mut nodes, upstream, Layer::Upstream);

    let focal_node = topology.node_at(focal);
    nodes.push(ProjectedNode {
        key: focal_node.key.clone(),
        label: focal_node.label.clone(),
        layer: Layer::Focal,
        rank: 0,
        distance: Some(0),
    });

    place(topology, &mut layer_of, &mut nodes, downstream, Layer::Downstream);

    let edges = topology
        .edge_indices()
        .iter()
        .filter(|&&(from, to)| keeps_edge(policy, layer_of[from], layer_of[to]))
        .map(|&(from, to)| {
            Edge::new(&topology.node_at(from).key, &topology.node_at(to).key)
        })
        .collect();

    ProjectedGraph {
        focal: focal_node.key.clone(),
        nodes,
        edges,
    }
}

/// Assign `layer` to every not-yet-placed node of `members`, ranking them in
/// input order.
fn place(
    topology: &Topology,
    layer_of: &mut [Option<Layer>],
    nodes: &mut Vec<ProjectedNode>,
    members: &[(usize, Option<usize>)],
    layer: Layer,
) {
    let mut rank = 0;
    for &(i, distance) in members {
        if layer_of[i].is_some() {
            continue;
        }
        layer_of[i] = Some(layer);

        let node = topology.node_at(i);
        nodes.push(ProjectedNode {
            key: node.key.clone(),
            label: node.label.clone(),
            layer,
            rank,
            distance,
        });
        rank += 1;
    }
}

fn keeps_edge(policy: EdgePolicy, from: Option<Layer>, to: Option<Layer>) -> bool {
    match policy {
        EdgePolicy::FeedPath => {
            matches!(from, Some(Layer::Upstream | Layer::Focal)) && to.is_some()
        }
        EdgePolicy::Induced => from.is_some() && to.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reach::{ancestors, descendants};
    use crate::types::Node;
    use rstest::rstest;

    fn keys(list: &[&str]) -> Vec<NodeKey> {
        list.iter().map(|&k| NodeKey::from(k)).collect()
    }

    /// `S -> F -> P -> L`, plus `Q` feeding `P` and an unrelated `Z -> F`.
    fn feeder() -> Topology {
        Topology::build(
            ["S", "Z", "Q", "F", "P", "L"].map(|k| Node::new(k, format!("{k} label"))),
            [("S", "F"), ("Z", "F"), ("F", "P"), ("Q", "P"), ("P", "L")].map(Edge::from),
        )
        .unwrap()
    }

    #[test]
    fn layers_and_ranks_follow_input_order() {
        let topo = feeder();
        let graph = project(&topo, "P", &keys(&["F", "Q", "S", "Z"]), &keys(&["L"])).unwrap();

        let placed: Vec<(&str, u8, usize)> = graph
            .nodes
            .iter()
            .map(|n| (n.key.as_str(), n.layer.index(), n.rank))
            .collect();
        assert_eq!(
            placed,
            [
                ("F", 0, 0),
                ("Q", 0, 1),
                ("S", 0, 2),
                ("Z", 0, 3),
                ("P", 1, 0),
                ("L", 2, 0),
            ]
        );
        assert_eq!(graph.node("Q").unwrap().label, "Q label");
    }

    #[test]
    fn ancestor_membership_wins_on_overlap() {
        let topo = feeder();
        let graph = project(&topo, "P", &keys(&["F", "L"]), &keys(&["L"])).unwrap();

        assert_eq!(graph.node("L").unwrap().layer, Layer::Upstream);
        assert_eq!(graph.layer(Layer::Downstream).count(), 0);
    }

    #[test]
    fn focal_in_input_sets_is_ignored() {
        let topo = feeder();
        let graph = project(&topo, "P", &keys(&["P", "F"]), &keys(&["P", "L"])).unwrap();

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.node("P").unwrap().layer, Layer::Focal);
        assert_eq!(graph.node("F").unwrap().rank, 0);
    }

    #[test]
    fn unknown_key_in_sets_is_an_error() {
        let topo = feeder();
        assert!(project(&topo, "P", &keys(&["nope"]), &[]).is_err());
        assert!(project(&topo, "nope", &[], &[]).is_err());
    }

    #[rstest]
    #[case(EdgePolicy::FeedPath, false)]
    #[case(EdgePolicy::Induced, true)]
    fn descendant_to_descendant_edges_depend_on_policy(
        #[case] policy: EdgePolicy,
        #[case] drawn: bool,
    ) {
        let topo = feeder();
        let down = descendants(&topo, "F").unwrap();
        let up = ancestors(&topo, "F").unwrap();
        let graph = project_with(&topo, "F", &up, &down, policy).unwrap();

        assert!(graph.has_edge("S", "F"));
        assert!(graph.has_edge("F", "P"));
        assert_eq!(graph.has_edge("P", "L"), drawn);
        // Q is a sibling feeding P, not part of F's slice
        assert!(graph.node("Q").is_none());
        assert!(!graph.has_edge("Q", "P"));
    }

    #[test]
    fn edges_between_ancestors_are_kept() {
        // Two ancestors connected to each other but both upstream of X
        let topo = Topology::build(
            ["A", "B", "X"].map(|k| Node::new(k, k)),
            [("A", "B"), ("A", "X"), ("B", "X")].map(Edge::from),
        )
        .unwrap();
        let up = ancestors(&topo, "X").unwrap();
        let graph = project(&topo, "X", &up, &[]).unwrap();

        assert!(graph.has_edge("A", "B"));
        assert_eq!(graph.edges.len(), 3);
    }

    #[test]
    fn layer_serializes_as_index() {
        let json = serde_json::to_string(&Layer::Downstream).unwrap();
        assert_eq!(json, "2");
        let back: Layer = serde_json::from_str("0").unwrap();
        assert_eq!(back, Layer::Upstream);
        assert!(serde_json::from_str::<Layer>("7").is_err());
    }
}
