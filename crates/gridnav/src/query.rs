//! One-call query facade: reachability, impact and projection for a focal node.
//!
//! A query is a pure function of the topology and the focal key. Each call
//! builds its own result, nothing is cached, and the topology is only read,
//! so any number of queries can run concurrently against one topology.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UnknownNode;
use crate::impact::{self, ImpactReport};
use crate::projection::{self, EdgePolicy, ProjectedGraph};
use crate::reach::{self, Direction};
use crate::topology::Topology;
use crate::types::NodeKey;

/// Options for [`query_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Which edges the projection keeps
    pub edge_policy: EdgePolicy,
}

/// Everything the navigator shows for one selected node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The selected node
    pub focal: NodeKey,
    /// Upstream nodes in discovery order
    pub ancestors: Vec<NodeKey>,
    /// Downstream nodes in discovery order
    pub descendants: Vec<NodeKey>,
    /// What loses power if the focal node is switched off
    pub impact: ImpactReport,
    /// Layered subgraph for rendering
    pub projected: ProjectedGraph,
}

/// Query `focal` with default options.
///
/// # Errors
///
/// Returns `UnknownNode` if `focal` is not in the topology.
pub fn query(topology: &Topology, focal: &str) -> Result<QueryResult, UnknownNode> {
    query_with(topology, focal, &QueryOptions::default())
}

/// Query `focal` with explicit options.
///
/// Each direction is walked once; the impact report and the projection are
/// derived from those same walks.
///
/// # Errors
///
/// Returns `UnknownNode` if `focal` is not in the topology.
pub fn query_with(
    topology: &Topology,
    focal: &str,
    options: &QueryOptions,
) -> Result<QueryResult, UnknownNode> {
    let start = topology.index_of(focal)?;

    let upstream = reach::walk(topology, start, Direction::Upstream);
    let downstream = reach::walk(topology, start, Direction::Downstream);

    let impact = impact::report_from_walk(topology, start, &downstream);

    let with_distance = |walk: &[(usize, usize)]| -> Vec<(usize, Option<usize>)> {
        walk.iter().map(|&(i, d)| (i, Some(d))).collect()
    };
    let projected = projection::project_indices(
        topology,
        start,
        &with_distance(&upstream),
        &with_distance(&downstream),
        options.edge_policy,
    );

    let keys = |walk: &[(usize, usize)]| -> Vec<NodeKey> {
        walk.iter()
            .map(|&(i, _)| topology.node_at(i).key.clone())
            .collect()
    };

    debug!(
        focal,
        upstream = upstream.len(),
        downstream = downstream.len(),
        edges = projected.edges.len(),
        "Query complete"
    );

    Ok(QueryResult {
        focal: topology.node_at(start).key.clone(),
        ancestors: keys(&upstream),
        descendants: keys(&downstream),
        impact,
        projected,
    })
}
