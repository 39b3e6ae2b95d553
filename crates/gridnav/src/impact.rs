//! Switching impact: what loses power when a node is turned off.
//!
//! The affected set is exactly the downstream reachability set. Impact never
//! runs its own traversal, so the displayed downstream list and the displayed
//! impact cannot disagree. Ancestors are never part of an impact report:
//! switching a node off cannot de-energize what feeds it.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UnknownNode;
use crate::reach::{self, Direction};
use crate::topology::Topology;
use crate::types::{NodeKey, NodeRole};

/// Result of de-energizing one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactReport {
    /// The node being switched off
    pub node: NodeKey,
    /// Every node that loses supply, in discovery order
    pub affected: Vec<NodeKey>,
    /// The end loads among `affected`, in the same order
    pub loads: Vec<NodeKey>,
}

impl ImpactReport {
    /// Returns `true` if switching the node off affects nothing else.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.affected.is_empty()
    }

    /// Number of nodes that lose supply.
    #[must_use]
    pub fn affected_count(&self) -> usize {
        self.affected.len()
    }
}

/// Impact of switching off `key`.
///
/// # Errors
///
/// Returns `UnknownNode` if `key` is not in the topology.
pub fn deenergize_impact(topology: &Topology, key: &str) -> Result<ImpactReport, UnknownNode> {
    let start = topology.index_of(key)?;
    let downstream = reach::walk(topology, start, Direction::Downstream);
    Ok(report_from_walk(topology, start, &downstream))
}

/// Build a report from an already computed downstream walk.
///
/// Shared with the query facade so a query walks downstream only once.
pub(crate) fn report_from_walk(
    topology: &Topology,
    start: usize,
    downstream: &[(usize, usize)],
) -> ImpactReport {
    let mut affected = Vec::with_capacity(downstream.len());
    let mut loads = Vec::new();
    for &(i, _) in downstream {
        let key = topology.node_at(i).key.clone();
        if topology.role_at(i) == NodeRole::Load {
            loads.push(key.clone());
        }
        affected.push(key);
    }

    ImpactReport {
        node: topology.node_at(start).key.clone(),
        affected,
        loads,
    }
}

/// Impact size for one node, used to rank equipment by criticality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactSummary {
    /// The node being switched off
    pub node: NodeKey,
    /// Number of nodes that lose supply
    pub affected_count: usize,
    /// Number of end loads that lose supply
    pub load_count: usize,
}

/// Compute the impact of every node and rank them, most critical first.
///
/// Nodes are processed in parallel; the topology is only read. Ties keep
/// node-table order.
#[must_use]
pub fn rank_by_impact(topology: &Topology) -> Vec<ImpactSummary> {
    let mut ranked: Vec<(usize, ImpactSummary)> = (0..topology.len())
        .into_par_iter()
        .map(|i| {
            let downstream = reach::walk(topology, i, Direction::Downstream);
            let report = report_from_walk(topology, i, &downstream);
            (
                i,
                ImpactSummary {
                    node: report.node,
                    affected_count: report.affected.len(),
                    load_count: report.loads.len(),
                },
            )
        })
        .collect();

    ranked.sort_by(|(ia, a), (ib, b)| {
        b.affected_count
            .cmp(&a.affected_count)
            .then_with(|| ia.cmp(ib))
    });

    debug!(node_count = ranked.len(), "Impact ranking complete");

    ranked.into_iter().map(|(_, summary)| summary).collect()
}
