//! # Gridnav: Electrical Network Navigator
//!
//! Gridnav answers two questions about a power-distribution hierarchy
//! (sources → feeders → panels → loads) for any selected piece of equipment:
//!
//! - **What feeds it?** Every upstream node that can energize it.
//! - **What does it feed?** Every downstream node that goes dark if it is
//!   switched off.
//!
//! It also projects the answer into a three-layer subgraph (upstream, focal,
//! downstream) with a deterministic in-layer order, ready for any
//! layered-graph renderer.
//!
//! ## Design Philosophy
//!
//! - **Validate once** - a `Topology` only exists if keys are unique, edges
//!   resolve and there is no feed cycle
//! - **Frozen data** - nothing mutates a topology, so it is shared across
//!   threads without locks
//! - **Pure queries** - every query is a function of (topology, node key);
//!   nothing is cached between calls
//! - **Topology, not physics** - no load flow, no fault currents
//!
//! ## Quick Start
//!
//! ```
//! use gridnav::{query, Edge, Layer, Node, Topology};
//!
//! let topology = Topology::build(
//!     [
//!         Node::new("S", "Source"),
//!         Node::new("F", "Feeder"),
//!         Node::new("P", "Panel"),
//!         Node::new("L", "Load"),
//!     ],
//!     [Edge::new("S", "F"), Edge::new("F", "P"), Edge::new("P", "L")],
//! )?;
//!
//! let result = query(&topology, "P")?;
//! assert_eq!(result.ancestors.len(), 2);
//! assert_eq!(result.impact.affected, result.descendants);
//! assert_eq!(result.projected.node("L").unwrap().layer, Layer::Downstream);
//! # Ok::<(), gridnav::Error>(())
//! ```

mod cycle;
mod error;
mod types;

pub mod config;
pub mod impact;
pub mod projection;
pub mod query;
pub mod reach;
pub mod sample;
pub mod table;
pub mod topology;

pub use error::{Error, Result, TopologyError, UnknownNode};
pub use impact::{deenergize_impact, rank_by_impact, ImpactReport, ImpactSummary};
pub use projection::{project, project_with, EdgePolicy, Layer, ProjectedGraph, ProjectedNode};
pub use query::{query, query_with, QueryOptions, QueryResult};
pub use reach::{ancestors, descendants, traverse, Direction, Reached};
pub use table::{EquipmentTable, NodeSpec, TableFormat};
pub use topology::{build, Topology};
pub use types::{Edge, Node, NodeKey, NodeRole};
