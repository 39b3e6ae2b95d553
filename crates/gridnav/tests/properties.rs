//! Property tests over randomly generated feed hierarchies.
//!
//! Networks are random DAGs: an edge always runs from a lower to a higher
//! node number, so every generated table is acyclic.

use std::collections::HashSet;

use gridnav::{
    Edge, EdgePolicy, Layer, Node, NodeKey, QueryOptions, Topology, ancestors, deenergize_impact,
    descendants, query, query_with,
};
use proptest::prelude::*;

fn key(i: usize) -> String {
    format!("N{i}")
}

fn arb_topology() -> impl Strategy<Value = Topology> {
    (1usize..24)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..n * 3)))
        .prop_map(|(n, pairs)| {
            let nodes: Vec<Node> = (0..n).map(|i| Node::new(key(i), key(i))).collect();
            let edges: Vec<Edge> = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| Edge::new(key(a.min(b)), key(a.max(b))))
                .collect();
            Topology::build(nodes, edges).expect("lower-to-higher edges are acyclic")
        })
}

fn as_set(keys: &[NodeKey]) -> HashSet<&str> {
    keys.iter().map(NodeKey::as_str).collect()
}

proptest! {
    #[test]
    fn a_node_never_reaches_itself(topo in arb_topology()) {
        for k in topo.all_node_keys() {
            let up = ancestors(&topo, k.as_str()).unwrap();
            let down = descendants(&topo, k.as_str()).unwrap();
            prop_assert!(!up.contains(k));
            prop_assert!(!down.contains(k));
            prop_assert!(as_set(&up).is_disjoint(&as_set(&down)));
        }
    }

    #[test]
    fn every_edge_is_reflected_in_both_directions(topo in arb_topology()) {
        for (from, to) in topo.edges() {
            prop_assert!(ancestors(&topo, to.as_str()).unwrap().contains(from));
            prop_assert!(descendants(&topo, from.as_str()).unwrap().contains(to));
        }
    }

    #[test]
    fn ancestry_and_descent_are_inverse(topo in arb_topology()) {
        for u in topo.all_node_keys() {
            let down = descendants(&topo, u.as_str()).unwrap();
            for v in topo.all_node_keys() {
                let up = ancestors(&topo, v.as_str()).unwrap();
                prop_assert_eq!(down.contains(v), up.contains(u));
            }
        }
    }

    #[test]
    fn impact_equals_descendants(topo in arb_topology()) {
        for k in topo.all_node_keys() {
            let impact = deenergize_impact(&topo, k.as_str()).unwrap();
            prop_assert_eq!(impact.affected, descendants(&topo, k.as_str()).unwrap());
        }
    }

    #[test]
    fn projection_is_well_formed(topo in arb_topology(), induced in any::<bool>()) {
        let options = QueryOptions {
            edge_policy: if induced { EdgePolicy::Induced } else { EdgePolicy::FeedPath },
        };

        for k in topo.all_node_keys() {
            let result = query_with(&topo, k.as_str(), &options).unwrap();
            let graph = &result.projected;

            let expected_len = result.ancestors.len() + result.descendants.len() + 1;
            prop_assert_eq!(graph.nodes.len(), expected_len);
            prop_assert_eq!(graph.layer(Layer::Focal).count(), 1);

            for layer in [Layer::Upstream, Layer::Focal, Layer::Downstream] {
                let ranks: Vec<usize> = graph.layer(layer).map(|n| n.rank).collect();
                prop_assert_eq!(ranks, (0..graph.layer(layer).count()).collect::<Vec<_>>());
            }

            for edge in &graph.edges {
                let from = graph.node(edge.from.as_str());
                let to = graph.node(edge.to.as_str());
                prop_assert!(from.is_some() && to.is_some());
                prop_assert!(topo.out_edges(edge.from.as_str()).unwrap().any(|t| t == &edge.to));
                if !induced {
                    prop_assert_ne!(from.map(|n| n.layer), Some(Layer::Downstream));
                }
            }
        }
    }

    #[test]
    fn queries_are_deterministic(topo in arb_topology()) {
        for k in topo.all_node_keys() {
            prop_assert_eq!(query(&topo, k.as_str()).unwrap(), query(&topo, k.as_str()).unwrap());
        }
    }
}
