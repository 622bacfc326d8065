//! Property-based tests for graph invariants and traversal laws.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use sociograph_core::NodeId;

use crate::analytics::DegreeCentrality;
use crate::store::{SocialGraph, DEFAULT_CAPACITY};
use crate::traversal::{BfsTraversal, PathResult, ShortestPath};

const MAX_NODES: usize = DEFAULT_CAPACITY;

/// Strategy for generating arbitrary graphs: 1..=MAX_NODES users and a
/// random batch of in-range directed edges (duplicates welcome, to
/// exercise idempotent insertion).
fn arb_graph() -> impl Strategy<Value = SocialGraph> {
    (1..=MAX_NODES).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..32).prop_map(move |edges| {
            let names = (0..n).map(|i| format!("user{i}"));
            let mut graph = SocialGraph::new(names).expect("node count within capacity");
            for (source, target) in edges {
                graph
                    .add_edge(NodeId::new(source), NodeId::new(target))
                    .expect("endpoints are in range");
            }
            graph
        })
    })
}

/// Pick a valid node id from a raw seed.
fn pick(graph: &SocialGraph, seed: usize) -> NodeId {
    NodeId::new(seed % graph.node_count())
}

proptest! {
    #[test]
    fn degree_sums_match_edge_count(graph in arb_graph()) {
        let result = DegreeCentrality::compute(&graph);

        let total_in: usize = result.entries.iter().map(|e| e.in_degree).sum();
        let total_out: usize = result.entries.iter().map(|e| e.out_degree).sum();

        prop_assert_eq!(total_in, graph.edge_count());
        prop_assert_eq!(total_out, graph.edge_count());

        for entry in &result.entries {
            prop_assert_eq!(entry.total(), entry.in_degree + entry.out_degree);
        }
    }

    #[test]
    fn query_to_self_is_same_node(graph in arb_graph(), seed in any::<usize>()) {
        let node = pick(&graph, seed);
        let result = ShortestPath::new(node, node).find(&graph).expect("endpoints valid");
        prop_assert_eq!(result, PathResult::SameNode(node));
    }

    #[test]
    fn found_paths_are_walkable(
        graph in arb_graph(),
        source_seed in any::<usize>(),
        target_seed in any::<usize>(),
    ) {
        let source = pick(&graph, source_seed);
        let target = pick(&graph, target_seed);

        match ShortestPath::new(source, target).find(&graph).expect("endpoints valid") {
            PathResult::SameNode(node) => {
                prop_assert_eq!(source, target);
                prop_assert_eq!(node, source);
            }
            PathResult::Found(path) => {
                prop_assert_eq!(path.source(), source);
                prop_assert_eq!(path.target(), target);
                prop_assert_eq!(path.distance, path.nodes.len() - 1);
                prop_assert!(path.distance >= 1);
                for pair in path.nodes.windows(2) {
                    prop_assert!(graph.has_edge(pair[0], pair[1]));
                }
            }
            PathResult::NotFound => {
                // Cross-check against exhaustive reachability
                let visits = BfsTraversal::new(source).execute(&graph).expect("start valid");
                prop_assert!(visits.iter().all(|visit| visit.node != target));
            }
        }
    }

    #[test]
    fn distance_and_exists_agree_with_find(
        graph in arb_graph(),
        source_seed in any::<usize>(),
        target_seed in any::<usize>(),
    ) {
        let source = pick(&graph, source_seed);
        let target = pick(&graph, target_seed);

        let found = ShortestPath::new(source, target).find(&graph).expect("endpoints valid");
        let distance =
            ShortestPath::new(source, target).distance(&graph).expect("endpoints valid");
        let exists = ShortestPath::new(source, target).exists(&graph).expect("endpoints valid");

        prop_assert_eq!(found.distance(), distance);
        prop_assert_eq!(exists, distance.is_some());
    }

    #[test]
    fn over_capacity_construction_is_rejected(extra in 1..4usize) {
        let names = (0..DEFAULT_CAPACITY + extra).map(|i| format!("user{i}"));
        prop_assert!(SocialGraph::new(names).is_err());
    }
}
