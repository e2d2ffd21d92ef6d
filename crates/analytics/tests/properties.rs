//! Invariants that hold for any graph

use ldscope_analytics::{AnalyticsConfig, Analyzer};
use ldscope_graph::{Graph, GraphEdge, GraphNode};
use proptest::prelude::*;
use serde_json::Map;

fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..40).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..n * 3).prop_map(move |edges| {
            let mut graph = Graph::new();
            let nodes: Vec<_> = (0..n)
                .map(|i| {
                    let id = format!("n{i:02}");
                    graph.add_node(GraphNode::entity(id.as_str(), "Thing", id.as_str(), Map::new()))
                })
                .collect();
            for (s, t) in edges {
                graph.add_link(nodes[s], nodes[t], GraphEdge::new("rel", 1.0));
            }
            graph
        })
    })
}

fn analyzer(parallel: bool) -> Analyzer {
    Analyzer::new(AnalyticsConfig {
        parallel,
        ..AnalyticsConfig::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn parallel_matches_sequential(graph in arb_graph()) {
        let parallel = analyzer(true).analyze(&graph).expect("no ceiling");
        let sequential = analyzer(false).analyze(&graph).expect("no ceiling");
        prop_assert_eq!(parallel, sequential);
    }

    #[test]
    fn metrics_stay_in_range(graph in arb_graph()) {
        let report = analyzer(true).analyze(&graph).expect("no ceiling");
        let n = report.node_count;

        prop_assert!((0.0..=1.0).contains(&report.density));
        prop_assert!((0.0..=1.0).contains(&report.clustering));
        prop_assert!(report.min_degree <= report.max_degree);
        prop_assert!(report.diameter < n.max(1));
        prop_assert!(report.component_count >= 1);
        prop_assert!(report.community_count >= report.component_count);
        prop_assert_eq!(report.communities.len(), n);

        for &score in report.betweenness.values() {
            prop_assert!(score >= 0.0);
        }
        for &score in report.closeness.values() {
            prop_assert!((0.0..=1.0).contains(&score));
        }
        for &community in report.communities.values() {
            prop_assert!(community < report.community_count);
        }
    }
}
