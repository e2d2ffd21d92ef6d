use crate::types::{Graph, GraphEdge};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::BTreeSet;

impl Graph {
    /// Outgoing links of a node as `(target, edge)`
    #[must_use]
    pub fn links_from(&self, node: NodeIndex) -> Vec<(NodeIndex, &GraphEdge)> {
        let mut out: Vec<_> = self
            .graph
            .edges(node)
            .map(|e| (e.target(), e.weight()))
            .collect();
        // petgraph walks adjacency newest-first
        out.reverse();
        out
    }

    /// Incoming links of a node as `(source, edge)`
    #[must_use]
    pub fn links_to(&self, node: NodeIndex) -> Vec<(NodeIndex, &GraphEdge)> {
        let mut out: Vec<_> = self
            .graph
            .edges_directed(node, Direction::Incoming)
            .map(|e| (e.source(), e.weight()))
            .collect();
        out.reverse();
        out
    }

    /// Targets reached from `node` through links named `relation`
    #[must_use]
    pub fn targets_by_relation(&self, node: NodeIndex, relation: &str) -> Vec<NodeIndex> {
        self.links_from(node)
            .into_iter()
            .filter(|(_, edge)| edge.relation == relation)
            .map(|(target, _)| target)
            .collect()
    }

    /// Distinct nodes adjacent in either direction, self excluded
    #[must_use]
    pub fn neighbors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let set: BTreeSet<NodeIndex> = self
            .graph
            .neighbors_undirected(node)
            .filter(|&n| n != node)
            .collect();
        set.into_iter().collect()
    }

    /// Raw link count touching a node (multi-links counted separately)
    #[must_use]
    pub fn link_degree(&self, node: NodeIndex) -> usize {
        let outgoing = self.graph.edges(node).count();
        let incoming = self.graph.edges_directed(node, Direction::Incoming).count();
        outgoing + incoming
    }

    /// Most connected nodes by raw link degree; ties keep insertion order
    #[must_use]
    pub fn find_hotspots(&self, limit: usize) -> Vec<(NodeIndex, usize)> {
        let mut scores: Vec<(NodeIndex, usize)> = self
            .graph
            .node_indices()
            .map(|n| (n, self.link_degree(n)))
            .collect();

        scores.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scores.truncate(limit);
        scores
    }
}
