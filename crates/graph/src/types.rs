use crate::error::{GraphError, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Relation name used for parent -> nested child links
pub const CONTAINS_RELATION: &str = "contains";
/// Type given to entities without an explicit type
pub const UNKNOWN_TYPE: &str = "Unknown";

pub const CONTAINS_WEIGHT: f64 = 1.0;
pub const REFERENCE_WEIGHT: f64 = 1.0;
pub const URL_WEIGHT: f64 = 0.5;
pub const STRING_WEIGHT: f64 = 0.3;
pub const SCALAR_WEIGHT: f64 = 0.2;

/// Where a node came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A real document object
    Entity,
    /// Materialized from an absolute URL string
    Reference,
    /// Materialized from a scalar literal
    Value,
}

impl NodeKind {
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        !matches!(self, Self::Entity)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Reference => "reference",
            Self::Value => "value",
        }
    }
}

/// Node in the document graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub name: String,
    /// Snapshot of the originating object's fields (empty for leaves)
    #[serde(default)]
    pub properties: Map<String, Value>,
    pub kind: NodeKind,
    /// Literal value carried by leaf nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Property the leaf was materialized from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl GraphNode {
    #[must_use]
    pub fn entity(
        id: impl Into<String>,
        node_type: impl Into<String>,
        name: impl Into<String>,
        properties: Map<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            name: name.into(),
            properties,
            kind: NodeKind::Entity,
            value: None,
            property: None,
        }
    }

    #[must_use]
    pub fn leaf(
        kind: NodeKind,
        id: impl Into<String>,
        node_type: impl Into<String>,
        name: impl Into<String>,
        value: Value,
        property: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            name: name.into(),
            properties: Map::new(),
            kind,
            value: Some(value),
            property: Some(property.into()),
        }
    }
}

/// Edge weight stored in the underlying petgraph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub relation: String,
    pub weight: f64,
}

impl GraphEdge {
    #[must_use]
    pub fn new(relation: impl Into<String>, weight: f64) -> Self {
        Self {
            relation: relation.into(),
            weight,
        }
    }
}

/// Id-addressed view of one link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub relation: String,
    pub weight: f64,
}

/// Directed multigraph of document nodes.
///
/// Nodes are unique by id; links keep insertion order. Built once by
/// [`crate::GraphBuilder`] and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "GraphSnapshot", try_from = "GraphSnapshot")]
pub struct Graph {
    pub(crate) graph: DiGraph<GraphNode, GraphEdge>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or return the index of the node already holding its id
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.id) {
            return idx;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        idx
    }

    pub fn add_link(&mut self, source: NodeIndex, target: NodeIndex, edge: GraphEdge) {
        self.graph.add_edge(source, target, edge);
    }

    /// Add a link between two nodes addressed by id
    pub fn link(&mut self, source: &str, target: &str, relation: &str, weight: f64) -> Result<()> {
        let from = self
            .find_node(source)
            .ok_or_else(|| GraphError::NodeNotFound(source.to_string()))?;
        let to = self
            .find_node(target)
            .ok_or_else(|| GraphError::NodeNotFound(target.to_string()))?;
        self.add_link(from, to, GraphEdge::new(relation, weight));
        Ok(())
    }

    #[must_use]
    pub fn has_link(&self, source: NodeIndex, target: NodeIndex, relation: &str) -> bool {
        self.graph
            .edges_connecting(source, target)
            .any(|e| e.weight().relation == relation)
    }

    #[must_use]
    pub fn find_node(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn get_node(&self, idx: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(idx)
    }

    pub(crate) fn get_node_mut(&mut self, idx: NodeIndex) -> Option<&mut GraphNode> {
        self.graph.node_weight_mut(idx)
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.find_node(id).and_then(|idx| self.get_node(idx))
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &GraphNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Links in insertion order
    pub fn links(&self) -> impl Iterator<Item = GraphLink> + '_ {
        self.graph.edge_references().map(move |e| GraphLink {
            source: self.graph[e.source()].id.clone(),
            target: self.graph[e.target()].id.clone(),
            relation: e.weight().relation.clone(),
            weight: e.weight().weight,
        })
    }

    /// Dense `(source, target)` positions of every link, in insertion order.
    ///
    /// Positions match the order of [`Graph::nodes`].
    pub fn link_endpoints(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
    }

    #[must_use]
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().map(|(_, node)| node.clone()).collect(),
            links: self.links().collect(),
        }
    }
}

/// Plain `{ nodes, links }` form used for transport
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl From<Graph> for GraphSnapshot {
    fn from(graph: Graph) -> Self {
        graph.to_snapshot()
    }
}

impl TryFrom<GraphSnapshot> for Graph {
    type Error = GraphError;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self> {
        let mut graph = Self::new();
        for node in snapshot.nodes {
            if graph.contains(&node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }
            graph.add_node(node);
        }
        for link in snapshot.links {
            graph.link(&link.source, &link.target, &link.relation, link.weight)?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entity(id: &str) -> GraphNode {
        GraphNode::entity(id, "Thing", id, Map::new())
    }

    #[test]
    fn add_node_reuses_existing_id() {
        let mut graph = Graph::new();
        let first = graph.add_node(entity("a"));
        let second = graph.add_node(GraphNode::entity("a", "Other", "other", Map::new()));

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node("a").map(|n| n.node_type.as_str()), Some("Thing"));
    }

    #[test]
    fn kind_names_match_serialized_form() {
        for kind in [NodeKind::Entity, NodeKind::Reference, NodeKind::Value] {
            let json = serde_json::to_value(kind).expect("serialize kind");
            assert_eq!(json, Value::from(kind.as_str()));
        }
    }

    #[test]
    fn link_by_unknown_id_fails() {
        let mut graph = Graph::new();
        graph.add_node(entity("a"));

        let err = graph.link("a", "missing", "knows", 1.0).expect_err("dangling link");
        assert!(matches!(err, GraphError::NodeNotFound(id) if id == "missing"));
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn snapshot_rejects_duplicates_and_dangling_links() {
        let duplicate = GraphSnapshot {
            nodes: vec![entity("a"), entity("a")],
            links: vec![],
        };
        assert!(matches!(
            Graph::try_from(duplicate),
            Err(GraphError::DuplicateNode(_))
        ));

        let dangling = GraphSnapshot {
            nodes: vec![entity("a")],
            links: vec![GraphLink {
                source: "a".into(),
                target: "b".into(),
                relation: "knows".into(),
                weight: 1.0,
            }],
        };
        assert!(matches!(
            Graph::try_from(dangling),
            Err(GraphError::NodeNotFound(_))
        ));
    }

    #[test]
    fn serializes_as_nodes_and_links() {
        let mut graph = Graph::new();
        graph.add_node(entity("a"));
        graph.add_node(GraphNode::leaf(
            NodeKind::Value,
            "v",
            "String",
            "hello",
            Value::from("hello"),
            "note",
        ));
        graph.link("a", "v", "note", STRING_WEIGHT).unwrap();

        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["nodes"][0]["type"], "Thing");
        assert_eq!(json["nodes"][0]["kind"], "entity");
        assert_eq!(json["nodes"][1]["kind"], "value");
        assert_eq!(json["nodes"][1]["property"], "note");
        assert_eq!(json["links"][0]["relation"], "note");
        assert!(json["nodes"][0].get("value").is_none());

        let back: Graph = serde_json::from_value(json).unwrap();
        assert_eq!(back.to_snapshot(), graph.to_snapshot());
    }
}
