use crate::classify::{classify, RelationshipValue};
use crate::document::{entity_id, entity_type, flatten_entities, is_metadata_key, MAX_DEPTH};
use crate::ids::{anonymous_entity_id, leaf_id, nested_entity_id};
use crate::naming::{leaf_label, resolve_name, url_tail};
use crate::types::{
    Graph, GraphEdge, GraphNode, NodeKind, CONTAINS_RELATION, CONTAINS_WEIGHT, REFERENCE_WEIGHT,
    SCALAR_WEIGHT, STRING_WEIGHT, UNKNOWN_TYPE, URL_WEIGHT,
};
use petgraph::graph::NodeIndex;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Build state of an entity id. Ids absent from the map are unseen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

/// Position of a value under its parent entity
#[derive(Debug, Clone, Copy)]
struct Slot<'a> {
    parent: NodeIndex,
    parent_id: &'a str,
    relation: &'a str,
    position: usize,
}

/// Builds a [`Graph`] from a JSON-LD-like document.
///
/// Accepts a single object, an array of objects, or a `{"@graph": [...]}`
/// wrapper, in any nesting. Building never fails: unrecognized shapes
/// degrade to `Unknown` entities or an empty graph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    visits: HashMap<String, VisitState>,
    ordinal: usize,
}

/// Build a graph with a fresh builder
#[must_use]
pub fn build_graph(document: &Value) -> Graph {
    GraphBuilder::new().build(document)
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from one document
    pub fn build(&mut self, document: &Value) -> Graph {
        self.visits.clear();
        self.ordinal = 0;

        for entity in flatten_entities(document) {
            self.process_entity(entity, None, 0);
        }

        let graph = std::mem::take(&mut self.graph);
        self.visits.clear();

        log::info!(
            "Built document graph: {} nodes, {} links",
            graph.node_count(),
            graph.link_count()
        );
        graph
    }

    fn process_entity(
        &mut self,
        object: &Map<String, Value>,
        slot: Option<Slot<'_>>,
        depth: usize,
    ) -> NodeIndex {
        let (idx, id) = self.enter_entity(object, slot.as_ref());
        if let Some(slot) = slot {
            self.push_link(slot.parent, idx, CONTAINS_RELATION, CONTAINS_WEIGHT);
        }
        self.walk_entity(idx, id, object, depth);
        idx
    }

    /// Resolve the entity's id and register its node, without descending
    fn enter_entity(
        &mut self,
        object: &Map<String, Value>,
        slot: Option<&Slot<'_>>,
    ) -> (NodeIndex, String) {
        self.ordinal += 1;
        let id = match (entity_id(object), slot) {
            (Some(id), _) => id,
            (None, Some(slot)) => {
                nested_entity_id(slot.parent_id, slot.relation, slot.position, object)
            }
            (None, None) => self.synthesize_id(object),
        };
        let idx = self.register_entity(&id, object);
        (idx, id)
    }

    fn walk_entity(
        &mut self,
        idx: NodeIndex,
        id: String,
        object: &Map<String, Value>,
        depth: usize,
    ) {
        self.visits.insert(id.clone(), VisitState::InProgress);
        for (key, value) in object {
            if is_metadata_key(key) {
                continue;
            }
            let mut position = 0;
            self.process_property(idx, &id, key, value, &mut position, depth);
        }
        self.visits.insert(id, VisitState::Done);
    }

    /// Add the entity node, or fold this definition into the node already
    /// holding its id
    fn register_entity(&mut self, id: &str, object: &Map<String, Value>) -> NodeIndex {
        if let Some(idx) = self.graph.find_node(id) {
            if let Some(node) = self.graph.get_node_mut(idx) {
                if node.kind.is_leaf() {
                    log::debug!("Upgrading {} node '{id}' to an entity", node.kind.as_str());
                }
                for (key, value) in object {
                    if !node.properties.contains_key(key) {
                        node.properties.insert(key.clone(), value.clone());
                    }
                }
                node.kind = NodeKind::Entity;
                node.value = None;
                node.property = None;
                node.node_type =
                    entity_type(&node.properties).unwrap_or_else(|| UNKNOWN_TYPE.to_string());
                node.name = resolve_name(&node.properties, Some(id), &node.node_type);
            }
            return idx;
        }

        let node_type = entity_type(object).unwrap_or_else(|| UNKNOWN_TYPE.to_string());
        let name = resolve_name(object, Some(id), &node_type);
        self.graph
            .add_node(GraphNode::entity(id, node_type, name, object.clone()))
    }

    /// Arrays fan out under one relation; `position` counts the values
    /// reached so far and keys nested anonymous children
    fn process_property(
        &mut self,
        source: NodeIndex,
        source_id: &str,
        relation: &str,
        value: &Value,
        position: &mut usize,
        depth: usize,
    ) {
        match value {
            Value::Array(items) => {
                if depth >= MAX_DEPTH {
                    log::warn!("Skipping array under '{relation}' of {source_id}: nesting too deep");
                    return;
                }
                for item in items {
                    self.process_property(source, source_id, relation, item, position, depth + 1);
                }
            }
            _ => {
                let slot = Slot {
                    parent: source,
                    parent_id: source_id,
                    relation,
                    position: *position,
                };
                *position += 1;
                self.process_value(slot, value, depth);
            }
        }
    }

    fn process_value(&mut self, slot: Slot<'_>, value: &Value, depth: usize) {
        let Slot {
            parent: source,
            parent_id: source_id,
            relation,
            ..
        } = slot;

        match classify(value) {
            RelationshipValue::EntityRef { id, object } => {
                let known = self
                    .visits
                    .get(&id)
                    .and_then(|_| self.graph.find_node(&id));
                if let Some(target) = known {
                    // Inline fields still count, but the subtree is not walked again
                    if object.keys().any(|key| key != "@id" && key != "id") {
                        self.register_entity(&id, object);
                    }
                    self.push_link(source, target, relation, REFERENCE_WEIGHT);
                    return;
                }
                if depth >= MAX_DEPTH {
                    log::warn!("Skipping '{id}' under {source_id}: nesting too deep");
                    return;
                }
                let (target, id) = self.enter_entity(object, None);
                self.push_link(source, target, relation, REFERENCE_WEIGHT);
                self.walk_entity(target, id, object, depth + 1);
            }
            RelationshipValue::Nested(object) => {
                if depth >= MAX_DEPTH {
                    log::warn!("Skipping nested '{relation}' of {source_id}: nesting too deep");
                    return;
                }
                self.process_entity(object, Some(slot), depth + 1);
            }
            RelationshipValue::UrlRef(url) => {
                let name = url_tail(url).unwrap_or_else(|| url.to_string());
                let target = self.graph.add_node(GraphNode::leaf(
                    NodeKind::Reference,
                    url,
                    "Reference",
                    name,
                    Value::from(url),
                    relation,
                ));
                self.push_link(source, target, relation, URL_WEIGHT);
            }
            RelationshipValue::StringLeaf(text) => {
                let target = self.graph.add_node(GraphNode::leaf(
                    NodeKind::Value,
                    leaf_id(source_id, relation, "string", text),
                    "String",
                    leaf_label(text),
                    Value::from(text),
                    relation,
                ));
                self.push_link(source, target, relation, STRING_WEIGHT);
            }
            RelationshipValue::NumericLeaf(number) => {
                let text = number.to_string();
                let target = self.graph.add_node(GraphNode::leaf(
                    NodeKind::Value,
                    leaf_id(source_id, relation, "number", &text),
                    "Number",
                    text,
                    Value::Number(number.clone()),
                    relation,
                ));
                self.push_link(source, target, relation, SCALAR_WEIGHT);
            }
            RelationshipValue::BooleanLeaf(flag) => {
                let text = flag.to_string();
                let target = self.graph.add_node(GraphNode::leaf(
                    NodeKind::Value,
                    leaf_id(source_id, relation, "boolean", &text),
                    "Boolean",
                    text,
                    Value::Bool(flag),
                    relation,
                ));
                self.push_link(source, target, relation, SCALAR_WEIGHT);
            }
            RelationshipValue::Empty => {}
        }
    }

    fn push_link(&mut self, source: NodeIndex, target: NodeIndex, relation: &str, weight: f64) {
        if self.graph.has_link(source, target, relation) {
            return;
        }
        self.graph
            .add_link(source, target, GraphEdge::new(relation, weight));
    }

    fn synthesize_id(&self, object: &Map<String, Value>) -> String {
        let mut salt = 0;
        loop {
            let id = anonymous_entity_id(object, self.ordinal, salt);
            if !self.graph.contains(&id) && !self.visits.contains_key(&id) {
                return id;
            }
            salt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn build(doc: Value) -> Graph {
        build_graph(&doc)
    }

    type LinkRow = (String, String, String, f64);

    fn row(source: &str, target: &str, relation: &str, weight: f64) -> LinkRow {
        (source.into(), target.into(), relation.into(), weight)
    }

    fn links_of(graph: &Graph) -> Vec<LinkRow> {
        graph
            .links()
            .map(|l| (l.source, l.target, l.relation, l.weight))
            .collect()
    }

    #[test]
    fn nested_object_becomes_contained_child() {
        let graph = build(json!({ "@id": "p1", "child": { "name": "c1" } }));

        let entities: Vec<&GraphNode> = graph
            .nodes()
            .map(|(_, n)| n)
            .filter(|n| n.kind == NodeKind::Entity)
            .collect();
        assert_eq!(entities.len(), 2);
        let child = entities[1];
        assert_eq!(child.name, "c1");
        assert_eq!(child.node_type, UNKNOWN_TYPE);

        let contains: Vec<_> = links_of(&graph)
            .into_iter()
            .filter(|l| l.2 == CONTAINS_RELATION)
            .collect();
        assert_eq!(
            contains,
            vec![row("p1", &child.id, "contains", 1.0)]
        );
    }

    #[test]
    fn url_strings_become_reference_leaves() {
        let graph = build(json!({ "@id": "x", "tag": "http://example.com/a" }));

        let leaf = graph.node("http://example.com/a").expect("reference node");
        assert_eq!(leaf.kind, NodeKind::Reference);
        assert_eq!(leaf.name, "A");
        assert_eq!(leaf.property.as_deref(), Some("tag"));
        assert!(leaf.properties.is_empty());
        assert_eq!(
            links_of(&graph),
            vec![row("x", "http://example.com/a", "tag", 0.5)]
        );
    }

    #[test]
    fn scalars_become_value_leaves() {
        let graph = build(json!({ "@id": "x", "note": "hello", "count": 3, "ok": false }));

        assert_eq!(graph.node_count(), 4);
        let weights: Vec<(String, f64)> = graph
            .links()
            .map(|l| (l.relation, l.weight))
            .collect();
        assert_eq!(
            weights,
            vec![
                ("note".to_string(), 0.3),
                ("count".to_string(), 0.2),
                ("ok".to_string(), 0.2)
            ]
        );
        let types: Vec<&str> = graph
            .nodes()
            .skip(1)
            .map(|(_, n)| n.node_type.as_str())
            .collect();
        assert_eq!(types, vec!["String", "Number", "Boolean"]);
        let note = graph.nodes().nth(1).map(|(_, n)| n).unwrap();
        assert_eq!(note.kind, NodeKind::Value);
        assert_eq!(note.value, Some(json!("hello")));
        assert_eq!(note.name, "hello");
    }

    #[test]
    fn identical_literals_from_different_sources_stay_distinct() {
        let graph = build(json!([
            { "@id": "a", "color": "red" },
            { "@id": "b", "color": "red" }
        ]));
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.link_count(), 2);
    }

    #[test]
    fn empty_values_are_ignored() {
        let graph = build(json!({ "@id": "x", "a": null, "b": "", "c": {}, "d": [] }));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn arrays_fan_out_under_one_relation() {
        let graph = build(json!({
            "@id": "x",
            "knows": [{ "@id": "y" }, { "@id": "z" }, ["http://example.com/w"]]
        }));
        let relations: Vec<String> = graph.links().map(|l| l.relation).collect();
        assert_eq!(relations, vec!["knows", "knows", "knows"]);
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn metadata_keys_are_not_relationships() {
        let graph = build(json!({
            "@context": { "name": "http://schema.org/name" },
            "id": "x",
            "type": "Person",
            "@type": "Person",
            "name": "Ada"
        }));
        let node = graph.node("x").expect("entity");
        assert_eq!(node.node_type, "Person");
        assert_eq!(node.name, "Ada");
        // only the name literal is materialized
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn referenced_then_defined_yields_one_node() {
        let graph = build(json!({
            "@graph": [
                { "@id": "a", "@type": "Person", "knows": { "@id": "b" } },
                { "@id": "b", "@type": "Person", "name": "Bea" }
            ]
        }));

        let ids: Vec<&str> = graph
            .nodes()
            .filter(|(_, n)| n.kind == NodeKind::Entity)
            .map(|(_, n)| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        let b = graph.node("b").unwrap();
        assert_eq!(b.node_type, "Person");
        assert_eq!(b.name, "Bea");
    }

    #[test]
    fn url_reference_upgrades_when_defined() {
        let graph = build(json!([
            { "@id": "a", "sameAs": "http://example.com/b" },
            { "@id": "http://example.com/b", "@type": "Thing", "label": "Bee" }
        ]));
        let b = graph.node("http://example.com/b").unwrap();
        assert_eq!(b.kind, NodeKind::Entity);
        assert_eq!(b.name, "Bee");
        assert_eq!(b.value, None);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn cycles_terminate_with_reference_links() {
        let graph = build(json!({
            "@id": "a",
            "next": { "@id": "b", "next": { "@id": "a" }, "self": { "@id": "b" } }
        }));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(
            links_of(&graph),
            vec![
                row("a", "b", "next", 1.0),
                row("b", "a", "next", 1.0),
                row("b", "b", "self", 1.0),
            ]
        );
    }

    #[test]
    fn repeated_definitions_do_not_duplicate_links() {
        let entity = json!({
            "@id": "a",
            "note": "n",
            "knows": { "@id": "b" },
            "address": { "street": "Main" }
        });
        let once = build(json!([entity.clone()]));
        let twice = build(json!([entity.clone(), entity]));

        // a, note leaf, b, address child, street leaf
        assert_eq!(twice.node_count(), 5);
        assert_eq!(twice.link_count(), 4);
        assert_eq!(twice.to_snapshot(), once.to_snapshot());

        let contains = twice
            .links()
            .filter(|l| l.relation == CONTAINS_RELATION)
            .count();
        assert_eq!(contains, 1);
    }

    #[test]
    fn nested_children_in_one_array_stay_distinct() {
        let graph = build(json!({
            "@id": "a",
            "address": [{ "street": "Main" }, { "street": "Main" }]
        }));

        let children = graph
            .nodes()
            .filter(|(_, n)| n.kind == NodeKind::Entity && n.id != "a")
            .count();
        assert_eq!(children, 2);
    }

    #[test]
    fn inline_fields_merge_into_an_already_built_entity() {
        let graph = build(json!([
            { "@id": "a", "knows": { "@id": "b" } },
            { "@id": "c", "knows": { "@id": "b", "name": "Bea", "@type": "Person" } }
        ]));

        let b = graph.node("b").expect("referenced entity");
        assert_eq!(b.name, "Bea");
        assert_eq!(b.node_type, "Person");
        // merged, not walked: no name leaf for b
        assert_eq!(graph.node_count(), 3);
        assert_eq!(
            links_of(&graph),
            vec![row("a", "b", "knows", 1.0), row("c", "b", "knows", 1.0)]
        );
    }

    #[test]
    fn reference_link_precedes_the_target_subtree() {
        let graph = build(json!({
            "@id": "a",
            "knows": { "@id": "b", "note": "hi" }
        }));

        let first = graph.links().next().expect("links");
        assert_eq!((first.source.as_str(), first.target.as_str()), ("a", "b"));
        assert_eq!(graph.link_count(), 2);
    }

    #[test]
    fn primitives_and_empty_documents_build_empty_graphs() {
        for doc in [json!(null), json!(1), json!("x"), json!([]), json!({ "@graph": [] })] {
            assert!(build(doc).is_empty());
        }
    }

    #[test]
    fn object_without_id_gets_stable_synthetic_id() {
        let doc = json!({ "@type": "Event", "where": { "@type": "Place" } });
        let first = build_graph(&doc);
        let second = build_graph(&doc);

        assert_eq!(first.to_snapshot(), second.to_snapshot());
        let root = first.nodes().next().map(|(_, n)| n).unwrap();
        assert!(root.id.starts_with("_:b"));
        assert_eq!(root.name, "Event");
    }

    #[test]
    fn builder_can_be_reused() {
        let mut builder = GraphBuilder::new();
        let first = builder.build(&json!({ "@id": "a", "x": { "@id": "b" } }));
        let second = builder.build(&json!({ "@id": "c" }));
        assert_eq!(first.node_count(), 2);
        assert_eq!(second.node_count(), 1);
        assert!(second.node("a").is_none());
    }

    #[test]
    fn deep_nesting_is_cut_off_without_failing() {
        let mut doc = json!({ "name": "leaf" });
        for _ in 0..(MAX_DEPTH + 20) {
            doc = json!({ "inner": doc });
        }
        let graph = build(doc);
        assert!(graph.node_count() <= MAX_DEPTH + 2);
        assert!(graph.node_count() > 1);
    }
}
