use crate::types::{Graph, NodeKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// One `(label, count)` bucket of a distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
}

/// Node with its raw link degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotspot {
    pub id: String,
    pub name: String,
    pub links: usize,
}

/// Composition of a graph: what kinds, types and relations it holds.
///
/// Distributions are sorted by count (descending), then label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub node_count: usize,
    pub link_count: usize,
    pub kinds: BTreeMap<NodeKind, usize>,
    pub types: Vec<Bucket>,
    pub relations: Vec<Bucket>,
    pub hotspots: Vec<Hotspot>,
}

impl GraphSummary {
    #[must_use]
    pub fn from_graph(graph: &Graph, hotspot_limit: usize) -> Self {
        let mut kinds = BTreeMap::new();
        let mut types: BTreeMap<&str, usize> = BTreeMap::new();
        for (_, node) in graph.nodes() {
            *kinds.entry(node.kind).or_insert(0) += 1;
            *types.entry(node.node_type.as_str()).or_insert(0) += 1;
        }

        let mut relations: BTreeMap<String, usize> = BTreeMap::new();
        for link in graph.links() {
            *relations.entry(link.relation).or_insert(0) += 1;
        }

        let hotspots = graph
            .find_hotspots(hotspot_limit)
            .into_iter()
            .filter_map(|(idx, links)| {
                graph.get_node(idx).map(|node| Hotspot {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    links,
                })
            })
            .collect();

        Self {
            node_count: graph.node_count(),
            link_count: graph.link_count(),
            kinds,
            types: into_buckets(types.into_iter().map(|(k, v)| (k.to_string(), v))),
            relations: into_buckets(relations.into_iter()),
            hotspots,
        }
    }
}

fn into_buckets(counts: impl Iterator<Item = (String, usize)>) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = counts
        .map(|(label, count)| Bucket { label, count })
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    buckets
}
