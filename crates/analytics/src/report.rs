use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structural metrics of one graph. Per-node maps are keyed by node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub node_count: usize,
    /// Distinct undirected edges, self-loops excluded
    pub edge_count: usize,
    pub density: f64,
    pub degree: BTreeMap<String, usize>,
    pub average_degree: f64,
    pub max_degree: usize,
    pub min_degree: usize,
    pub clustering: f64,
    pub local_clustering: BTreeMap<String, f64>,
    pub betweenness: BTreeMap<String, f64>,
    pub closeness: BTreeMap<String, f64>,
    pub eigenvector: BTreeMap<String, f64>,
    pub eigenvector_iterations: usize,
    pub eigenvector_converged: bool,
    pub communities: BTreeMap<String, usize>,
    pub community_count: usize,
    pub community_passes: usize,
    pub communities_converged: bool,
    pub component_count: usize,
    pub diameter: usize,
    pub average_path_length: f64,
}

/// Node/score pair from a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    pub id: String,
    pub score: f64,
}

impl AnalyticsReport {
    /// Highest-betweenness nodes, best first, ties by id
    pub fn top_betweenness(&self, limit: usize) -> Vec<RankedNode> {
        rank(&self.betweenness, limit)
    }

    pub fn top_eigenvector(&self, limit: usize) -> Vec<RankedNode> {
        rank(&self.eigenvector, limit)
    }

    /// Node ids per community, communities in id order
    pub fn community_members(&self) -> Vec<Vec<&str>> {
        let mut members = vec![Vec::new(); self.community_count];
        for (id, &community) in &self.communities {
            if let Some(group) = members.get_mut(community) {
                group.push(id.as_str());
            }
        }
        members
    }
}

fn rank(scores: &BTreeMap<String, f64>, limit: usize) -> Vec<RankedNode> {
    let mut ranked: Vec<RankedNode> = scores
        .iter()
        .map(|(id, &score)| RankedNode {
            id: id.clone(),
            score,
        })
        .collect();
    // BTreeMap order already sorts ids; a stable sort keeps it for ties
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}
