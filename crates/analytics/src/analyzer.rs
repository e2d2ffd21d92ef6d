use crate::adjacency::Adjacency;
use crate::centrality;
use crate::community;
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, Result};
use crate::paths;
use crate::report::AnalyticsReport;
use crate::structure;
use ldscope_graph::Graph;
use std::collections::BTreeMap;
use std::time::Instant;

/// Computes an [`AnalyticsReport`] under an [`AnalyticsConfig`].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyticsConfig,
}

impl Analyzer {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Analyze `graph`, refusing it when it exceeds the node ceiling.
    pub fn analyze(&self, graph: &Graph) -> Result<AnalyticsReport> {
        let nodes = graph.node_count();
        if let Some(limit) = self.config.max_nodes {
            if nodes > limit {
                return Err(AnalyticsError::TooLarge { nodes, limit });
            }
        }
        Ok(self.run(graph))
    }

    fn run(&self, graph: &Graph) -> AnalyticsReport {
        let started = Instant::now();
        let ids: Vec<&str> = graph.nodes().map(|(_, node)| node.id.as_str()).collect();
        let adj = Adjacency::from_graph(graph);
        let parallel = self.config.parallel;
        log::debug!(
            "Analyzing {} nodes, {} edges (parallel: {parallel})",
            adj.len(),
            adj.edge_count()
        );

        let degrees = structure::degree_stats(&adj);
        let local = structure::local_clustering(&adj);
        let clustering = structure::global_clustering(&adj, &local);
        let components = structure::component_count(&adj);

        let betweenness = centrality::betweenness(&adj, parallel);
        log::debug!("Betweenness done in {:?}", started.elapsed());

        let sweep = paths::sweep(&adj, parallel);
        let closeness = centrality::closeness(&sweep);
        log::debug!("Path sweep done in {:?}", started.elapsed());

        let eigen = centrality::eigenvector(&adj, self.config.eigenvector);
        if !eigen.converged {
            log::warn!(
                "Eigenvector centrality did not converge after {} iterations",
                eigen.iterations
            );
        }

        let communities =
            community::label_propagation(&adj, self.config.communities.max_passes);
        if !communities.converged {
            log::warn!(
                "Label propagation still changing after {} passes",
                communities.passes
            );
        }

        let report = AnalyticsReport {
            node_count: adj.len(),
            edge_count: adj.edge_count(),
            density: structure::density(&adj),
            degree: by_id(&ids, &degrees.degrees),
            average_degree: degrees.average,
            max_degree: degrees.max,
            min_degree: degrees.min,
            clustering,
            local_clustering: by_id(&ids, &local),
            betweenness: by_id(&ids, &betweenness),
            closeness: by_id(&ids, &closeness),
            eigenvector: by_id(&ids, &eigen.scores),
            eigenvector_iterations: eigen.iterations,
            eigenvector_converged: eigen.converged,
            communities: by_id(&ids, &communities.labels),
            community_count: communities.count,
            community_passes: communities.passes,
            communities_converged: communities.converged,
            component_count: components,
            diameter: paths::diameter(&sweep),
            average_path_length: paths::average_path_length(&sweep),
        };

        log::info!(
            "Analyzed {} nodes / {} edges in {:?}: {} communities, diameter {}",
            report.node_count,
            report.edge_count,
            started.elapsed(),
            report.community_count,
            report.diameter
        );
        report
    }
}

/// Analyze with default settings and no node ceiling.
pub fn analyze(graph: &Graph) -> AnalyticsReport {
    Analyzer::default().run(graph)
}

fn by_id<T: Copy>(ids: &[&str], values: &[T]) -> BTreeMap<String, T> {
    ids.iter()
        .zip(values)
        .map(|(id, value)| ((*id).to_string(), *value))
        .collect()
}
