//! Shortest-path sweep shared by closeness, diameter and average path length.

use crate::adjacency::Adjacency;
use crate::sweep;
use std::collections::VecDeque;
use std::ops::Range;

/// BFS totals for one source, over the vertices it can reach
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourcePaths {
    /// Reachable vertices, the source excluded
    pub reachable: usize,
    pub distance_sum: usize,
    /// Largest finite distance from the source
    pub eccentricity: usize,
}

/// Per-source totals in vertex order
pub fn sweep(adj: &Adjacency, parallel: bool) -> Vec<SourcePaths> {
    sweep::run(adj.len(), parallel, |sources| sweep_chunk(adj, sources))
        .into_iter()
        .flatten()
        .collect()
}

fn sweep_chunk(adj: &Adjacency, sources: Range<usize>) -> Vec<SourcePaths> {
    let mut dist: Vec<Option<usize>> = vec![None; adj.len()];
    let mut visited = Vec::new();
    let mut queue = VecDeque::new();

    sources
        .map(|s| {
            let mut paths = SourcePaths::default();
            dist[s] = Some(0);
            visited.push(s);
            queue.push_back((s, 0usize));

            while let Some((v, d)) = queue.pop_front() {
                for &w in adj.neighbors(v) {
                    if dist[w].is_none() {
                        dist[w] = Some(d + 1);
                        visited.push(w);
                        queue.push_back((w, d + 1));
                        paths.reachable += 1;
                        paths.distance_sum += d + 1;
                        paths.eccentricity = paths.eccentricity.max(d + 1);
                    }
                }
            }

            for v in visited.drain(..) {
                dist[v] = None;
            }
            paths
        })
        .collect()
}

/// Largest finite distance; 0 without edges
pub fn diameter(paths: &[SourcePaths]) -> usize {
    paths.iter().map(|p| p.eccentricity).max().unwrap_or(0)
}

/// Mean finite distance over ordered reachable pairs; 0 if there are none
pub fn average_path_length(paths: &[SourcePaths]) -> f64 {
    let pairs: usize = paths.iter().map(|p| p.reachable).sum();
    if pairs == 0 {
        return 0.0;
    }
    let total: usize = paths.iter().map(|p| p.distance_sum).sum();
    total as f64 / pairs as f64
}
