//! Density, degree, clustering and connectivity.

use crate::adjacency::Adjacency;
use std::collections::VecDeque;

/// Distinct edges over the `n(n-1)/2` possible ones; 0 below two vertices.
pub fn density(adj: &Adjacency) -> f64 {
    let n = adj.len();
    if n < 2 {
        return 0.0;
    }
    let possible = n as f64 * (n as f64 - 1.0) / 2.0;
    adj.edge_count() as f64 / possible
}

#[derive(Debug, Clone, PartialEq)]
pub struct DegreeStats {
    pub degrees: Vec<usize>,
    pub average: f64,
    pub max: usize,
    pub min: usize,
}

pub fn degree_stats(adj: &Adjacency) -> DegreeStats {
    let degrees: Vec<usize> = (0..adj.len()).map(|v| adj.degree(v)).collect();
    let average = if degrees.is_empty() {
        0.0
    } else {
        degrees.iter().sum::<usize>() as f64 / degrees.len() as f64
    };

    DegreeStats {
        max: degrees.iter().copied().max().unwrap_or(0),
        min: degrees.iter().copied().min().unwrap_or(0),
        average,
        degrees,
    }
}

/// Fraction of neighbor pairs that are themselves adjacent; 0 below degree 2.
pub fn local_clustering(adj: &Adjacency) -> Vec<f64> {
    (0..adj.len())
        .map(|v| {
            let neighbors = adj.neighbors(v);
            let k = neighbors.len();
            if k < 2 {
                return 0.0;
            }
            let mut closed = 0usize;
            for (i, &a) in neighbors.iter().enumerate() {
                for &b in &neighbors[i + 1..] {
                    if adj.are_adjacent(a, b) {
                        closed += 1;
                    }
                }
            }
            closed as f64 / (k * (k - 1) / 2) as f64
        })
        .collect()
}

/// Mean local coefficient over vertices of degree >= 2; 0 if none qualify.
pub fn global_clustering(adj: &Adjacency, local: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut qualifying = 0usize;
    for (v, &coefficient) in local.iter().enumerate() {
        if adj.degree(v) >= 2 {
            sum += coefficient;
            qualifying += 1;
        }
    }
    if qualifying == 0 {
        0.0
    } else {
        sum / qualifying as f64
    }
}

/// Connected components, isolated vertices included
pub fn component_count(adj: &Adjacency) -> usize {
    let mut seen = vec![false; adj.len()];
    let mut queue = VecDeque::new();
    let mut count = 0;

    for start in 0..adj.len() {
        if seen[start] {
            continue;
        }
        count += 1;
        seen[start] = true;
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            for &w in adj.neighbors(v) {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
    }
    count
}
