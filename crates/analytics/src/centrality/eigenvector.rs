//! Eigenvector centrality by power iteration.
//!
//! A vertex is important when its neighbors are. Starting from all ones,
//! each step replaces a score with the sum of its neighbors' scores and
//! L2-normalizes the vector. On a connected non-bipartite graph this
//! settles on the principal eigenvector of the adjacency matrix; otherwise
//! the last iterate is returned and `converged` is false.

use crate::adjacency::Adjacency;
use crate::config::EigenvectorConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct EigenvectorScores {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

#[must_use]
pub fn eigenvector(adj: &Adjacency, config: EigenvectorConfig) -> EigenvectorScores {
    let n = adj.len();
    if n == 0 {
        return EigenvectorScores {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
        };
    }

    let mut scores = vec![1.0; n];
    let mut next = vec![0.0; n];

    for iteration in 1..=config.max_iterations {
        for (v, slot) in next.iter_mut().enumerate() {
            *slot = adj.neighbors(v).iter().fold(0.0, |acc, &u| acc + scores[u]);
        }

        // An edgeless graph collapses to zeros and stays there
        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in &mut next {
                *x /= norm;
            }
        }

        let change = scores
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .fold(0.0, f64::max);

        std::mem::swap(&mut scores, &mut next);

        if change < config.tolerance {
            return EigenvectorScores {
                scores,
                iterations: iteration,
                converged: true,
            };
        }
    }

    EigenvectorScores {
        scores,
        iterations: config.max_iterations,
        converged: false,
    }
}
