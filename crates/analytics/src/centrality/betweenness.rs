//! Brandes betweenness.
//!
//! One BFS per source counts shortest paths (`sigma`) forward, then a
//! backward pass over the BFS order accumulates dependencies:
//!
//! ```text
//! delta(v) = sum over successors w of (sigma(v) / sigma(w)) * (1 + delta(w))
//! ```
//!
//! Every ordered `(s, t)` pair is visited, so each undirected path is
//! counted twice. Raw sums are scaled by `2 / ((n-1)(n-2))` when `n > 2`.

use crate::adjacency::Adjacency;
use crate::sweep;
use std::collections::VecDeque;
use std::ops::Range;

pub fn betweenness(adj: &Adjacency, parallel: bool) -> Vec<f64> {
    let n = adj.len();
    if n <= 2 {
        return vec![0.0; n];
    }

    let partials = sweep::run(n, parallel, |sources| accumulate(adj, sources));
    let mut scores = vec![0.0; n];
    for partial in partials {
        for (score, value) in scores.iter_mut().zip(partial) {
            *score += value;
        }
    }

    let scale = 2.0 / ((n as f64 - 1.0) * (n as f64 - 2.0));
    for score in &mut scores {
        *score *= scale;
    }
    scores
}

/// Raw dependency sums for one chunk of sources.
fn accumulate(adj: &Adjacency, sources: Range<usize>) -> Vec<f64> {
    let n = adj.len();
    let mut partial = vec![0.0; n];

    let mut sigma = vec![0.0f64; n];
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut delta = vec![0.0f64; n];
    let mut order = Vec::with_capacity(n);
    let mut queue = VecDeque::new();

    for s in sources {
        sigma[s] = 1.0;
        dist[s] = Some(0);
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            let next = dist[v].map_or(0, |d| d + 1);
            for &w in adj.neighbors(v) {
                match dist[w] {
                    None => {
                        dist[w] = Some(next);
                        queue.push_back(w);
                        sigma[w] += sigma[v];
                        preds[w].push(v);
                    }
                    Some(d) if d == next => {
                        sigma[w] += sigma[v];
                        preds[w].push(v);
                    }
                    Some(_) => {}
                }
            }
        }

        for &w in order.iter().rev() {
            let coefficient = (1.0 + delta[w]) / sigma[w];
            for &v in &preds[w] {
                delta[v] += sigma[v] * coefficient;
            }
            if w != s {
                partial[w] += delta[w];
            }
        }

        // Only vertices reached from `s` were touched
        for &v in &order {
            sigma[v] = 0.0;
            dist[v] = None;
            preds[v].clear();
            delta[v] = 0.0;
        }
        order.clear();
    }

    partial
}
