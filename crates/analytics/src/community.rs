//! Label-propagation communities.
//!
//! Every vertex starts in its own community. Passes visit vertices in
//! order and move a vertex to the most common neighbor label when that
//! label is strictly more common than its current one, updating in place
//! so later vertices in the same pass see the move. Propagation stops
//! after a quiet pass or at the pass ceiling, whichever comes first.

use crate::adjacency::Adjacency;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Communities {
    /// Dense community ids, numbered by first appearance in vertex order
    pub labels: Vec<usize>,
    pub count: usize,
    pub passes: usize,
    pub converged: bool,
}

/// `max(1, min(50, ceil(10 ln n)))`
pub fn default_pass_cap(n: usize) -> usize {
    if n < 2 {
        return 1;
    }
    let cap = (10.0 * (n as f64).ln()).ceil() as usize;
    cap.clamp(1, 50)
}

pub fn label_propagation(adj: &Adjacency, max_passes: Option<usize>) -> Communities {
    let n = adj.len();
    let cap = max_passes.unwrap_or_else(|| default_pass_cap(n));
    let mut labels: Vec<usize> = (0..n).collect();
    let mut passes = 0;
    let mut converged = n == 0;
    let mut tally: BTreeMap<usize, usize> = BTreeMap::new();

    while !converged && passes < cap {
        passes += 1;
        let mut moved = 0usize;

        for v in 0..n {
            tally.clear();
            for &u in adj.neighbors(v) {
                *tally.entry(labels[u]).or_insert(0) += 1;
            }

            let current = labels[v];
            let mut best = (current, tally.get(&current).copied().unwrap_or(0));
            // Ascending label order, so ties resolve to the lowest label
            for (&label, &count) in &tally {
                if count > best.1 {
                    best = (label, count);
                }
            }

            if best.0 != current {
                labels[v] = best.0;
                moved += 1;
            }
        }

        log::debug!("Label propagation pass {passes}: {moved} moves");
        converged = moved == 0;
    }

    let (labels, count) = renumber(&labels);
    Communities {
        labels,
        count,
        passes,
        converged,
    }
}

fn renumber(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut dense: HashMap<usize, usize> = HashMap::new();
    let renumbered = labels
        .iter()
        .map(|label| {
            let next = dense.len();
            *dense.entry(*label).or_insert(next)
        })
        .collect();
    (renumbered, dense.len())
}
