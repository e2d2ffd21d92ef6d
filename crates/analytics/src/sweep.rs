//! Per-source work split into fixed chunks.
//!
//! Chunks are the same whether they run on the rayon pool or in a plain
//! loop, and results come back in source order, so floating-point merges
//! done by the caller are identical in both modes.

use rayon::prelude::*;
use std::ops::Range;

pub(crate) const CHUNK_SIZE: usize = 64;

pub(crate) fn chunks(n: usize) -> Vec<Range<usize>> {
    (0..n)
        .step_by(CHUNK_SIZE)
        .map(|start| start..(start + CHUNK_SIZE).min(n))
        .collect()
}

/// Run `work` over every chunk of `0..n`, returning chunk results in order.
pub(crate) fn run<T, F>(n: usize, parallel: bool, work: F) -> Vec<T>
where
    T: Send,
    F: Fn(Range<usize>) -> T + Sync + Send,
{
    let ranges = chunks(n);
    if parallel && ranges.len() > 1 {
        ranges.into_par_iter().map(&work).collect()
    } else {
        ranges.into_iter().map(&work).collect()
    }
}
