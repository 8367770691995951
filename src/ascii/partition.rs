//! Static row striping across conversion workers.

use std::thread;

/// Number of workers to use: available hardware parallelism, or 1 if unknown.
pub fn worker_count() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Worker that owns output row `row`.
#[inline]
pub fn row_owner(row: usize, workers: usize) -> usize {
    row % workers.max(1)
}

/// Rows owned by `worker`: `worker, worker + workers, ...` below `rows`.
pub fn stripe(rows: usize, worker: usize, workers: usize) -> impl Iterator<Item = usize> {
    (worker..rows).step_by(workers.max(1))
}
