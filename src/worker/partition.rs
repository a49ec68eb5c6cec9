//! Division of the placeholder index space between workers.

use std::ops::Range;

/// Half-open range `[0, max)` of placeholder values a search may try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSpace {
    max: u64,
}

impl SearchSpace {
    pub const fn new(max: u64) -> Self {
        Self { max }
    }

    /// The whole `u64` index space.
    pub const fn full() -> Self {
        Self::new(u64::MAX)
    }

    /// Exclusive upper bound.
    pub const fn max(&self) -> u64 {
        self.max
    }

    /// Number of indices each of `workers` workers receives.
    pub fn share(&self, workers: usize) -> u64 {
        self.max / workers.max(1) as u64
    }

    /// Range assigned to `worker` out of `workers`.
    ///
    /// The trailing `max % workers` indices are left unassigned.
    pub fn range_for(&self, worker: usize, workers: usize) -> Range<u64> {
        let tries = self.share(workers);
        let start = worker as u64 * tries;
        start..start + tries
    }

    /// Contiguous, disjoint ranges, one per worker, in worker order.
    pub fn partition(&self, workers: usize) -> Vec<Range<u64>> {
        (0..workers.max(1))
            .map(|worker| self.range_for(worker, workers))
            .collect()
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self::full()
    }
}
