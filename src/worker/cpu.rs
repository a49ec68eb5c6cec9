//! CPU worker scanning one contiguous index range.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::crypto::Selector;
use crate::ranking::{Score, SelectorResult};
use crate::signature::SignatureTemplate;

/// Counters shared by all workers of one search.
#[derive(Debug, Default)]
pub struct WorkerStats {
    /// Candidates hashed
    pub candidates_tried: AtomicU64,
    /// Local best replacements across all workers
    pub improvements: AtomicU64,
}

impl WorkerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_candidates(&self) -> u64 {
        self.candidates_tried.load(Ordering::Relaxed)
    }

    pub fn total_improvements(&self) -> u64 {
        self.improvements.load(Ordering::Relaxed)
    }
}

/// A CPU worker that formats, hashes and ranks candidates in its range.
pub struct CpuWorker {
    id: usize,
    template: Arc<SignatureTemplate>,
    range: Range<u64>,
    result_tx: Sender<SelectorResult>,
    stop_flag: Arc<AtomicBool>,
    stats: Arc<WorkerStats>,
}

impl CpuWorker {
    pub fn new(
        id: usize,
        template: Arc<SignatureTemplate>,
        range: Range<u64>,
        result_tx: Sender<SelectorResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
    ) -> Self {
        Self {
            id,
            template,
            range,
            result_tx,
            stop_flag,
            stats,
        }
    }

    /// Scans the range and reports exactly one result, possibly the empty sentinel.
    pub fn run(&self) {
        let best = self.scan();
        // The receiver outlives every worker unless the pool was dropped early.
        let _ = self.result_tx.send(best);
    }

    /// Visits indices in increasing order until the range is exhausted,
    /// the stop flag is observed, or a golden selector is found.
    pub fn scan(&self) -> SelectorResult {
        // Stats are flushed in batches to reduce atomic contention
        const BATCH_SIZE: u64 = 1000;

        debug!(
            worker = self.id,
            start = self.range.start,
            end = self.range.end,
            "worker started"
        );

        let mut best = SelectorResult::default();
        let mut best_score = Score::default();
        let mut candidate = String::with_capacity(64);
        let mut pending = 0u64;

        for index in self.range.clone() {
            if self.stop_flag.load(Ordering::Relaxed) {
                debug!(worker = self.id, index, "stop signal observed");
                break;
            }

            self.template.write_candidate(index, &mut candidate);
            let selector = Selector::of(&candidate);
            let score = Score::of(&selector);

            pending += 1;
            if pending == BATCH_SIZE {
                self.stats
                    .candidates_tried
                    .fetch_add(BATCH_SIZE, Ordering::Relaxed);
                pending = 0;
            }

            if !score.improves_on(best_score) {
                continue;
            }

            best_score = score;
            best = SelectorResult::new(candidate.clone(), &selector, index);
            self.stats.improvements.fetch_add(1, Ordering::Relaxed);
            debug!(worker = self.id, name = %best.name, selector = %selector, "new local best");

            if score.is_golden() {
                if !self.stop_flag.swap(true, Ordering::AcqRel) {
                    info!(
                        worker = self.id,
                        name = %best.name,
                        selector = %selector,
                        "golden selector found, stopping workers"
                    );
                }
                break;
            }
        }

        self.stats
            .candidates_tried
            .fetch_add(pending, Ordering::Relaxed);
        debug!(worker = self.id, best = %best, "worker finished");
        best
    }

    pub fn id(&self) -> usize {
        self.id
    }
}
