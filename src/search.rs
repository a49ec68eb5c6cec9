//! Search coordination: validate, spawn, collect, aggregate.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;
use tracing::{info, warn};

use crate::ranking::{Aggregator, SelectorResult};
use crate::signature::{SignatureError, SignatureTemplate};
use crate::worker::{SearchSpace, WorkerPool};

/// Tunables for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Number of worker threads
    pub workers: usize,
    /// Exclusive upper bound on placeholder values
    pub max_index: u64,
    /// How often progress is logged while waiting for workers
    pub report_interval: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            max_index: u64::MAX,
            report_interval: Duration::from_secs(5),
        }
    }
}

impl SearchOptions {
    /// Sets the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the exclusive upper bound on placeholder values.
    pub fn with_max_index(mut self, max_index: u64) -> Self {
        self.max_index = max_index;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid signature: {0}")]
    Signature(#[from] SignatureError),

    #[error("at least one worker is required")]
    NoWorkers,
}

/// A single search run.
///
/// The stop flag can be cloned before [`Search::run`] so another thread
/// (e.g. a Ctrl-C handler) can cancel; workers then report their partial
/// bests and the run still returns an aggregated result.
pub struct Search {
    options: SearchOptions,
    stop_flag: Arc<AtomicBool>,
}

impl Search {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a clone of the stop flag for external cancellation.
    pub fn stop_flag_clone(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Validates `template`, searches it, and returns the global best.
    pub fn run(self, template: &str) -> Result<SelectorResult, SearchError> {
        let template = SignatureTemplate::parse(template)?;
        if self.options.workers == 0 {
            return Err(SearchError::NoWorkers);
        }

        info!(
            template = %template,
            workers = self.options.workers,
            max_index = self.options.max_index,
            "starting selector search"
        );

        let pool = WorkerPool::new(
            self.options.workers,
            template,
            SearchSpace::new(self.options.max_index),
            self.stop_flag,
        );

        let mut aggregator = Aggregator::new();
        while aggregator.received() < pool.num_workers() {
            match pool.wait_for_result(self.options.report_interval) {
                Ok(result) => aggregator.offer(result),
                Err(RecvTimeoutError::Timeout) => {
                    info!(
                        elapsed_secs = pool.elapsed().as_secs(),
                        candidates = pool.total_candidates(),
                        rate = pool.candidates_per_second() as u64,
                        improvements = pool.total_improvements(),
                        "searching"
                    );
                }
                Err(RecvTimeoutError::Disconnected) => {
                    warn!(
                        received = aggregator.received(),
                        expected = pool.num_workers(),
                        "workers exited without reporting"
                    );
                    break;
                }
            }
        }

        let mut result = aggregator.finish();
        result.duration = pool.elapsed();
        result.candidates = pool.total_candidates();
        let stopped = pool.is_stopped();
        pool.join();

        info!(
            best = %result,
            candidates = result.candidates,
            elapsed_ms = result.duration.as_millis() as u64,
            stopped,
            "search complete"
        );

        Ok(result)
    }
}

/// Runs one search with `options`.
pub fn search(template: &str, options: &SearchOptions) -> Result<SelectorResult, SearchError> {
    Search::new(options.clone()).run(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    fn small(workers: usize) -> SearchOptions {
        SearchOptions::default()
            .with_workers(workers)
            .with_max_index(2000)
    }

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert!(options.workers >= 1);
        assert_eq!(options.max_index, u64::MAX);
    }

    #[test]
    fn test_rejects_before_search() {
        assert_eq!(
            search("mint%d(uint7)", &small(1)),
            Err(SearchError::Signature(SignatureError::OutOfBoundsWidth {
                token: "uint7".into(),
                min: 1,
                max: 256,
                step: 8,
            }))
        );
    }

    #[test]
    fn test_zero_workers() {
        assert_eq!(
            search("mint(uint256)", &small(0)),
            Err(SearchError::NoWorkers)
        );
    }

    #[test]
    fn test_stamps_metadata() {
        let result = search("mint%d(uint256,address)", &small(2)).unwrap();
        assert_eq!(result.name, "mint252(uint256,address)");
        assert_eq!(result.candidates, 2000);
    }

    #[test]
    fn test_cancelled_before_start() {
        let search = Search::new(small(2));
        search.stop_flag_clone().store(true, Ordering::Relaxed);
        let result = search.run("mint%d(uint256,address)").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.candidates, 0);
    }
}
