//! Worker pool management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use tracing::warn;

use crate::ranking::SelectorResult;
use crate::signature::SignatureTemplate;

use super::cpu::{CpuWorker, WorkerStats};
use super::partition::SearchSpace;

/// A fixed set of CPU workers splitting one search space.
///
/// Every worker sends exactly one [`SelectorResult`]. The result queue holds
/// one slot per worker so reporting never blocks.
pub struct WorkerPool {
    /// Number of workers
    num_workers: usize,
    /// Worker thread handles (Option to allow taking during join)
    handles: Option<Vec<JoinHandle<()>>>,
    /// Channel receiver for per-worker results
    result_rx: Receiver<SelectorResult>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
    /// Shared statistics
    stats: Arc<WorkerStats>,
    /// Start time
    start_time: Instant,
}

impl WorkerPool {
    /// Spawns `num_workers` workers over `space`, sharing `stop_flag`.
    pub fn new(
        num_workers: usize,
        template: SignatureTemplate,
        space: SearchSpace,
        stop_flag: Arc<AtomicBool>,
    ) -> Self {
        let num_workers = num_workers.max(1);
        let (result_tx, result_rx) = bounded(num_workers);
        let stats = Arc::new(WorkerStats::new());

        let handles = Self::spawn_workers(
            num_workers,
            Arc::new(template),
            space,
            result_tx,
            stop_flag.clone(),
            stats.clone(),
        );

        Self {
            num_workers,
            handles: Some(handles),
            result_rx,
            stop_flag,
            stats,
            start_time: Instant::now(),
        }
    }

    /// Spawns worker threads.
    fn spawn_workers(
        num_workers: usize,
        template: Arc<SignatureTemplate>,
        space: SearchSpace,
        result_tx: Sender<SelectorResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<WorkerStats>,
    ) -> Vec<JoinHandle<()>> {
        space
            .partition(num_workers)
            .into_iter()
            .enumerate()
            .map(|(id, range)| {
                let template = template.clone();
                let result_tx = result_tx.clone();
                let stop_flag = stop_flag.clone();
                let stats = stats.clone();

                thread::Builder::new()
                    .name(format!("selector-worker-{}", id))
                    .spawn(move || {
                        let worker =
                            CpuWorker::new(id, template, range, result_tx, stop_flag, stats);
                        worker.run();
                    })
                    .expect("Failed to spawn worker thread")
            })
            .collect()
    }

    /// Waits for the next worker result.
    ///
    /// Returns `Timeout` if none arrives in time and `Disconnected` once every
    /// worker has exited and all results were taken.
    pub fn wait_for_result(&self, timeout: Duration) -> Result<SelectorResult, RecvTimeoutError> {
        self.result_rx.recv_timeout(timeout)
    }

    /// Signals all workers to stop.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::Release);
    }

    /// Waits for all worker threads to exit.
    pub fn join(mut self) {
        self.join_handles();
    }

    fn join_handles(&mut self) {
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                if handle.join().is_err() {
                    warn!("worker thread panicked");
                }
            }
        }
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns the total candidates hashed across all workers.
    pub fn total_candidates(&self) -> u64 {
        self.stats.total_candidates()
    }

    /// Returns the number of local best improvements across all workers.
    pub fn total_improvements(&self) -> u64 {
        self.stats.total_improvements()
    }

    /// Returns the elapsed time since the pool was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the current hash rate (candidates per second).
    pub fn candidates_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.total_candidates() as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Returns true if the pool has been signaled to stop.
    pub fn is_stopped(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Only stop workers that were not joined normally
        if self.handles.is_some() {
            self.stop();
            self.join_handles();
        }
    }
}
