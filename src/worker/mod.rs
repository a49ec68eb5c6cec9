//! Worker pool for parallel selector search.
//!
//! This module provides:
//! - Partitioning of the index space into contiguous per-worker ranges
//! - Multi-threaded CPU workers sharing a stop flag
//! - A bounded result queue with one slot per worker

mod cpu;
mod partition;
mod pool;

pub use cpu::{CpuWorker, WorkerStats};
pub use partition::SearchSpace;
pub use pool::WorkerPool;
