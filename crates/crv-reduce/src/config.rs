use std::num::NonZeroUsize;
use std::thread;

use serde::{Deserialize, Serialize};

/// How a parallel reduction partitions its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceConfig {
    /// Number of chunks to plan. Always at least 1.
    pub workers: usize,
}

impl ReduceConfig {
    /// A config with `workers` chunks; zero is clamped to one.
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// One chunk per hardware thread, or a single chunk if that is unknown.
    pub fn from_hardware() -> Self {
        let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
        Self::new(workers)
    }
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self::from_hardware()
    }
}
