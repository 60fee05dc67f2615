//! Radius sums over sorted views.
//!
//! The parallel sum fans out one rayon task per planned chunk and folds the
//! partial sums left to right on the calling thread, in chunk order. For a
//! given view and worker count the result is therefore bit-reproducible,
//! though it may differ in the last bits from [`sum_sequential`] because the
//! additions are grouped differently.

use std::sync::Arc;
use std::time::Instant;

use crv_core::Tolerance;
use crv_geometry::Radial;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chunk::chunk_ranges;
use crate::config::ReduceConfig;

/// Left-to-right sum of `key` over `items`, starting from `0.0`.
pub fn sum_by<T, F>(items: &[T], key: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().fold(0.0, |acc, item| acc + key(item))
}

/// Chunked parallel sum of `key` over `items`.
///
/// A panic inside `key` propagates out of this call once all chunks have
/// been joined; a partial total is never returned.
pub fn par_sum_by<T, F>(items: &[T], workers: usize, key: F) -> f64
where
    T: Sync,
    F: Fn(&T) -> f64 + Sync,
{
    let ranges = chunk_ranges(items.len(), workers);
    let partials: Vec<f64> = ranges
        .par_iter()
        .map(|range| sum_by(&items[range.clone()], &key))
        .collect();
    let total = partials.iter().fold(0.0, |acc, partial| acc + partial);
    debug!(
        items = items.len(),
        workers,
        chunks = partials.len(),
        total,
        "parallel sum complete"
    );
    total
}

pub fn sum_sequential<C: Radial>(view: &[Arc<C>]) -> f64 {
    sum_by(view, |curve| curve.radius())
}

pub fn sum_parallel<C: Radial + Send + Sync>(view: &[Arc<C>], workers: usize) -> f64 {
    par_sum_by(view, workers, |curve| curve.radius())
}

/// Both radius sums for one view, with wall-clock timings, for
/// side-by-side reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusSums {
    pub sequential: f64,
    pub parallel: f64,
    pub chunks: usize,
    pub sequential_us: u128,
    pub parallel_us: u128,
}

impl RadiusSums {
    pub fn agree(&self, tolerance: Tolerance) -> bool {
        tolerance.relative_eq(self.sequential, self.parallel)
    }
}

/// Run and time both sums over `view`, sequential first.
pub fn compare_sums<C>(view: &[Arc<C>], config: &ReduceConfig) -> RadiusSums
where
    C: Radial + Send + Sync,
{
    let start = Instant::now();
    let sequential = sum_sequential(view);
    let sequential_us = start.elapsed().as_micros();

    let start = Instant::now();
    let parallel = sum_parallel(view, config.workers);
    let parallel_us = start.elapsed().as_micros();

    RadiusSums {
        sequential,
        parallel,
        chunks: chunk_ranges(view.len(), config.workers).len(),
        sequential_us,
        parallel_us,
    }
}
