//! Sequential and parallel reductions over filtered curve views.

pub mod chunk;
pub mod config;
pub mod sum;

pub use chunk::chunk_ranges;
pub use config::ReduceConfig;
pub use sum::{compare_sums, par_sum_by, sum_by, sum_parallel, sum_sequential, RadiusSums};
