#![warn(missing_docs)]
//! benchtab Statistical Engine
//!
//! Reduces raw benchmark samples into the statistics shown in a report:
//! mean, standard deviation and sample count, plus the relative standard
//! deviation derived from them.

mod summary;

pub use summary::{SummaryStatistics, compute_summary};

/// Compute summary statistics for integer nanosecond samples
///
/// Convenience over [`compute_summary`] for measurements recorded as `u64`.
pub fn compute_summary_ns(samples: &[u64]) -> SummaryStatistics {
    let samples: Vec<f64> = samples.iter().map(|&s| s as f64).collect();
    compute_summary(&samples)
}
