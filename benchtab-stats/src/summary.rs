//! Summary Statistics
//!
//! Reduces a sequence of raw samples to the figures shown in a report row:
//! - Mean (arithmetic average)
//! - Standard deviation (Bessel-corrected)
//! - Sample count
//!
//! Degenerate inputs are defined rather than rejected: an empty sequence
//! yields all zeros and a single sample has zero deviation.

/// Summary statistics for one measurement sequence
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryStatistics {
    /// Arithmetic mean of the samples (0 when empty)
    pub mean: f64,
    /// Sample standard deviation (0 for fewer than two samples)
    pub std_dev: f64,
    /// Number of samples
    pub sample_count: usize,
}

/// Compute summary statistics for a sequence of samples
///
/// # Examples
///
/// ```
/// # use benchtab_stats::compute_summary;
/// let summary = compute_summary(&[1000.0, 2000.0]);
/// assert_eq!(summary.mean, 1500.0);
/// assert_eq!(summary.sample_count, 2);
/// ```
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    let n = samples.len();
    let mean = samples.iter().sum::<f64>() / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    SummaryStatistics {
        mean,
        std_dev,
        sample_count: n,
    }
}

impl SummaryStatistics {
    /// Relative standard deviation as a percentage of the mean
    ///
    /// Returns 0 when the mean is 0.
    pub fn relative_std_dev(&self) -> f64 {
        if self.mean == 0.0 {
            0.0
        } else {
            (self.std_dev / self.mean) * 100.0
        }
    }

    /// Whether any samples were summarized
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let summary = compute_summary(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert!((summary.mean - 3.0).abs() < f64::EPSILON);
        assert_eq!(summary.sample_count, 5);
        // sqrt(10 / 4)
        assert!((summary.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_relative_std_dev_two_samples() {
        let summary = compute_summary(&[1000.0, 2000.0]);

        assert!((summary.mean - 1500.0).abs() < f64::EPSILON);
        assert!((summary.relative_std_dev() - 47.140452).abs() < 1e-4);
        assert_eq!(format!("{:.2}", summary.relative_std_dev()), "47.14");
    }

    #[test]
    fn test_scale_invariance() {
        let small = compute_summary(&[1000.0, 2000.0]);
        let large = compute_summary(&[1_000_000.0, 2_000_000.0]);

        assert!((small.relative_std_dev() - large.relative_std_dev()).abs() < 1e-9);
    }

    #[test]
    fn test_constant_samples() {
        let summary = compute_summary(&[100.0, 100.0, 100.0, 100.0, 100.0]);

        // Zero variance = zero relative deviation
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.relative_std_dev(), 0.0);
    }

    #[test]
    fn test_single_sample() {
        let summary = compute_summary(&[123_456_789.0]);

        assert_eq!(summary.mean, 123_456_789.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.relative_std_dev(), 0.0);
        assert_eq!(summary.sample_count, 1);
    }

    #[test]
    fn test_empty_samples() {
        let summary = compute_summary(&[]);

        assert!(summary.is_empty());
        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.relative_std_dev(), 0.0);
    }

    #[test]
    fn test_all_zero_samples() {
        let summary = compute_summary(&[0.0, 0.0, 0.0]);

        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.relative_std_dev(), 0.0);
        assert_eq!(summary.sample_count, 3);
    }

    #[test]
    fn test_count_matches_length() {
        for len in 1..20 {
            let samples: Vec<f64> = (0..len).map(|x| x as f64 * 3.0).collect();
            assert_eq!(compute_summary(&samples).sample_count, len);
        }
    }
}
