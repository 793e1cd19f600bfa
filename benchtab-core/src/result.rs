//! Benchmark Results
//!
//! The record handed over by a benchmark harness once a benchmark completes.

use crate::settings::BenchmarkSettings;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One completed benchmark's raw data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Benchmark identifier, unique within its suite
    pub benchmark_name: String,
    /// Suite grouping related benchmarks
    pub suite_name: String,
    /// Rendering settings
    #[serde(default)]
    pub settings: BenchmarkSettings,
    /// Timed samples in nanoseconds, one per iteration
    #[serde(default)]
    pub measurements: Vec<u64>,
    /// Samples in nanoseconds collected before timing started
    #[serde(default)]
    pub warmup_measurements: Vec<u64>,
    /// User-defined numeric metrics, in insertion order
    #[serde(default)]
    pub counters: IndexMap<String, f64>,
}

impl BenchmarkResult {
    /// Create a result with default settings, no warmup and no counters
    pub fn new(
        suite_name: impl Into<String>,
        benchmark_name: impl Into<String>,
        measurements: Vec<u64>,
    ) -> Self {
        Self {
            benchmark_name: benchmark_name.into(),
            suite_name: suite_name.into(),
            settings: BenchmarkSettings::default(),
            measurements,
            warmup_measurements: Vec::new(),
            counters: IndexMap::new(),
        }
    }

    /// Replace the settings
    pub fn with_settings(mut self, settings: impl Into<BenchmarkSettings>) -> Self {
        self.settings = settings.into();
        self
    }

    /// Attach warmup samples
    pub fn with_warmup(mut self, warmup_measurements: Vec<u64>) -> Self {
        self.warmup_measurements = warmup_measurements;
        self
    }

    /// Attach a counter; replacing a value keeps its original position
    pub fn with_counter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.counters.insert(name.into(), value);
        self
    }

    /// `"<suite>.<benchmark>"`
    pub fn display_name(&self) -> String {
        format!("{}.{}", self.suite_name, self.benchmark_name)
    }

    /// Number of timed iterations
    pub fn iterations(&self) -> usize {
        self.measurements.len()
    }

    /// Whether warmup samples were recorded
    pub fn has_warmup(&self) -> bool {
        !self.warmup_measurements.is_empty()
    }
}
