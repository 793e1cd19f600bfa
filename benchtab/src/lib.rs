#![warn(missing_docs)]
//! # benchtab
//!
//! Render benchmark results as a column-aligned plain text table.
//!
//! benchtab consumes results already collected by a benchmark harness:
//! - **Statistics**: mean, relative standard deviation and iteration count per benchmark
//! - **Time Units**: each benchmark picks ns, us, ms or s for its `time` column
//! - **Sparse Columns**: counters and warmup data appear as columns only when some result has them
//! - **Deterministic Layout**: identical input always yields identical, diffable output
//! - **Injected Output**: lines go to any [`LineSink`], e.g. a `Vec<String>` in tests
//!
//! ## Quick Start
//!
//! ```
//! use benchtab::prelude::*;
//!
//! let results = vec![
//!     BenchmarkResult::new("MySuite", "fast", vec![1_000, 2_000]),
//!     BenchmarkResult::new("MySuite", "slow", vec![1_000_000, 2_000_000])
//!         .with_settings(TimeUnit::Milliseconds),
//! ];
//!
//! let mut reporter = PlainTextReporter::new(Vec::<String>::new());
//! reporter.report(&results).unwrap();
//!
//! let lines = reporter.into_inner();
//! assert_eq!(lines[2], "MySuite.fast 1500.0 ns ±  47.14 %          2");
//! assert_eq!(lines[3], "MySuite.slow    1.5 ms ±  47.14 %          2");
//! ```

// Re-export core types
pub use benchtab_core::{BenchmarkResult, BenchmarkSettings, ParseTimeUnitError, TimeUnit};

// Re-export stats
pub use benchtab_stats::{SummaryStatistics, compute_summary, compute_summary_ns};

// Re-export reporting
pub use benchtab_report::{
    Alignment, BenchmarkReporter, Column, LineSink, PlainTextReporter, ReportError, TableLayout,
    TableSchema, WriterSink, render_table,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkReporter, BenchmarkResult, BenchmarkSettings, LineSink, PlainTextReporter,
        TimeUnit, WriterSink,
    };
}

/// Run the benchtab CLI.
///
/// ```ignore
/// fn main() {
///     benchtab::run().unwrap();
/// }
/// ```
pub use benchtab_cli::run;
