#![warn(missing_docs)]
//! benchtab Core - Data Model
//!
//! Types exchanged between a benchmark harness and the reporters:
//! - `BenchmarkResult` with raw timing samples, warmup samples and counters
//! - `BenchmarkSettings` holding per-benchmark rendering options
//! - `TimeUnit`, the closed set of display units

mod result;
mod settings;

pub use result::BenchmarkResult;
pub use settings::{BenchmarkSettings, ParseTimeUnitError, TimeUnit};
