#![warn(missing_docs)]
//! benchtab Report - Plain Text Tables
//!
//! Renders benchmark results as a single column-aligned table:
//! - Column schema derived once per report (counters in first-seen order, warmup)
//! - Cell formatting with per-benchmark time units
//! - Width measurement and alignment
//! - Output through an injected [`LineSink`]

mod formatting;
mod schema;
mod sink;
mod table;

pub use formatting::{
    format_counter, format_decimal, format_relative_std_dev, format_time, format_warmup,
};
pub use schema::{Alignment, Column, TableSchema};
pub use sink::{LineSink, WriterSink};
pub use table::{BenchmarkReporter, PlainTextReporter, ReportError, TableLayout, render_table};
