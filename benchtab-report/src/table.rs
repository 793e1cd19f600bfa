//! Plain Text Table
//!
//! Renders a batch of results as one aligned table.
//!
//! ## Pipeline
//!
//! ```text
//! &[BenchmarkResult]
//!        │
//!        ▼
//! ┌─────────────┐
//! │   schema    │  Ordered column set (counters, warmup)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │    cells    │  Every cell formatted to its final string
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   widths    │  Max of header label and cells per column
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │    lines    │  Header, separator, one row per result
//! └─────────────┘
//! ```

use crate::formatting::{
    format_counter, format_relative_std_dev, format_time, format_warmup,
};
use crate::schema::{Alignment, Column, TableSchema};
use crate::sink::LineSink;
use benchtab_core::BenchmarkResult;
use benchtab_stats::compute_summary_ns;
use std::io;
use thiserror::Error;

/// Errors raised while reporting
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The sink rejected a line.
    #[error("Failed to write report line: {0}")]
    Sink(#[from] io::Error),
}

/// Something that presents benchmark results
pub trait BenchmarkReporter {
    /// Report a batch of results in the given order
    fn report(&mut self, results: &[BenchmarkResult]) -> Result<(), ReportError>;
}

/// Fully formatted table, ready to be written line by line
#[derive(Debug, Clone)]
pub struct TableLayout {
    schema: TableSchema,
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl TableLayout {
    /// Format every cell and measure every column
    pub fn build(results: &[BenchmarkResult]) -> Self {
        let schema = TableSchema::from_results(results);
        let rows: Vec<Vec<String>> = results.iter().map(|r| format_row(r, &schema)).collect();

        let widths = schema
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                rows.iter()
                    .map(|row| display_width(&row[idx]))
                    .fold(display_width(column.label()), usize::max)
            })
            .collect();

        tracing::debug!(
            columns = schema.len(),
            rows = rows.len(),
            "Built benchmark table layout"
        );

        Self {
            schema,
            widths,
            rows,
        }
    }

    /// Column set of this table
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Display width of each column, in schema order
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Header line; labels are left-aligned within their columns
    pub fn header(&self) -> String {
        let labels = self.schema.columns().iter().map(Column::label);
        self.join(labels, |_| Alignment::Left)
    }

    /// Dash run as long as the header line
    pub fn separator(&self) -> String {
        "-".repeat(display_width(&self.header()))
    }

    /// Data rows in input order
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| {
            let cells = row.iter().map(String::as_str);
            self.join(cells, Column::alignment)
        })
    }

    /// Header, separator and rows
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.header());
        lines.push(self.separator());
        lines.extend(self.rows());
        lines
    }

    fn join<'a>(
        &self,
        cells: impl Iterator<Item = &'a str>,
        alignment: impl Fn(&Column) -> Alignment,
    ) -> String {
        cells
            .zip(self.schema.columns())
            .zip(&self.widths)
            .map(|((cell, column), &width)| match alignment(column) {
                Alignment::Left => format!("{cell:<width$}"),
                Alignment::Right => format!("{cell:>width$}"),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Format one result against the schema; absent values become empty cells
fn format_row(result: &BenchmarkResult, schema: &TableSchema) -> Vec<String> {
    let summary = compute_summary_ns(&result.measurements);
    let unit = result.settings.time_unit();

    schema
        .columns()
        .iter()
        .map(|column| match column {
            Column::Name => result.display_name(),
            Column::Time => format_time(summary.mean, unit),
            Column::Std => format_relative_std_dev(summary.relative_std_dev()),
            Column::Iterations => summary.sample_count.to_string(),
            Column::Counter(name) => result
                .counters
                .get(name)
                .map(|&value| format_counter(value))
                .unwrap_or_default(),
            Column::Warmup => {
                if result.has_warmup() {
                    let total: f64 = result.warmup_measurements.iter().map(|&s| s as f64).sum();
                    format_warmup(total)
                } else {
                    String::new()
                }
            }
        })
        .collect()
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Render results as table lines without writing them anywhere
pub fn render_table(results: &[BenchmarkResult]) -> Vec<String> {
    TableLayout::build(results).lines()
}

/// Reporter writing an aligned plain text table to a [`LineSink`]
#[derive(Debug)]
pub struct PlainTextReporter<S> {
    sink: S,
}

impl<S: LineSink> PlainTextReporter<S> {
    /// Create a reporter writing to `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Borrow the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Unwrap the sink
    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: LineSink> BenchmarkReporter for PlainTextReporter<S> {
    fn report(&mut self, results: &[BenchmarkResult]) -> Result<(), ReportError> {
        for line in render_table(results) {
            tracing::trace!(line = %line, "Writing report line");
            self.sink.write_line(&line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchtab_core::TimeUnit;

    fn fast_and_slow() -> Vec<BenchmarkResult> {
        vec![
            BenchmarkResult::new("MySuite", "fast", vec![1_000, 2_000]),
            BenchmarkResult::new("MySuite", "slow", vec![1_000_000, 2_000_000]),
        ]
    }

    #[test]
    fn test_widths_cover_labels_and_cells() {
        let layout = TableLayout::build(&fast_and_slow());

        // "MySuite.fast", "1500000.0 ns", "±  47.14 %", "iterations"
        assert_eq!(layout.widths(), [12, 12, 10, 10]);
    }

    #[test]
    fn test_basic_table() {
        let lines = render_table(&fast_and_slow());

        assert_eq!(
            lines,
            [
                "name         time         std        iterations",
                "-----------------------------------------------",
                "MySuite.fast    1500.0 ns ±  47.14 %          2",
                "MySuite.slow 1500000.0 ns ±  47.14 %          2",
            ]
        );
    }

    #[test]
    fn test_empty_input_has_header_and_separator() {
        let lines = render_table(&[]);

        // Column widths fall back to the labels
        assert_eq!(
            lines,
            [
                "name time std iterations",
                "------------------------"
            ]
        );
    }

    #[test]
    fn test_blank_counter_cell() {
        let mut results = fast_and_slow();
        results[0] = results[0].clone().with_counter("foo", 7.0);
        let lines = render_table(&results);

        assert_eq!(lines[0], "name         time         std        iterations foo");
        assert_eq!(lines[2], "MySuite.fast    1500.0 ns ±  47.14 %          2 7.0");
        assert_eq!(lines[3], "MySuite.slow 1500000.0 ns ±  47.14 %          2    ");
    }

    #[test]
    fn test_zero_iterations_row() {
        let results = vec![BenchmarkResult::new("S", "empty", vec![])];
        let lines = render_table(&results);

        assert_eq!(lines[2], "S.empty 0.0 ns ±   0.00 %          0");
    }

    #[test]
    fn test_warmup_total_near_u64_max() {
        let results = vec![BenchmarkResult::new("S", "w", vec![1]).with_warmup(vec![u64::MAX, 1])];
        let lines = render_table(&results);

        assert!(lines[0].trim_end().ends_with("warmup"));
        assert!(lines[2].ends_with("18446744073709551616.0 ns"));
    }

    #[test]
    fn test_all_lines_same_width() {
        let results = vec![
            BenchmarkResult::new("A", "x", vec![5, 7, 9])
                .with_counter("bytes", 1024.0)
                .with_settings(TimeUnit::Microseconds),
            BenchmarkResult::new("LongerSuite", "y", vec![1])
                .with_warmup(vec![1, 2])
                .with_counter("ops", 3.5),
        ];
        let lines = render_table(&results);
        let width = lines[0].chars().count();

        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_reporter_writes_to_sink() {
        let mut reporter = PlainTextReporter::new(Vec::<String>::new());
        reporter.report(&fast_and_slow()).unwrap();

        let lines = reporter.into_inner();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines, render_table(&fast_and_slow()));
    }

    #[test]
    fn test_sink_error_propagates() {
        struct ClosedSink;

        impl LineSink for ClosedSink {
            fn write_line(&mut self, _line: &str) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let mut reporter = PlainTextReporter::new(ClosedSink);
        let err = reporter.report(&fast_and_slow()).unwrap_err();

        assert!(matches!(err, ReportError::Sink(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }
}
