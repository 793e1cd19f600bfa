//! Table Schema
//!
//! The ordered column set of one report. Mandatory columns come first, then
//! one column per counter name in first-seen order, then `warmup` when any
//! result carries warmup samples.

use benchtab_core::BenchmarkResult;
use fxhash::FxHashSet;

/// Horizontal alignment of data cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Padded on the right
    Left,
    /// Padded on the left
    Right,
}

/// A table column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// `<suite>.<benchmark>`
    Name,
    /// Mean time in the result's unit
    Time,
    /// Relative standard deviation
    Std,
    /// Number of timed iterations
    Iterations,
    /// User-defined counter
    Counter(String),
    /// Total warmup time in nanoseconds
    Warmup,
}

impl Column {
    /// Header label
    pub fn label(&self) -> &str {
        match self {
            Column::Name => "name",
            Column::Time => "time",
            Column::Std => "std",
            Column::Iterations => "iterations",
            Column::Counter(name) => name,
            Column::Warmup => "warmup",
        }
    }

    /// Alignment of data cells in this column
    pub fn alignment(&self) -> Alignment {
        match self {
            Column::Name => Alignment::Left,
            _ => Alignment::Right,
        }
    }
}

/// Ordered set of columns for a batch of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    /// Derive the column set from a batch of results
    pub fn from_results(results: &[BenchmarkResult]) -> Self {
        let mut columns = vec![Column::Name, Column::Time, Column::Std, Column::Iterations];

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for result in results {
            for name in result.counters.keys() {
                if seen.insert(name.as_str()) {
                    columns.push(Column::Counter(name.clone()));
                }
            }
        }

        if results.iter().any(BenchmarkResult::has_warmup) {
            columns.push(Column::Warmup);
        }

        Self { columns }
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Counter names in display order
    pub fn counter_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|c| match c {
            Column::Counter(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Whether the `warmup` column is present
    pub fn has_warmup(&self) -> bool {
        self.columns.contains(&Column::Warmup)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false: mandatory columns are present even for empty input
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
