//! Example: Reporting results to stdout
//!
//! Builds a handful of results the way a harness would and prints the table.
//!
//! Run with: `cargo run --example report`

use benchtab::prelude::*;

fn main() {
    let results = vec![
        BenchmarkResult::new("Collections", "vec_push", vec![812, 790, 845, 803])
            .with_warmup(vec![1_020, 950])
            .with_counter("bytes", 4096.0),
        BenchmarkResult::new("Collections", "hashmap_insert", vec![2_310, 2_250, 2_405])
            .with_settings(TimeUnit::Microseconds)
            .with_counter("entries", 128.0),
        BenchmarkResult::new("Io", "read_file", vec![1_250_000, 1_310_000])
            .with_settings(TimeUnit::Milliseconds),
    ];

    let mut reporter = PlainTextReporter::new(WriterSink::new(std::io::stdout().lock()));
    if let Err(e) = reporter.report(&results) {
        eprintln!("Error: {e}");
    }
}
