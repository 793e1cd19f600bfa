//! Result Input
//!
//! Reads results collected by an external harness. The input is a JSON array
//! of `BenchmarkResult` objects; only `suite_name`, `benchmark_name` and
//! `measurements` are required.

use benchtab_core::{BenchmarkResult, BenchmarkSettings};
use std::io::Read;
use std::path::Path;

/// Parse a JSON array of results
pub fn parse_results(text: &str) -> anyhow::Result<Vec<BenchmarkResult>> {
    serde_json::from_str(text).map_err(|e| anyhow::anyhow!("Invalid results JSON: {}", e))
}

/// Read results from a file, or from stdin when `path` is `None` or `-`
pub fn load_results(path: Option<&Path>) -> anyhow::Result<Vec<BenchmarkResult>> {
    let text = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", p.display(), e))?,
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
            text
        }
    };

    let results = parse_results(&text)?;
    tracing::debug!(count = results.len(), "Loaded benchmark results");
    Ok(results)
}

/// Resolve each result's settings against configured defaults and overrides
///
/// Precedence, lowest first: `defaults`, the result's own settings, `overrides`.
pub fn apply_settings(
    results: Vec<BenchmarkResult>,
    defaults: &BenchmarkSettings,
    overrides: &BenchmarkSettings,
) -> Vec<BenchmarkResult> {
    results
        .into_iter()
        .map(|mut result| {
            result.settings = defaults
                .overridden_by(&result.settings)
                .overridden_by(overrides);
            result
        })
        .collect()
}
