//! Cell Formatting
//!
//! Turns statistics into the exact strings placed in table cells:
//! - Mean time converted to the benchmark's unit (`1500.0 ns`, `0.123456789 s`)
//! - Relative standard deviation (`±  47.14 %`)
//! - Counter values and total warmup time with one fractional digit

use benchtab_core::TimeUnit;

/// Shortest round-trippable decimal with at least one fractional digit
///
/// `1500.0` prints as `1500.0`, `123.456789` keeps every digit it needs.
pub fn format_decimal(value: f64) -> String {
    let text = value.to_string();
    if !value.is_finite() || text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

/// Mean time in nanoseconds, rendered in `unit` with its suffix
pub fn format_time(mean_ns: f64, unit: TimeUnit) -> String {
    format!("{} {}", format_decimal(unit.from_nanos(mean_ns)), unit.suffix())
}

/// Relative standard deviation in percent
pub fn format_relative_std_dev(percent: f64) -> String {
    format!("± {percent:6.2} %")
}

/// Counter value
pub fn format_counter(value: f64) -> String {
    format!("{value:.1}")
}

/// Total warmup time, always in nanoseconds
pub fn format_warmup(total_ns: f64) -> String {
    format!("{total_ns:.1} ns")
}
