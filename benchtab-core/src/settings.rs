//! Benchmark Settings
//!
//! Per-benchmark options that affect how a result is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display unit for timing columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Nanoseconds (no conversion)
    #[default]
    #[serde(rename = "ns", alias = "nanoseconds")]
    Nanoseconds,
    /// Microseconds
    #[serde(rename = "us", alias = "µs", alias = "microseconds")]
    Microseconds,
    /// Milliseconds
    #[serde(rename = "ms", alias = "milliseconds")]
    Milliseconds,
    /// Seconds
    #[serde(rename = "s", alias = "seconds")]
    Seconds,
}

impl TimeUnit {
    /// All supported units, smallest first
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
    ];

    /// Number of nanoseconds in one unit
    pub fn divisor(self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => 1.0,
            TimeUnit::Microseconds => 1e3,
            TimeUnit::Milliseconds => 1e6,
            TimeUnit::Seconds => 1e9,
        }
    }

    /// Suffix printed after a converted value
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        }
    }

    /// Convert a nanosecond value into this unit
    pub fn from_nanos(self, nanos: f64) -> f64 {
        nanos / self.divisor()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Error returned when a string names no known time unit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown time unit: {0} (expected ns, us, ms or s)")]
pub struct ParseTimeUnitError(pub String);

impl FromStr for TimeUnit {
    type Err = ParseTimeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ns" | "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            "us" | "µs" | "microseconds" => Ok(TimeUnit::Microseconds),
            "ms" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "s" | "seconds" => Ok(TimeUnit::Seconds),
            _ => Err(ParseTimeUnitError(s.to_string())),
        }
    }
}

/// Settings attached to a single benchmark
///
/// Unset options fall back to their defaults when resolved. Settings from
/// several sources are combined with [`BenchmarkSettings::overridden_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BenchmarkSettings {
    /// Unit used for the `time` column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
}

impl BenchmarkSettings {
    /// Settings with every option unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display unit
    pub fn with_time_unit(mut self, unit: TimeUnit) -> Self {
        self.time_unit = Some(unit);
        self
    }

    /// Resolved display unit (nanoseconds when unset)
    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit.unwrap_or_default()
    }

    /// Layer `other` on top of `self`: options set in `other` win
    pub fn overridden_by(&self, other: &BenchmarkSettings) -> BenchmarkSettings {
        BenchmarkSettings {
            time_unit: other.time_unit.or(self.time_unit),
        }
    }
}

impl From<TimeUnit> for BenchmarkSettings {
    fn from(unit: TimeUnit) -> Self {
        Self::new().with_time_unit(unit)
    }
}
