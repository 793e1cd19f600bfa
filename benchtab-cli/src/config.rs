//! Configuration loading from benchtab.toml
//!
//! Configuration can be specified in a `benchtab.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use benchtab_core::{BenchmarkSettings, TimeUnit};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for by [`BenchtabConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "benchtab.toml";

/// benchtab configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchtabConfig {
    /// Report rendering configuration
    #[serde(default)]
    pub report: ReportConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Report rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Unit for results that do not choose one: "ns", "us", "ms" or "s"
    #[serde(default)]
    pub time_unit: Option<TimeUnit>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Write the table to this file instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl BenchtabConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid configuration in {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(dir)
    }

    /// Walk up from `dir` looking for `benchtab.toml`
    ///
    /// A file that exists but fails to parse is logged and ignored.
    pub fn discover_from(mut dir: PathBuf) -> Option<Self> {
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "Loading configuration");
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!("Ignoring configuration: {e}");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Settings applied underneath every result's own settings
    pub fn default_settings(&self) -> BenchmarkSettings {
        BenchmarkSettings {
            time_unit: self.report.time_unit,
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# benchtab Configuration

[report]
# Unit for benchmarks that do not set one: ns, us, ms or s
time_unit = "ns"

[output]
# Write the table to a file instead of stdout (uncomment to enable)
# path = "target/benchtab/report.txt"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchtabConfig::default();
        assert_eq!(config.report.time_unit, None);
        assert_eq!(config.output.path, None);
        assert_eq!(config.default_settings(), BenchmarkSettings::default());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [report]
            time_unit = "ms"
        "#;

        let config: BenchtabConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.report.time_unit, Some(TimeUnit::Milliseconds));
        // Defaults should still apply
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let toml_str = r#"
            [report]
            time_unit = "minutes"
        "#;
        assert!(toml::from_str::<BenchtabConfig>(toml_str).is_err());
    }

    #[test]
    fn test_default_toml_parses() {
        let default_toml = BenchtabConfig::default_toml();
        let config: BenchtabConfig = toml::from_str(&default_toml).unwrap();
        assert_eq!(config.report.time_unit, Some(TimeUnit::Nanoseconds));
    }

    #[test]
    fn test_discover_walks_up() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[report]\ntime_unit = \"us\"\n",
        )
        .unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = BenchtabConfig::discover_from(nested).unwrap();
        assert_eq!(config.report.time_unit, Some(TimeUnit::Microseconds));
    }

    #[test]
    fn test_discover_ignores_broken_file() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join(CONFIG_FILE_NAME), "[report\n").unwrap();

        assert!(BenchtabConfig::discover_from(root.path().to_path_buf()).is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let root = tempfile::tempdir().unwrap();
        let err = BenchtabConfig::load(root.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
