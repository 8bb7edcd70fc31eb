//! Serializable batch analysis configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unique identifier for an analysis run (content-addressable hash).
pub type AnalysisId = String;

/// Errors from loading or validating a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("group count {groups} < minimum 2")]
    TooFewGroups { groups: usize },
}

/// Serializable configuration for a batch drift analysis.
///
/// This struct captures all parameters needed to reproduce a run:
/// - The two CSV files being compared
/// - The columns to score (empty means every shared numeric column)
/// - The quantile group count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// CSV file holding the current ("actual") dataset.
    pub actual: PathBuf,

    /// CSV file holding the reference ("expected") dataset.
    pub expected: PathBuf,

    /// Columns to compare. Empty selects every column with numeric cells
    /// in both files, in actual-file order.
    #[serde(default)]
    pub columns: Vec<String>,

    /// Number of quantile groups per column.
    #[serde(default = "default_groups")]
    pub groups: usize,

    /// Directory for exported artifacts. `None` disables export.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_groups() -> usize {
    10
}

impl AnalysisConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the analyzer would refuse anyway, before any file IO.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groups < 2 {
            return Err(ConfigError::TooFewGroups {
                groups: self.groups,
            });
        }
        Ok(())
    }

    /// Computes a deterministic hash ID for this configuration.
    ///
    /// This enables artifact lookups: two runs with identical inputs and
    /// settings share the same AnalysisId. The output directory is not
    /// part of the identity.
    pub fn analysis_id(&self) -> AnalysisId {
        let canonical = CanonicalConfig {
            actual: &self.actual,
            expected: &self.expected,
            columns: &self.columns,
            groups: self.groups,
        };
        let json =
            serde_json::to_string(&canonical).expect("AnalysisConfig serialization failed");
        let hash = blake3::hash(json.as_bytes());
        format!("{}", hash.to_hex())
    }
}

/// The identity-bearing subset of the config, serialized for hashing.
#[derive(Serialize)]
struct CanonicalConfig<'a> {
    actual: &'a Path,
    expected: &'a Path,
    columns: &'a [String],
    groups: usize,
}
