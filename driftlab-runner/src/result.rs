//! Batch result types shared by the runner and its exports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use driftlab_core::PsiReport;

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// Drift assessment for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDrift {
    /// Column name shared by both CSV files.
    pub column: String,
    /// BLAKE3 fingerprint of the actual samples.
    pub actual_fingerprint: String,
    /// BLAKE3 fingerprint of the expected samples.
    pub expected_fingerprint: String,
    /// Numeric cell count in the actual column.
    pub actual_count: usize,
    /// Numeric cell count in the expected column.
    pub expected_count: usize,
    pub report: PsiReport,
}

/// Complete result of a batch analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Content-addressable id of the configuration that produced this run.
    pub analysis_id: String,
    /// Wall-clock completion time.
    pub generated_at: DateTime<Utc>,
    /// Quantile group count applied to every column.
    pub groups: usize,
    /// Per-column assessments, in input order.
    pub columns: Vec<ColumnDrift>,
    /// Non-fatal issues from ingestion and scoring.
    pub warnings: Vec<String>,
}

/// Default schema version for serde deserialization of older JSON without the field.
fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl BatchResult {
    /// Largest PSI across columns; `None` for an empty run.
    pub fn max_psi(&self) -> Option<f64> {
        self.columns
            .iter()
            .map(|c| c.report.psi)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }
}
