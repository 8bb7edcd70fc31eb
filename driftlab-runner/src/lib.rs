//! DriftLab Runner — batch orchestration, CSV ingestion, reporting artifacts.
//!
//! This crate builds on `driftlab-core` to provide:
//! - Numeric column extraction from headered CSV files
//! - Config-driven batch analysis, one analyzer per column in parallel
//! - JSON / CSV / Markdown artifact export with schema versioning
//! - Plain-text grouped bar charts for terminal output

pub mod batch;
pub mod config;
pub mod data;
pub mod export;
pub mod result;

pub use batch::{run_batch, BatchError};
pub use config::{AnalysisConfig, AnalysisId, ConfigError};
pub use data::{read_numeric_columns, DataError, NumericColumn};
pub use export::{
    export_breakdown_csv, export_json, generate_report, import_json, load_artifacts,
    render_bar_chart, ArtifactManager, ArtifactPaths,
};
pub use result::{BatchResult, ColumnDrift, SCHEMA_VERSION};
