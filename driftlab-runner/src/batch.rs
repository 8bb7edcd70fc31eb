//! Batch drift analysis — wires together config, ingestion, and scoring.
//!
//! `run_batch` is the primary entry point used by the CLI: it loads both
//! CSV files, resolves the column list, scores every column in parallel
//! (one analyzer per column), and assembles a `BatchResult` ready for
//! printing or artifact export.

use std::path::Path;

use chrono::Utc;
use rayon::prelude::*;
use thiserror::Error;

use driftlab_core::{dataset_fingerprint, InputError, PsiAnalyzer};

use crate::config::{AnalysisConfig, ConfigError};
use crate::data::{read_numeric_columns, DataError, NumericColumn};
use crate::result::{BatchResult, ColumnDrift, SCHEMA_VERSION};

/// Errors from the batch layer.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("no numeric column is present in both files")]
    NoSharedColumns,
}

/// Run a full batch analysis from a config.
///
/// Column selection: an explicit `columns` list is honored in the given
/// order and any absent or non-numeric name is an error; an empty list
/// selects every column with numeric cells in both files, in actual-file
/// order. Each selected column is scored independently.
pub fn run_batch(config: &AnalysisConfig) -> Result<BatchResult, BatchError> {
    config.validate()?;

    let actual_columns = read_numeric_columns(&config.actual)?;
    let expected_columns = read_numeric_columns(&config.expected)?;

    let mut warnings = Vec::new();
    collect_skip_warnings(&config.actual, &actual_columns, &mut warnings);
    collect_skip_warnings(&config.expected, &expected_columns, &mut warnings);

    let selected = select_columns(config, &actual_columns, &expected_columns)?;
    if selected.is_empty() {
        return Err(BatchError::NoSharedColumns);
    }

    let columns = selected
        .par_iter()
        .map(|&(actual, expected)| score_column(actual, expected, config.groups))
        .collect::<Result<Vec<_>, BatchError>>()?;

    Ok(BatchResult {
        schema_version: SCHEMA_VERSION,
        analysis_id: config.analysis_id(),
        generated_at: Utc::now(),
        groups: config.groups,
        columns,
        warnings,
    })
}

/// Score one column pair with a fresh analyzer.
fn score_column(
    actual: &NumericColumn,
    expected: &NumericColumn,
    groups: usize,
) -> Result<ColumnDrift, BatchError> {
    let analyzer = PsiAnalyzer::new(&actual.values, &expected.values, groups)?;
    let report = analyzer.compute_score();

    Ok(ColumnDrift {
        column: actual.name.clone(),
        actual_fingerprint: dataset_fingerprint(&actual.values),
        expected_fingerprint: dataset_fingerprint(&expected.values),
        actual_count: actual.values.len(),
        expected_count: expected.values.len(),
        report,
    })
}

/// Pair up the columns to score, in output order.
fn select_columns<'a>(
    config: &AnalysisConfig,
    actual: &'a [NumericColumn],
    expected: &'a [NumericColumn],
) -> Result<Vec<(&'a NumericColumn, &'a NumericColumn)>, DataError> {
    if config.columns.is_empty() {
        // Every column numeric on both sides, keeping actual-file order.
        return Ok(actual
            .iter()
            .filter(|a| !a.values.is_empty())
            .filter_map(|a| {
                expected
                    .iter()
                    .find(|e| e.name == a.name && !e.values.is_empty())
                    .map(|e| (a, e))
            })
            .collect());
    }

    config
        .columns
        .iter()
        .map(|name| {
            let a = resolve(name, actual, &config.actual)?;
            let e = resolve(name, expected, &config.expected)?;
            Ok((a, e))
        })
        .collect()
}

/// Find an explicitly requested column, distinguishing "absent" from
/// "present but never numeric".
fn resolve<'a>(
    name: &str,
    columns: &'a [NumericColumn],
    path: &Path,
) -> Result<&'a NumericColumn, DataError> {
    let column = columns
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| DataError::MissingColumn {
            column: name.to_string(),
            path: path.to_path_buf(),
        })?;

    if column.values.is_empty() {
        return Err(DataError::NoNumericCells {
            column: name.to_string(),
            path: path.to_path_buf(),
        });
    }

    Ok(column)
}

fn collect_skip_warnings(path: &Path, columns: &[NumericColumn], warnings: &mut Vec<String>) {
    for column in columns {
        if column.skipped_cells > 0 {
            warnings.push(format!(
                "{}: column '{}': skipped {} non-numeric cell(s)",
                path.display(),
                column.name,
                column.skipped_cells
            ));
        }
    }
}
