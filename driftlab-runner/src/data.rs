//! Numeric column extraction from headered CSV files.
//!
//! Reads a CSV and materializes one `Vec<f64>` per header column. Cells
//! that fail to parse as numbers are skipped and counted per column, so a
//! file mixing numeric and free-text columns can still be analyzed; the
//! skip counts surface as batch warnings rather than hard failures.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the CSV ingestion layer.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open '{path}': {source}")]
    Open { path: PathBuf, source: csv::Error },

    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: csv::Error },

    #[error("'{path}' has no data rows")]
    Empty { path: PathBuf },

    #[error("column '{column}' not found in '{path}'")]
    MissingColumn { column: String, path: PathBuf },

    #[error("column '{column}' in '{path}' has no numeric cells")]
    NoNumericCells { column: String, path: PathBuf },
}

/// One column of a CSV file with every numeric cell materialized.
#[derive(Debug, Clone)]
pub struct NumericColumn {
    /// Header name, whitespace-trimmed.
    pub name: String,
    /// Parsed values in file order.
    pub values: Vec<f64>,
    /// Cells that failed to parse as `f64` (empty cells included).
    pub skipped_cells: usize,
}

/// Read every column of a headered CSV file.
///
/// Returns one [`NumericColumn`] per header, including columns with no
/// numeric cells at all (their `values` stay empty); the caller decides
/// whether those are an error. Rows shorter than the header contribute
/// nothing to the trailing columns.
pub fn read_numeric_columns(path: &Path) -> Result<Vec<NumericColumn>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| DataError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut columns: Vec<NumericColumn> = headers
        .iter()
        .map(|name| NumericColumn {
            name: name.trim().to_string(),
            values: Vec::new(),
            skipped_cells: 0,
        })
        .collect();

    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        rows += 1;

        for (i, cell) in record.iter().enumerate() {
            if i >= columns.len() {
                break;
            }
            match cell.trim().parse::<f64>() {
                Ok(value) => columns[i].values.push(value),
                Err(_) => columns[i].skipped_cells += 1,
            }
        }
    }

    if rows == 0 {
        return Err(DataError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(columns)
}
