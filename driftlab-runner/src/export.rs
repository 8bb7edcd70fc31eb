//! Reporting and export — JSON, CSV, Markdown, and terminal chart output.
//!
//! Provides the export formats for batch results:
//! - **JSON**: full round-trip serialization with schema versioning
//! - **CSV**: per-group breakdown for external analysis tools
//! - **Markdown**: human-readable per-column report
//! - **Text chart**: grouped bar chart for terminal display
//!
//! All persisted artifacts include a `schema_version` field. Unknown versions
//! are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use driftlab_core::PsiReport;

use crate::result::{BatchResult, ColumnDrift, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize a `BatchResult` to pretty JSON.
pub fn export_json(result: &BatchResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize BatchResult to JSON")
}

/// Deserialize a `BatchResult` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<BatchResult> {
    let result: BatchResult =
        serde_json::from_str(json).context("failed to deserialize BatchResult from JSON")?;
    if result.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            result.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(result)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the per-group breakdown of every column as CSV.
///
/// Columns: column, group, lower, upper, actual_pct, expected_pct,
/// contribution. One row per column-group pair, proportions as fractions.
pub fn export_breakdown_csv(result: &BatchResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "column",
        "group",
        "lower",
        "upper",
        "actual_pct",
        "expected_pct",
        "contribution",
    ])?;

    for drift in &result.columns {
        for g in &drift.report.groups {
            wtr.write_record([
                drift.column.as_str(),
                &g.group.to_string(),
                &format!("{:.6}", g.lower),
                &format!("{:.6}", g.upper),
                &format!("{:.6}", g.actual_pct),
                &format!("{:.6}", g.expected_pct),
                &format!("{:.6}", g.contribution),
            ])?;
        }
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Markdown report ────────────────────────────────────────────────

/// Generate a Markdown report for a batch run.
pub fn generate_report(result: &BatchResult) -> String {
    let mut md = String::with_capacity(2048);

    md.push_str("# Drift Analysis Report\n\n");

    // Metadata
    md.push_str("## Metadata\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!("| Analysis ID | `{}` |\n", result.analysis_id));
    md.push_str(&format!(
        "| Generated | {} |\n",
        result.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!("| Groups | {} |\n", result.groups));
    md.push_str(&format!("| Columns | {} |\n", result.columns.len()));
    md.push('\n');

    // One section per column
    for drift in &result.columns {
        md.push_str(&format_column_section(drift));
    }

    // Warnings
    if !result.warnings.is_empty() {
        md.push_str("## Warnings\n\n");
        for warn in &result.warnings {
            md.push_str(&format!("- {warn}\n"));
        }
        md.push('\n');
    }

    md
}

fn format_column_section(drift: &ColumnDrift) -> String {
    let mut md = String::with_capacity(1024);
    let report = &drift.report;

    md.push_str(&format!("## Column: {}\n\n", drift.column));
    md.push_str(&format!(
        "**PSI {:.6}** ({})\n\n",
        report.psi,
        report.band.describe()
    ));
    md.push_str(&format!(
        "Actual: {} samples, fingerprint `{}`. Expected: {} samples, fingerprint `{}`.\n\n",
        drift.actual_count,
        short_hash(&drift.actual_fingerprint),
        drift.expected_count,
        short_hash(&drift.expected_fingerprint)
    ));

    md.push_str("| Group | Range | Actual % | Expected % | Contribution |\n");
    md.push_str("| ---: | --- | ---: | ---: | ---: |\n");
    for g in &report.groups {
        md.push_str(&format!(
            "| {} | {} | {:.2}% | {:.2}% | {:.6} |\n",
            g.group,
            format_range(g.lower, g.upper, g.group == report.groups.len()),
            g.actual_pct * 100.0,
            g.expected_pct * 100.0,
            g.contribution
        ));
    }
    md.push('\n');

    if !report.warnings.is_empty() {
        for warn in &report.warnings {
            md.push_str(&format!("- WARNING: {warn}\n"));
        }
        md.push('\n');
    }

    md
}

/// Group value range; the last group closes its upper bound.
fn format_range(lower: f64, upper: f64, last: bool) -> String {
    let close = if last { ']' } else { ')' };
    format!("[{:.4}, {:.4}{}", lower, upper, close)
}

fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(16)]
}

// ─── Text chart ─────────────────────────────────────────────────────

const BAR_GLYPH: char = '\u{2587}';
const MAX_BAR_WIDTH: usize = 40;

/// Render a grouped bar chart of actual vs expected proportions.
///
/// Bars are scaled so the largest proportion in the report spans
/// `MAX_BAR_WIDTH` glyphs; empty groups render as bare labels.
pub fn render_bar_chart(report: &PsiReport) -> String {
    let peak = report
        .groups
        .iter()
        .map(|g| g.actual_pct.max(g.expected_pct))
        .fold(0.0_f64, f64::max);

    let mut out = String::with_capacity(1024);
    for g in &report.groups {
        out.push_str(&format!(
            "group {}  {}\n",
            g.group,
            format_range(g.lower, g.upper, g.group == report.groups.len())
        ));
        out.push_str(&bar_line("actual", g.actual_pct, peak));
        out.push_str(&bar_line("expected", g.expected_pct, peak));
        out.push('\n');
    }
    out
}

fn bar_line(label: &str, pct: f64, peak: f64) -> String {
    let width = if peak > 0.0 {
        ((pct / peak) * MAX_BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let bar: String = std::iter::repeat(BAR_GLYPH).take(width).collect();
    format!("  {:<8} {:>6.2}% {}\n", label, pct * 100.0, bar)
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Artifact paths returned after export.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub batch_dir: PathBuf,
    pub report_json: PathBuf,
    pub breakdown_csv: PathBuf,
    pub report_markdown: PathBuf,
}

/// Manages writing all artifacts for a batch run.
#[derive(Debug, Clone)]
pub struct ArtifactManager {
    output_dir: PathBuf,
}

impl ArtifactManager {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)
            .context("failed to create artifact output directory")?;
        Ok(Self { output_dir })
    }

    /// Save the full artifact set for a batch run.
    ///
    /// Creates a directory named after the analysis id under the output
    /// directory containing:
    /// - `report.json` — the full `BatchResult`
    /// - `breakdown.csv` — one row per column-group pair
    /// - `report.md` — the Markdown report
    pub fn save_batch(&self, result: &BatchResult) -> Result<ArtifactPaths> {
        let batch_dir = self.output_dir.join(&result.analysis_id);
        std::fs::create_dir_all(&batch_dir)
            .with_context(|| format!("failed to create artifact dir: {}", batch_dir.display()))?;

        let report_json = batch_dir.join("report.json");
        std::fs::write(&report_json, export_json(result)?)
            .with_context(|| format!("failed to write {}", report_json.display()))?;

        let breakdown_csv = batch_dir.join("breakdown.csv");
        std::fs::write(&breakdown_csv, export_breakdown_csv(result)?)
            .with_context(|| format!("failed to write {}", breakdown_csv.display()))?;

        let report_markdown = batch_dir.join("report.md");
        std::fs::write(&report_markdown, generate_report(result))
            .with_context(|| format!("failed to write {}", report_markdown.display()))?;

        Ok(ArtifactPaths {
            batch_dir,
            report_json,
            breakdown_csv,
            report_markdown,
        })
    }
}

/// Load a `BatchResult` from a batch directory's report.json.
///
/// Rejects unknown schema versions.
pub fn load_artifacts(dir: &Path) -> Result<BatchResult> {
    let report_path = dir.join("report.json");
    let json = std::fs::read_to_string(&report_path)
        .with_context(|| format!("failed to read {}", report_path.display()))?;
    import_json(&json)
}
