//! DriftLab CLI — ad-hoc and config-driven drift analysis commands.
//!
//! Commands:
//! - `analyze` — compare two CSV files and print a per-column drift summary
//! - `batch` — run an analysis described by a TOML config file

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use driftlab_core::DriftBand;
use driftlab_runner::{
    render_bar_chart, run_batch, AnalysisConfig, ArtifactManager, BatchResult, ColumnDrift,
};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "driftlab",
    about = "DriftLab CLI — population stability drift analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two CSV files and print a per-column drift summary.
    Analyze {
        /// CSV file holding the current ("actual") dataset.
        actual: PathBuf,

        /// CSV file holding the reference ("expected") dataset.
        expected: PathBuf,

        /// Column to score (repeatable). Defaults to every numeric column
        /// present in both files.
        #[arg(long = "column")]
        columns: Vec<String>,

        /// Number of quantile groups per column.
        #[arg(long, default_value_t = 10)]
        groups: usize,

        /// Save artifacts (report.json, breakdown.csv, report.md) here.
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print a text bar chart for each column.
        #[arg(long, default_value_t = false)]
        chart: bool,
    },
    /// Run an analysis described by a TOML config file.
    Batch {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,

        /// Override the config's output directory.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            actual,
            expected,
            columns,
            groups,
            out_dir,
            chart,
        } => run_analyze(actual, expected, columns, groups, out_dir, chart),
        Commands::Batch { config, out_dir } => run_batch_cmd(&config, out_dir),
    }
}

fn run_analyze(
    actual: PathBuf,
    expected: PathBuf,
    columns: Vec<String>,
    groups: usize,
    out_dir: Option<PathBuf>,
    chart: bool,
) -> Result<()> {
    if !actual.exists() {
        bail!("actual file not found: {}", actual.display());
    }
    if !expected.exists() {
        bail!("expected file not found: {}", expected.display());
    }

    let config = AnalysisConfig {
        actual,
        expected,
        columns,
        groups,
        output_dir: out_dir,
    };

    execute(&config, chart)
}

fn run_batch_cmd(config_path: &Path, out_dir: Option<PathBuf>) -> Result<()> {
    let mut config = AnalysisConfig::from_file(config_path)?;
    if out_dir.is_some() {
        config.output_dir = out_dir;
    }

    execute(&config, false)
}

fn execute(config: &AnalysisConfig, chart: bool) -> Result<()> {
    let result = run_batch(config)?;

    print_summary(&result);

    if chart {
        for drift in &result.columns {
            println!("--- {} ---", drift.column);
            print!("{}", render_bar_chart(&drift.report));
        }
    }

    if let Some(dir) = &config.output_dir {
        let manager = ArtifactManager::new(dir)?;
        let paths = manager.save_batch(&result)?;
        println!("Artifacts saved to: {}", paths.batch_dir.display());
    }

    Ok(())
}

fn print_summary(result: &BatchResult) {
    println!();
    println!("=== Drift Analysis ===");
    println!("Analysis ID:    {}", &result.analysis_id[..16]);
    println!(
        "Generated:      {}",
        result.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Groups:         {}", result.groups);
    println!("Columns:        {}", result.columns.len());
    println!();
    println!(
        "{:<20} {:>10} {:<10} {}",
        "Column", "PSI", "Band", "Top Group"
    );
    println!("{}", "-".repeat(60));
    for drift in &result.columns {
        println!(
            "{:<20} {:>10.6} {:<10} {}",
            drift.column,
            drift.report.psi,
            band_label(drift.report.band),
            top_group(drift),
        );
    }

    if let Some(max) = result.max_psi() {
        println!();
        println!(
            "Worst PSI:      {:.6} ({})",
            max,
            DriftBand::from_psi(max).describe()
        );
    }

    for drift in &result.columns {
        for warn in &drift.report.warnings {
            println!("WARNING: {}: {warn}", drift.column);
        }
    }
    for warn in &result.warnings {
        println!("WARNING: {warn}");
    }
    println!();
}

fn band_label(band: DriftBand) -> &'static str {
    match band {
        DriftBand::Stable => "OK",
        DriftBand::Moderate => "MODERATE",
        DriftBand::Major => "MAJOR",
    }
}

/// The group contributing the most to a column's PSI, as `number (value)`.
fn top_group(drift: &ColumnDrift) -> String {
    drift
        .report
        .groups
        .iter()
        .max_by(|a, b| {
            a.contribution
                .partial_cmp(&b.contribution)
                .unwrap_or(Ordering::Equal)
        })
        .map(|g| format!("{} ({:.4})", g.group, g.contribution))
        .unwrap_or_else(|| "-".into())
}
