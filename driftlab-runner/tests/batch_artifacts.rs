//! End-to-end batch run: CSV files in, artifact set out.

use std::path::{Path, PathBuf};

use driftlab_core::DriftBand;
use driftlab_runner::{
    load_artifacts, run_batch, AnalysisConfig, ArtifactManager, SCHEMA_VERSION,
};

fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn scores_csv(range: std::ops::RangeInclusive<i32>) -> String {
    let mut body = String::from("score,label\n");
    for i in range {
        body.push_str(&format!("{i}.0,row{i}\n"));
    }
    body
}

fn make_config(dir: &Path, actual_body: &str, expected_body: &str) -> AnalysisConfig {
    AnalysisConfig {
        actual: write_csv(dir, "actual.csv", actual_body),
        expected: write_csv(dir, "expected.csv", expected_body),
        columns: vec![],
        groups: 4,
        output_dir: None,
    }
}

#[test]
fn test_batch_to_artifacts_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let body = scores_csv(1..=20);
    let config = make_config(dir.path(), &body, &body);

    let result = run_batch(&config).unwrap();

    assert_eq!(result.schema_version, SCHEMA_VERSION);
    assert_eq!(result.analysis_id, config.analysis_id());
    assert_eq!(result.columns.len(), 1);
    assert_eq!(result.columns[0].column, "score");
    assert_eq!(result.columns[0].actual_count, 20);
    assert!(result.columns[0].report.psi < 1e-9);
    assert_eq!(result.columns[0].report.band, DriftBand::Stable);
    assert_eq!(
        result.columns[0].actual_fingerprint,
        result.columns[0].expected_fingerprint
    );
    // label column is non-numeric in both files
    assert_eq!(result.warnings.len(), 2);

    let out_dir = dir.path().join("artifacts");
    let manager = ArtifactManager::new(&out_dir).unwrap();
    let paths = manager.save_batch(&result).unwrap();

    assert!(paths.report_json.exists());
    assert!(paths.breakdown_csv.exists());
    assert!(paths.report_markdown.exists());
    assert!(paths.batch_dir.ends_with(&result.analysis_id));

    let breakdown = std::fs::read_to_string(&paths.breakdown_csv).unwrap();
    let lines: Vec<&str> = breakdown.lines().collect();
    assert_eq!(lines.len(), 5); // header + 4 groups

    let markdown = std::fs::read_to_string(&paths.report_markdown).unwrap();
    assert!(markdown.contains("# Drift Analysis Report"));
    assert!(markdown.contains("## Column: score"));

    let loaded = load_artifacts(&paths.batch_dir).unwrap();
    assert_eq!(loaded.analysis_id, result.analysis_id);
    assert_eq!(loaded.columns.len(), 1);
    assert!((loaded.columns[0].report.psi - result.columns[0].report.psi).abs() < 1e-12);
}

#[test]
fn test_drifted_batch_flags_major_shift() {
    let dir = tempfile::tempdir().unwrap();
    // Expected values sit entirely above the actual range, so every
    // expected sample falls outside the groups.
    let config = make_config(dir.path(), &scores_csv(1..=20), &scores_csv(21..=40));

    let result = run_batch(&config).unwrap();

    let report = &result.columns[0].report;
    assert!(report.psi.is_finite());
    assert!(report.psi > 0.25);
    assert_eq!(report.band, DriftBand::Major);

    let expected_mass: f64 = report.groups.iter().map(|g| g.expected_pct).sum();
    assert_eq!(expected_mass, 0.0);
}

#[test]
fn test_explicit_column_selection_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let body = "score,amount,label\n1.0,10.0,x\n2.0,20.0,y\n3.0,30.0,z\n4.0,40.0,w\n";
    let mut config = make_config(dir.path(), body, body);
    config.columns = vec!["amount".to_string()];
    config.groups = 2;

    let result = run_batch(&config).unwrap();

    assert_eq!(result.columns.len(), 1);
    assert_eq!(result.columns[0].column, "amount");
    assert!(result.columns[0].report.psi < 1e-9);
}
