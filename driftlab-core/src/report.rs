//! Scoring results — per-group breakdown, drift bands, report type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interpretation band for a PSI value.
///
/// Guidance only; nothing in the crate enforces these thresholds as
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftBand {
    /// PSI < 0.1: no significant distribution shift.
    Stable,
    /// 0.1 <= PSI < 0.25: moderate shift, worth investigating.
    Moderate,
    /// PSI >= 0.25: major shift.
    Major,
}

impl DriftBand {
    pub fn from_psi(psi: f64) -> Self {
        if psi < 0.1 {
            DriftBand::Stable
        } else if psi < 0.25 {
            DriftBand::Moderate
        } else {
            DriftBand::Major
        }
    }

    /// Short human-readable description.
    pub fn describe(&self) -> &'static str {
        match self {
            DriftBand::Stable => "no significant shift",
            DriftBand::Moderate => "moderate shift",
            DriftBand::Major => "major shift",
        }
    }
}

impl fmt::Display for DriftBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriftBand::Stable => write!(f, "stable"),
            DriftBand::Moderate => write!(f, "moderate"),
            DriftBand::Major => write!(f, "major"),
        }
    }
}

/// One group of the PSI breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupBreakdown {
    /// 1-based group number.
    pub group: usize,
    /// Lower cut point (inclusive).
    pub lower: f64,
    /// Upper cut point (exclusive; inclusive for the last group).
    pub upper: f64,
    /// Fraction of actual samples in this group. Never floored.
    pub actual_pct: f64,
    /// Fraction of expected samples in this group. Never floored.
    pub expected_pct: f64,
    /// This group's PSI contribution.
    pub contribution: f64,
}

/// Full result of one scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsiReport {
    /// The PSI statistic (sum of per-group contributions).
    pub psi: f64,
    pub band: DriftBand,
    pub groups: Vec<GroupBreakdown>,
    /// Non-fatal advisories collected at construction.
    pub warnings: Vec<String>,
}

impl PsiReport {
    /// Ordered per-group contributions.
    pub fn contributions(&self) -> Vec<f64> {
        self.groups.iter().map(|g| g.contribution).collect()
    }
}
