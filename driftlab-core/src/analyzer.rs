//! PSI analyzer — validated construction, lazy cut points, idempotent scoring.
//!
//! [`PsiAnalyzer`] borrows both datasets, validates them up front, and
//! derives cut points at most once (on first use), caching them for its
//! lifetime. Scoring recomputes a fresh [`PsiReport`] on every call; no
//! intermediate state survives between calls, so repeated scoring of
//! unchanged inputs always returns the same values.
//!
//! Key design choices:
//! - Cut points live in a `OnceLock`: an explicit computed-or-not state
//!   rather than a sentinel empty vector.
//! - Warnings are data (a `Vec<String>` carried onto the report), not a side
//!   channel; callers decide whether and where to surface them.
//! - NaN and infinite samples are not rejected. A NaN fails every group
//!   bound comparison and lands in no group, so actual-mass conservation
//!   silently degrades; finite inputs are the supported domain.

use std::sync::OnceLock;

use thiserror::Error;

use crate::boundaries;
use crate::report::{DriftBand, GroupBreakdown, PsiReport};
use crate::scorer;

/// Group counts above this trigger a usability warning (charts become
/// unreadable; the score itself stays correct).
pub const MAX_RECOMMENDED_GROUPS: usize = 25;

/// Errors raised when constructing an analyzer from invalid inputs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("empty dataset: {name} must contain at least one sample")]
    EmptyDataset { name: &'static str },
    #[error("group count {groups} < minimum 2")]
    TooFewGroups { groups: usize },
}

/// One PSI analysis over a fixed pair of datasets.
#[derive(Debug)]
pub struct PsiAnalyzer<'d> {
    actual: &'d [f64],
    expected: &'d [f64],
    groups: usize,
    cut_points: OnceLock<Vec<f64>>,
    warnings: Vec<String>,
}

impl<'d> PsiAnalyzer<'d> {
    /// Validate inputs and build an analyzer.
    ///
    /// # Errors
    /// [`InputError::EmptyDataset`] when either dataset is empty;
    /// [`InputError::TooFewGroups`] when `groups < 2`. A group count above
    /// [`MAX_RECOMMENDED_GROUPS`] is accepted with a warning.
    pub fn new(
        actual: &'d [f64],
        expected: &'d [f64],
        groups: usize,
    ) -> Result<Self, InputError> {
        if actual.is_empty() {
            return Err(InputError::EmptyDataset { name: "actual" });
        }
        if expected.is_empty() {
            return Err(InputError::EmptyDataset { name: "expected" });
        }
        if groups < 2 {
            return Err(InputError::TooFewGroups { groups });
        }

        let mut warnings = Vec::new();
        if groups > MAX_RECOMMENDED_GROUPS {
            warnings.push(format!(
                "group count {groups} exceeds recommended maximum \
                 {MAX_RECOMMENDED_GROUPS}; chart output will be hard to read"
            ));
        }

        Ok(Self {
            actual,
            expected,
            groups,
            cut_points: OnceLock::new(),
            warnings,
        })
    }

    /// Cut points partitioning the actual dataset into quantile groups.
    ///
    /// Derived on the first call and cached; later calls return the cached
    /// slice without recomputing.
    pub fn compute_boundaries(&self) -> &[f64] {
        self.cut_points
            .get_or_init(|| boundaries::cut_points(self.actual, self.groups))
    }

    /// Score both datasets and return a fresh report.
    ///
    /// Derives cut points first if no earlier call has. Each call recomputes
    /// the proportions and contributions from scratch.
    pub fn compute_score(&self) -> PsiReport {
        let cuts = self.compute_boundaries();

        let actual_counts = scorer::group_counts(cuts, self.actual);
        let expected_counts = scorer::group_counts(cuts, self.expected);
        let actual_pct = scorer::proportions(&actual_counts, self.actual.len());
        let expected_pct = scorer::proportions(&expected_counts, self.expected.len());
        let contributions = scorer::contributions(&actual_pct, &expected_pct);

        let psi: f64 = contributions.iter().sum();

        let groups = (0..self.groups)
            .map(|i| GroupBreakdown {
                group: i + 1,
                lower: cuts[i],
                upper: cuts[i + 1],
                actual_pct: actual_pct[i],
                expected_pct: expected_pct[i],
                contribution: contributions[i],
            })
            .collect();

        PsiReport {
            psi,
            band: DriftBand::from_psi(psi),
            groups,
            warnings: self.warnings.clone(),
        }
    }

    /// Group count this analyzer partitions into.
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Warnings collected at construction.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
