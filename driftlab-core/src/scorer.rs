//! PSI scoring — group assignment, proportions, and contribution terms.
//!
//! Scoring walks both datasets against one shared set of cut points:
//! - Groups `1..k-1` cover `[lower, upper)`; the last group closes its upper
//!   bound so the actual maximum is never dropped.
//! - A sample strictly outside the cut point range lands in no group and is
//!   excluded from the proportion numerator (the denominator stays the full
//!   dataset length). Only the expected dataset can produce these, since cut
//!   points span actual's own min and max.
//!
//! Statistical caveat: a group with zero mass on one side would make the
//! log-ratio term infinite. An exactly-zero proportion is therefore replaced
//! by [`PROPORTION_FLOOR`] inside the term, which bounds the contribution at
//! roughly `ln(1e6)` times the surviving mass instead. The substitution is a
//! deliberate, lossy approximation; reported proportions are never floored.

/// Floor substituted for an exactly-zero group proportion inside a
/// contribution term.
pub const PROPORTION_FLOOR: f64 = 1e-6;

/// Zero-based group index for `value`, or `None` when the value falls
/// strictly outside the cut point range.
pub(crate) fn group_index(cut_points: &[f64], value: f64) -> Option<usize> {
    let k = cut_points.len() - 1;
    for i in 0..k {
        let lower = cut_points[i];
        let upper = cut_points[i + 1];
        let hit = if i + 1 == k {
            value >= lower && value <= upper
        } else {
            value >= lower && value < upper
        };
        if hit {
            return Some(i);
        }
    }
    None
}

/// Per-group sample counts for `data` against `cut_points`.
pub(crate) fn group_counts(cut_points: &[f64], data: &[f64]) -> Vec<usize> {
    let mut counts = vec![0usize; cut_points.len() - 1];
    for &value in data {
        if let Some(i) = group_index(cut_points, value) {
            counts[i] += 1;
        }
    }
    counts
}

/// Convert counts to fractions of the full dataset length.
pub(crate) fn proportions(counts: &[usize], len: usize) -> Vec<f64> {
    counts.iter().map(|&c| c as f64 / len as f64).collect()
}

/// One PSI contribution term.
///
/// Keeps the `expected / actual` ratio inside the log with the matching
/// `(expected - actual)` prefactor, so both factors always share a sign and
/// the term is non-negative. An exactly-zero proportion on either side is
/// replaced by [`PROPORTION_FLOOR`] before the term is formed.
pub(crate) fn psi_term(actual_pct: f64, expected_pct: f64) -> f64 {
    let a = if actual_pct == 0.0 {
        PROPORTION_FLOOR
    } else {
        actual_pct
    };
    let e = if expected_pct == 0.0 {
        PROPORTION_FLOOR
    } else {
        expected_pct
    };
    (e - a) * (e / a).ln()
}

/// Contribution terms for matched proportion slices.
pub(crate) fn contributions(actual_pct: &[f64], expected_pct: &[f64]) -> Vec<f64> {
    actual_pct
        .iter()
        .zip(expected_pct.iter())
        .map(|(&a, &e)| psi_term(a, e))
        .collect()
}
