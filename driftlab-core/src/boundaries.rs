//! Cut point derivation — quantile boundaries over the actual dataset.
//!
//! Cut points partition the actual dataset's value range into `k` groups of
//! approximately equal population mass. Derivation sorts the data once and
//! reads the empirical percentile at `(100/k) * i` for `i = 0..=k`, linearly
//! interpolating between order statistics. The first cut point equals the
//! dataset minimum and the last equals the maximum, so every actual sample
//! falls inside the covered range.
//!
//! Heavily repeated values can collapse adjacent cut points onto the same
//! value. That is a valid outcome, not an error: the squeezed group is simply
//! empty, and binning downstream tolerates it.

/// Derive `groups + 1` non-decreasing cut points from `actual`.
///
/// The caller guarantees `actual` is non-empty and `groups >= 2`; the
/// analyzer validates both at construction.
pub fn cut_points(actual: &[f64], groups: usize) -> Vec<f64> {
    let mut sorted = actual.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    (0..=groups)
        .map(|i| percentile_sorted(&sorted, 100.0 * i as f64 / groups as f64))
        .collect()
}

/// Percentile of a sorted slice using linear interpolation.
pub(crate) fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    if sorted[lo] == sorted[hi] {
        // Skip interpolation inside a run of equal values; the weighted sum
        // could wobble off the exact value and break monotonicity.
        return sorted[lo];
    }
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}
