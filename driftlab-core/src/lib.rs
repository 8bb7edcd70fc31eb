//! DriftLab Core — quantile cut points, group binning, and PSI scoring.
//!
//! Computes the Population Stability Index: how far a distribution
//! ("actual") has drifted from a reference ("expected"), by cutting the
//! actual data's range into quantile groups and comparing per-group mass.
//!
//! - Cut point derivation from empirical percentiles (linear interpolation)
//! - Group assignment with asymmetric edge handling (closed last group)
//! - Per-group proportions with a floored zero-mass guard
//! - PSI aggregation with per-group contributions and interpretation bands
//! - BLAKE3 dataset fingerprints

pub mod analyzer;
pub mod boundaries;
pub mod fingerprint;
pub mod report;
pub mod scorer;

pub use analyzer::{InputError, PsiAnalyzer, MAX_RECOMMENDED_GROUPS};
pub use fingerprint::dataset_fingerprint;
pub use report::{DriftBand, GroupBreakdown, PsiReport};
pub use scorer::PROPORTION_FLOOR;
