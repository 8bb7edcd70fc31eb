//! Content fingerprints for datasets.
//!
//! BLAKE3 over the little-endian byte encoding of the samples, so the same
//! values in the same order hash identically across builds and platforms.
//! Reports carry these fingerprints to tie a score back to the exact data
//! that produced it.

/// Hex BLAKE3 fingerprint of a sample slice.
pub fn dataset_fingerprint(samples: &[f64]) -> String {
    let mut hasher = blake3::Hasher::new();
    for value in samples {
        hasher.update(&value.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
