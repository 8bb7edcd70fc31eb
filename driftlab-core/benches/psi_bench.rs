//! Criterion benchmarks for DriftLab hot paths.
//!
//! Benchmarks:
//! 1. Cut point derivation (sort + quantile interpolation)
//! 2. Full score computation (counting, proportions, contributions)
//! 3. Re-scoring with cached cut points

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use driftlab_core::{boundaries, PsiAnalyzer};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_samples(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.0..100.0)).collect()
}

fn make_drifted(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(10.0..110.0)).collect()
}

// ── 1. Cut Point Derivation ──────────────────────────────────────────

fn bench_cut_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("cut_points");

    for &n in &[1_000, 10_000, 100_000] {
        let samples = make_samples(n, 7);
        group.bench_with_input(BenchmarkId::new("ten_groups", n), &n, |b, _| {
            b.iter(|| boundaries::cut_points(black_box(&samples), 10));
        });
    }

    group.finish();
}

// ── 2. Full Score Computation ────────────────────────────────────────

fn bench_compute_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_score");

    for &n in &[1_000, 10_000, 100_000] {
        let actual = make_samples(n, 7);
        let expected = make_drifted(n, 11);

        group.bench_with_input(BenchmarkId::new("cold", n), &n, |b, _| {
            b.iter(|| {
                let analyzer = PsiAnalyzer::new(
                    black_box(&actual),
                    black_box(&expected),
                    10,
                )
                .unwrap();
                black_box(analyzer.compute_score())
            });
        });
    }

    group.finish();
}

// ── 3. Re-Scoring with Cached Cut Points ─────────────────────────────

fn bench_rescore(c: &mut Criterion) {
    let mut group = c.benchmark_group("rescore_cached");

    let actual = make_samples(100_000, 7);
    let expected = make_drifted(100_000, 11);
    let analyzer = PsiAnalyzer::new(&actual, &expected, 10).unwrap();
    analyzer.compute_boundaries();

    group.bench_function("100k_samples_10_groups", |b| {
        b.iter(|| black_box(analyzer.compute_score()));
    });

    group.finish();
}

criterion_group!(benches, bench_cut_points, bench_compute_score, bench_rescore);
criterion_main!(benches);
