//! Criterion benchmarks for frontier computation.
//!
//! Uses uniformly random point clouds to compare the one-pass scan with
//! the exact pairwise check.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_pareto::frontier::{FrontierConfig, FrontierMode, FrontierRunner};

fn random_points(n: usize, dims: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..dims).map(|_| rng.random_range(0.0..1.0)).collect())
        .collect()
}

fn bench_adjacent_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacent_scan");

    for (n, dims) in [(1_000usize, 2usize), (10_000, 2), (10_000, 5)] {
        let points = random_points(n, dims, 42);
        let config = FrontierConfig::default();
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_d{}", n, dims), n),
            &(points, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = FrontierRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    group.sample_size(10);

    for &n in &[200usize, 1_000] {
        let points = random_points(n, 3, 42);
        let config = FrontierConfig::default().with_mode(FrontierMode::Exact);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(points, config), |b, (p, c)| {
            b.iter(|| {
                let result = FrontierRunner::run(black_box(p), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_adjacent_scan, bench_exact);
criterion_main!(benches);
