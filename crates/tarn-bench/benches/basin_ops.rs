//! Criterion benchmarks for low-point and basin analysis.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tarn_basin::{basin_sizes, find_low_points, risk_level, BasinExtractor};
use tarn_bench::reference_heightmap;
use tarn_test_utils::{grid, SAMPLE_HEIGHTMAP};

/// Benchmark: Locate every low point in a 10K-cell heightmap.
fn bench_low_points_10k(c: &mut Criterion) {
    let heights = reference_heightmap(42);

    c.bench_function("low_points_10k", |b| {
        b.iter(|| {
            let lows = find_low_points(&heights);
            black_box(&lows);
        });
    });
}

/// Benchmark: Risk level of a 10K-cell heightmap.
fn bench_risk_level_10k(c: &mut Criterion) {
    let heights = reference_heightmap(42);

    c.bench_function("risk_level_10k", |b| {
        b.iter(|| black_box(risk_level(&heights)));
    });
}

/// Benchmark: Extract every basin of a 10K-cell heightmap.
fn bench_basin_sizes_10k(c: &mut Criterion) {
    let heights = reference_heightmap(42);

    c.bench_function("basin_sizes_10k", |b| {
        b.iter(|| {
            let sizes = basin_sizes(&heights);
            black_box(&sizes);
        });
    });
}

/// Benchmark: Extract the four basins of the small sample heightmap.
fn bench_extract_sample(c: &mut Criterion) {
    let heights = grid(SAMPLE_HEIGHTMAP);
    let lows = find_low_points(&heights);
    let extractor = BasinExtractor::default();

    c.bench_function("extract_sample", |b| {
        b.iter(|| {
            for &low in &lows {
                let basin = extractor.extract(&heights, low);
                black_box(&basin);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_low_points_10k,
    bench_risk_level_10k,
    bench_basin_sizes_10k,
    bench_extract_sample
);
criterion_main!(benches);
