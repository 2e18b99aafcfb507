//! Criterion benchmarks for the cascade simulator.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tarn_bench::{reference_energies, stress_energies};
use tarn_engine::{find_synchronization_step, CascadeSimulator, ConvergenceRunner};
use tarn_test_utils::{grid, SAMPLE_OCTOPUS};

/// Benchmark: One step on a 10K-cell grid.
fn bench_step_10k(c: &mut Criterion) {
    let mut sim = CascadeSimulator::new(&reference_energies(42));

    // Warm up: the first steps of a random grid cascade more than later ones.
    for _ in 0..10 {
        sim.step();
    }

    c.bench_function("step_10k", |b| {
        b.iter(|| {
            let metrics = sim.step_with_metrics();
            black_box(&metrics);
        });
    });
}

/// Benchmark: One step on a ~100K-cell grid.
fn bench_step_100k(c: &mut Criterion) {
    let mut sim = CascadeSimulator::new(&stress_energies(42));

    for _ in 0..10 {
        sim.step();
    }

    c.bench_function("step_100k", |b| {
        b.iter(|| {
            let metrics = sim.step_with_metrics();
            black_box(&metrics);
        });
    });
}

/// Benchmark: 100 steps from a fresh 10K-cell grid.
fn bench_100_steps_10k(c: &mut Criterion) {
    let energies = reference_energies(42);

    c.bench_function("100_steps_10k", |b| {
        b.iter(|| {
            let mut runner = ConvergenceRunner::new(CascadeSimulator::new(&energies));
            black_box(runner.run_fixed(100));
        });
    });
}

/// Benchmark: Synchronization search on the 10x10 sample grid.
fn bench_sync_sample(c: &mut Criterion) {
    let energies = grid(SAMPLE_OCTOPUS);

    c.bench_function("sync_sample", |b| {
        b.iter(|| {
            let step = find_synchronization_step(&energies, 1000);
            black_box(&step);
        });
    });
}

criterion_group!(
    benches,
    bench_step_10k,
    bench_step_100k,
    bench_100_steps_10k,
    bench_sync_sample
);
criterion_main!(benches);
