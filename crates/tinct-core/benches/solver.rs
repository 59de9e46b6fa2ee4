//! Benchmarks for tinct-core solver operations
//!
//! Run with: cargo bench -p tinct-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use tinct_core::models::FilterValues;
use tinct_core::solver::{spsa, SpsaParams, TargetLoss};
use tinct_core::{Color, Solver, SolverSettings};

const TARGETS: [&str; 4] = ["#00a4d6", "#ff0000", "#808000", "#ffffff"];

/// Benchmark a single loss evaluation (filter chain + HSL + distance)
fn bench_loss(c: &mut Criterion) {
    let mut group = c.benchmark_group("loss");
    group.throughput(Throughput::Elements(1));

    let values = FilterValues::new([62.0, 18.0, 4300.0, 172.0, 96.0, 104.0]);
    for hex in TARGETS {
        let target = Color::from_hex(hex).unwrap();
        group.bench_with_input(BenchmarkId::new("eval", hex), &target, |b, &target| {
            let mut loss = TargetLoss::new(target);
            b.iter(|| loss.eval(black_box(&values)));
        });
    }

    group.finish();
}

/// Benchmark one wide-phase SPSA run at full length
fn bench_spsa_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsa");

    let params = SpsaParams {
        stability: 5.0,
        gains: [60.0, 180.0, 18000.0, 600.0, 1.2, 1.2],
        perturbation: 15.0,
        iterations: 1000,
    };
    group.throughput(Throughput::Elements(params.iterations as u64));

    let target = Color::from_hex("#00a4d6").unwrap();
    group.bench_function("wide_1000", |b| {
        let mut loss = TargetLoss::new(target);
        let mut rng = Pcg32::seed_from_u64(7);
        b.iter(|| {
            spsa(
                black_box(&params),
                FilterValues::INITIAL,
                &mut rng,
                |v| loss.eval(v),
            )
        });
    });

    group.finish();
}

/// Benchmark complete seeded solves
fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for hex in TARGETS {
        let target = Color::from_hex(hex).unwrap();
        group.bench_with_input(BenchmarkId::new("seeded", hex), &target, |b, &target| {
            b.iter(|| {
                Solver::seeded(black_box(target), 42)
                    .with_settings(SolverSettings::default())
                    .solve()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_loss, bench_spsa_run, bench_solve);

criterion_main!(benches);
