//! Benchmarks comparing the solvers on structured instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minvc::prelude::*;
use std::time::Duration;

/// Benchmark the constructive heuristics on paths of varying sizes.
fn bench_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("Heuristics");

    for n in [32, 128, 512].iter() {
        let graph = Graph::path(*n);
        group.bench_with_input(BenchmarkId::new("best_constructive/path", n), n, |b, _| {
            b.iter(|| best_constructive(black_box(&graph)))
        });
    }

    for n in [16, 32, 64].iter() {
        let graph = Graph::complete(*n);
        group.bench_with_input(
            BenchmarkId::new("best_constructive/complete", n),
            n,
            |b, _| b.iter(|| best_constructive(black_box(&graph))),
        );
    }

    group.finish();
}

/// Benchmark the exact solver on complete graphs of varying sizes.
fn bench_branch_and_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("BranchAndBound");

    for n in [6, 8, 10].iter() {
        let graph = Graph::complete(*n);
        group.bench_with_input(BenchmarkId::new("complete", n), n, |b, _| {
            b.iter(|| {
                let mut working = graph.clone();
                let mut trace = Trace::new(Vec::new());
                BranchAndBound::new(Duration::from_secs(60))
                    .solve(black_box(&mut working), &mut trace)
                    .unwrap()
            })
        });
    }

    group.finish();
}

/// Benchmark a fixed-budget local search sweep on cycles.
fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("LocalSearch");
    group.sample_size(10);

    for n in [31, 101].iter() {
        let graph = Graph::cycle(*n);
        group.bench_with_input(BenchmarkId::new("cover_search", n), n, |b, _| {
            b.iter(|| {
                let mut working = graph.clone();
                let mut trace = Trace::new(Vec::new());
                CoverSearch::new(Duration::from_millis(2), 0)
                    .solve(black_box(&mut working), &mut trace)
                    .unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("mis_search", n), n, |b, _| {
            b.iter(|| {
                let mut working = graph.clone();
                let mut trace = Trace::new(Vec::new());
                MisSearch::new(Duration::from_millis(2), 0)
                    .solve(black_box(&mut working), &mut trace)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_heuristics,
    bench_branch_and_bound,
    bench_local_search
);
criterion_main!(benches);
