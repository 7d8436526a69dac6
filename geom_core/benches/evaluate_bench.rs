//! Benchmarks for cross-section evaluation.
//!
//! Run with: `cargo bench --bench evaluate_bench`
//!
//! Measures single-link evaluation per shape kind and the per-iteration
//! geometry update over a whole network, sequential vs parallel.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geom_core::batch::{evaluate_links, evaluate_links_sequential};
use geom_core::depth::DepthPair;
use geom_core::evaluate::evaluate;
use geom_core::registry::{example_parameters, ALL_KINDS};
use geom_core::shapes::{CrossSection, Shape};

/// Generate a network cycling through every shape kind, with depths sweeping
/// from dry to surcharged.
fn generate_network(n: usize) -> (Vec<Shape>, Vec<DepthPair>) {
    let mut shapes = Vec::with_capacity(n);
    let mut depths = Vec::with_capacity(n);
    for i in 0..n {
        let kind = ALL_KINDS[i % ALL_KINDS.len()];
        // Example parameters are always valid
        if let Ok(shape) = Shape::from_parameters(kind, &example_parameters(kind)) {
            shapes.push(shape);
            let phase = (i as f64) * 0.1;
            let h = 1.2 + 1.4 * phase.sin();
            depths.push(DepthPair::new(h, h + 0.1 * phase.cos()));
        }
    }
    (shapes, depths)
}

/// Benchmark one evaluation per shape kind at a part-full depth.
fn bench_single_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_link");

    for kind in ALL_KINDS {
        let Ok(shape) = Shape::from_parameters(kind, &example_parameters(kind)) else {
            continue;
        };
        let depths = DepthPair::new(0.4, 0.6);
        group.bench_function(kind.name(), |b| {
            b.iter(|| black_box(&shape).evaluate(black_box(depths)));
        });
    }

    group.finish();
}

/// Benchmark the legacy code dispatcher against the typed path.
fn bench_legacy_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("legacy_dispatch");
    let params = [1.0, 0.001, 0.0, 0.0, 0.0, 0.0];

    group.bench_function("circular_by_code", |b| {
        b.iter(|| evaluate(black_box(1), black_box(&params), black_box(0.4), black_box(0.6)));
    });

    group.finish();
}

/// Benchmark whole-network evaluation.
fn bench_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("network");

    for n in [100, 1_000, 10_000] {
        let (shapes, depths) = generate_network(n);

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, _| {
            b.iter(|| evaluate_links_sequential(black_box(&shapes), black_box(&depths)));
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, _| {
            b.iter(|| evaluate_links(black_box(&shapes), black_box(&depths)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_link, bench_legacy_dispatch, bench_network);
criterion_main!(benches);
