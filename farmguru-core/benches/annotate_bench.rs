//! Criterion benchmarks for the annotator hot path.
//!
//! Benchmarks:
//! 1. Raw SMA over a price slice (rolling-sum window)
//! 2. Full annotation (price extraction + SMA + point projection)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use farmguru_core::domain::PricePoint;
use farmguru_core::indicators::sma_of_series;
use farmguru_core::signal::annotate;

fn make_prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 2000.0 + (i as f64 * 0.1).sin() * 150.0)
        .collect()
}

fn make_points(n: usize) -> Vec<PricePoint> {
    make_prices(n)
        .into_iter()
        .enumerate()
        .map(|(i, price)| PricePoint::new(format!("day-{i:05}"), price))
        .collect()
}

fn bench_sma_of_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("sma_of_series");
    let prices = make_prices(10_000);
    for window in [7, 30, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &w| {
            b.iter(|| sma_of_series(black_box(&prices), black_box(w)));
        });
    }
    group.finish();
}

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");
    for n in [250, 2_500, 10_000] {
        let points = make_points(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| annotate(black_box(points), black_box(7)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sma_of_series, bench_annotate);
criterion_main!(benches);
