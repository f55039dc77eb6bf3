//! Benchmarks for model selection and the two-series engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inventory_forecast::core::MonthlySeries;
use inventory_forecast::engine::ForecastEngine;
use inventory_forecast::selection::{ModelSelector, SeasonalGate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_monthly(n: usize, seed: u64) -> MonthlySeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let counts: Vec<u64> = (0..n)
        .map(|t| {
            let season = 15.0 * (2.0 * std::f64::consts::PI * t as f64 / 12.0).sin();
            let noise: f64 = rng.gen_range(-6.0..6.0);
            (60.0 + 0.5 * t as f64 + season + noise).max(0.0).round() as u64
        })
        .collect();
    MonthlySeries::from_counts(counts)
}

fn bench_selector(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_selector");
    let selector = ModelSelector::default();

    for size in [6, 12, 24, 60, 120] {
        let series = generate_monthly(size, 42);
        group.bench_with_input(BenchmarkId::new("select", size), &series, |b, s| {
            b.iter(|| selector.select(black_box(s), 3))
        });
    }
    group.finish();
}

fn bench_seasonal_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("seasonal_gate");
    let gate = SeasonalGate::default();

    for size in [24, 60, 120] {
        let series = generate_monthly(size, 7);
        group.bench_with_input(BenchmarkId::new("choose", size), &series, |b, s| {
            b.iter(|| gate.choose(black_box(s), 6))
        });
    }
    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast_engine");
    let engine = ForecastEngine::default();

    for size in [12, 36, 120] {
        let items = generate_monthly(size, 1);
        let maintenance = generate_monthly(size, 2);
        group.bench_with_input(BenchmarkId::new("forecast", size), &size, |b, _| {
            b.iter(|| {
                engine
                    .forecast(black_box(&items), black_box(&maintenance), &[1, 3, 6])
                    .ok()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selector, bench_seasonal_gate, bench_engine);
criterion_main!(benches);
