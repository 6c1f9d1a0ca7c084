use chart_scale::api::{ScaleCalculator, ScaleCalculatorConfig, ScaleRequest};
use chart_scale::core::{SnapTable, compensated_div, order_of_magnitude};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_order_of_magnitude(c: &mut Criterion) {
    c.bench_function("order_of_magnitude", |b| {
        b.iter(|| {
            let _ = order_of_magnitude(black_box(2_145.0));
            let _ = order_of_magnitude(black_box(0.0045));
        })
    });
}

fn bench_compensated_div(c: &mut Criterion) {
    c.bench_function("compensated_div", |b| {
        b.iter(|| compensated_div(black_box(0.3), black_box(0.1)))
    });
}

fn bench_normalize_step(c: &mut Criterion) {
    let table = SnapTable::default();
    c.bench_function("normalize_step", |b| {
        b.iter(|| table.normalize_step(black_box(51.666)))
    });
}

fn bench_calculate_1k_axes(c: &mut Criterion) {
    let calculator =
        ScaleCalculator::new(ScaleCalculatorConfig::default()).expect("valid config");
    let requests: Vec<ScaleRequest> = (0..1_000)
        .map(|i| {
            let t = i as f64;
            ScaleRequest::new(-t * 0.37, 10.0 + t * 13.1, 120.0 + (i % 900) as f64)
        })
        .collect();

    c.bench_function("calculate_1k_axes", |b| {
        b.iter(|| {
            for request in black_box(&requests) {
                let _ = calculator.calculate(request).expect("valid request");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_order_of_magnitude,
    bench_compensated_div,
    bench_normalize_step,
    bench_calculate_1k_axes
);
criterion_main!(benches);
