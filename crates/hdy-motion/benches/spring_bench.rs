//! Benchmark: analytic spring sampling and duration estimation.
//!
//! Run with: `cargo bench -p hdy-motion --bench spring_bench`
//!
//! Sampling runs once per frame per animation; the duration searches run once
//! per spring animation setup (and per swipe release).

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hdy_motion::{Easing, Spring, SpringParams, ease};

fn regimes() -> [(&'static str, SpringParams); 3] {
    [
        ("under", SpringParams::new(0.4, 1.0, 400.0).unwrap()),
        ("critical", SpringParams::new(1.0, 1.0, 500.0).unwrap()),
        ("over", SpringParams::new(2.0, 1.0, 300.0).unwrap()),
    ]
}

fn bench_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring/value");
    for (name, params) in regimes() {
        let spring = Spring::new(params, 0.0, 1.0, 0.0);
        group.bench_with_input(BenchmarkId::from_parameter(name), &spring, |b, spring| {
            let mut t = 0u64;
            b.iter(|| {
                t = (t + 16) % 2_000;
                black_box(spring.value(black_box(Duration::from_millis(t))))
            });
        });
    }
    group.finish();
}

fn bench_estimated_duration(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring/estimated_duration");
    for (name, params) in regimes() {
        let spring = Spring::new(params, 0.0, 300.0, 0.0);
        group.bench_with_input(BenchmarkId::from_parameter(name), &spring, |b, spring| {
            b.iter(|| black_box(spring.estimated_duration(black_box(0.001))));
        });
    }
    group.finish();
}

fn bench_first_arrival(c: &mut Criterion) {
    let spring = Spring::new(SpringParams::new(0.4, 1.0, 400.0).unwrap(), 0.0, 1.0, 2.0);
    c.bench_function("spring/first_arrival", |b| {
        b.iter(|| black_box(spring.first_arrival(black_box(0.001))));
    });
}

fn bench_easing(c: &mut Criterion) {
    c.bench_function("easing/all_curves", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for easing in Easing::ALL {
                acc += ease(easing, black_box(0.37));
            }
            black_box(acc)
        });
    });
}

criterion_group!(
    benches,
    bench_value,
    bench_estimated_duration,
    bench_first_arrival,
    bench_easing
);
criterion_main!(benches);
