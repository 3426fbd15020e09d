use circular_core::io::load_hour_minute_data;
use circular_core::{Angle, Axis, CircularStatistics, Histogram};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::f64::consts::PI;
use std::hint::black_box;

fn sample_angles(n: usize) -> Vec<Angle> {
    (0..n)
        .map(|i| Angle::from_minutes((i as i64 * 37) % 1440))
        .collect()
}

fn sample_axes(n: usize) -> Vec<Axis> {
    (0..n)
        .map(|i| Axis::from_degrees(i as f64 * 7.3).unwrap())
        .collect()
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for n in [100, 10_000] {
        let angles = sample_angles(n);
        group.bench_with_input(BenchmarkId::new("angle_mean_direction", n), &angles, |b, input| {
            b.iter(|| CircularStatistics::compute(black_box(input)).and_then(|s| s.mean_direction()));
        });

        let axes = sample_axes(n);
        group.bench_with_input(BenchmarkId::new("axis_mean_direction", n), &axes, |b, input| {
            b.iter(|| CircularStatistics::compute(black_box(input)).and_then(|s| s.mean_direction()));
        });
    }

    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    let angles = sample_angles(10_000);
    for (label, width) in [("15deg", PI / 12.0), ("1deg", PI / 180.0)] {
        group.bench_with_input(BenchmarkId::new("bin_10000", label), &width, |b, width| {
            b.iter(|| Histogram::new(black_box(&angles), *width));
        });
    }

    group.finish();
}

fn bench_clock_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_parsing");

    let single = "02.40";
    group.bench_function("single_token", |b| {
        b.iter(|| Angle::from_clock_str(black_box(single)));
    });

    let content: String = (0..1440)
        .map(|m| format!("{:02}.{:02}\n", m / 60, m % 60))
        .collect();
    group.bench_function("full_day", |b| {
        b.iter(|| load_hour_minute_data(black_box(&content)));
    });

    group.finish();
}

criterion_group!(benches, bench_statistics, bench_histogram, bench_clock_parsing);
criterion_main!(benches);
