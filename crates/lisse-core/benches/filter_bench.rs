//! Criterion benchmarks for the low-pass synthesis core
//!
//! Run with: cargo bench -p lisse-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lisse_core::{
    Filter, FirstOrder, FirstOrderCoeffs, SecondOrder, SecondOrderCoeffs, Transform,
};

const TE: f64 = 0.01;
const BLOCK_SIZES: &[usize] = &[64, 256, 1024];

fn generate_test_signal(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| {
            let t = i as f64 * TE;
            libm::sin(core::f64::consts::TAU * 0.5 * t) * 0.5
        })
        .collect()
}

fn bench_first_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("FirstOrder");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        group.bench_with_input(
            BenchmarkId::new("step", block_size),
            &block_size,
            |b, _| {
                let mut filter = FirstOrder::new(TE, 0.1, Transform::Bilinear).unwrap();
                b.iter(|| {
                    for &sample in &input {
                        black_box(filter.step(black_box(sample)).unwrap());
                    }
                });
            },
        );
    }

    for transform in Transform::ALL {
        group.bench_function(format!("derive/{transform}"), |b| {
            b.iter(|| {
                black_box(FirstOrderCoeffs::<f64>::derive(
                    black_box(TE),
                    black_box(0.1),
                    black_box(transform),
                ))
            });
        });
    }

    group.finish();
}

fn bench_second_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("SecondOrder");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        group.bench_with_input(
            BenchmarkId::new("step", block_size),
            &block_size,
            |b, _| {
                let mut filter =
                    SecondOrder::new(TE, core::f64::consts::TAU, 0.7, Transform::Bilinear)
                        .unwrap();
                b.iter(|| {
                    for &sample in &input {
                        black_box(filter.step(black_box(sample)).unwrap());
                    }
                });
            },
        );
    }

    for transform in Transform::ALL {
        group.bench_function(format!("derive/{transform}"), |b| {
            b.iter(|| {
                black_box(SecondOrderCoeffs::<f64>::derive(
                    black_box(TE),
                    black_box(core::f64::consts::TAU),
                    black_box(0.7),
                    black_box(transform),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_first_order, bench_second_order);
criterion_main!(benches);
