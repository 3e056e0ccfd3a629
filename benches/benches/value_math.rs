// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_slider::MarkTable;
use understory_slider::math::{closest_mark, position_of, round_to, value_of};

fn ratios(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 / len as f64).collect()
}

fn bench_value_of(c: &mut Criterion) {
    let mut group = c.benchmark_group("math/value_of");
    let inputs = ratios(1_024);
    group.throughput(Throughput::Elements(inputs.len() as u64));

    // Integer steps take the cheap rounding path; fractional steps go through
    // the decimal shift.
    for (name, step, precision) in [("step_1", 1.0, 0), ("step_0.01", 0.01, 2)] {
        group.bench_with_input(BenchmarkId::new(name, inputs.len()), &inputs, |b, inputs| {
            b.iter(|| {
                for &ratio in inputs {
                    black_box(value_of(ratio, -50.0, 50.0, step, precision));
                }
            });
        });
    }

    group.finish();
}

fn bench_position_round_trip(c: &mut Criterion) {
    let inputs: Vec<f64> = ratios(1_024).into_iter().map(|r| r * 100.0).collect();
    c.bench_function("math/position_round_trip", |b| {
        b.iter(|| {
            for &value in &inputs {
                let p = position_of(value, 0.0, 100.0);
                black_box(round_to(p, 3));
            }
        });
    });
}

fn bench_closest_mark(c: &mut Criterion) {
    let mut group = c.benchmark_group("math/closest_mark");

    for len in [4_usize, 16, 64, 256] {
        let marks: Vec<f64> = (0..len).map(|i| i as f64 * 100.0 / len as f64).collect();
        let table = MarkTable::new(marks.iter().copied());
        let queries = ratios(256);
        group.throughput(Throughput::Elements(queries.len() as u64));

        group.bench_with_input(BenchmarkId::new("linear", len), &marks, |b, marks| {
            b.iter(|| {
                for &query in &queries {
                    black_box(closest_mark(query * 100.0, marks.iter().copied()));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("table", len), &table, |b, table| {
            b.iter(|| {
                for &query in &queries {
                    black_box(table.closest(query * 100.0));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_value_of,
    bench_position_round_trip,
    bench_closest_mark
);
criterion_main!(benches);
