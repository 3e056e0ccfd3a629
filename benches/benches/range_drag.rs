// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_slider::{Handle, PointerInput, RangeSlider, Slider, SliderConfig};

const SWEEP: usize = 512;

fn sweep_points() -> Vec<Point> {
    // Back and forth across a 400px track, overshooting both ends.
    (0..SWEEP)
        .map(|i| {
            let t = i as f64 / SWEEP as f64;
            let x = if t < 0.5 { t * 1_000.0 } else { (1.0 - t) * 1_000.0 };
            Point::new(x - 50.0, 8.0)
        })
        .collect()
}

fn bench_single_drag(c: &mut Criterion) {
    let config = SliderConfig::new(0.0, 1_000.0).step(0.5);
    let points = sweep_points();
    c.bench_function("slider/drag_sweep", |b| {
        b.iter_batched(
            || Slider::new(&config).unwrap(),
            |mut slider| {
                let track = slider.track(Rect::new(0.0, 0.0, 400.0, 16.0));
                slider.handle_pointer(&track, &PointerInput::down(points[0]));
                for &p in &points {
                    black_box(slider.handle_pointer(&track, &PointerInput::moved(p)));
                }
                black_box(slider.handle_pointer(&track, &PointerInput::cancel()));
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_range_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_slider/drag_sweep");
    let points = sweep_points();

    let cases = [
        ("free", SliderConfig::new(0.0, 1_000.0)),
        (
            "spaced",
            SliderConfig::new(0.0, 1_000.0)
                .min_range(50.0)
                .max_range(300.0),
        ),
        (
            "marks",
            SliderConfig::new(0.0, 1_000.0)
                .marks((0..=20).map(|i| f64::from(i) * 50.0))
                .step_on_marks(true),
        ),
    ];

    for (name, config) in cases {
        group.bench_function(name, |b| {
            b.iter_batched(
                || RangeSlider::with_values(&config, [250.0, 750.0]).unwrap(),
                |mut range| {
                    let track = range.track(Rect::new(0.0, 0.0, 400.0, 16.0));
                    let down = PointerInput::down(points[0]).on_handle(Handle::Low);
                    range.handle_pointer(&track, &down);
                    for &p in &points {
                        black_box(range.handle_pointer(&track, &PointerInput::moved(p)));
                    }
                    black_box(range.handle_pointer(&track, &PointerInput::cancel()));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_drag, bench_range_drag);
criterion_main!(benches);
