// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range slider constraints.
//!
//! Load a range configuration from JSON, then drag each handle into the other
//! to show spacing pushes, pulls and rejected moves.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example range_constraints`

use kurbo::{Point, Rect};
use understory_demos::{LogListener, draw};
use understory_slider::{Handle, PointerInput, RangeSlider, SliderConfig, dispatch};

const CONFIG: &str = r#"{
    "min": 0.0,
    "max": 1000.0,
    "step": 10.0,
    "min_range": 100.0,
    "max_range": 400.0
}"#;

fn main() {
    env_logger::init();

    let config: SliderConfig = serde_json::from_str(CONFIG).expect("valid json");
    let mut range = match RangeSlider::with_values(&config, [200.0, 500.0]) {
        Ok(range) => range,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            return;
        }
    };
    let track = range.track(Rect::new(0.0, 0.0, 500.0, 20.0));
    let mut listener = LogListener::new("price");

    // Grab the low handle and sweep it to the far right: the high handle is
    // pushed ahead until it reaches the maximum, then further moves are dropped.
    let down = PointerInput::down(Point::new(100.0, 10.0)).on_handle(Handle::Low);
    dispatch(range.handle_pointer(&track, &down), &mut listener);
    for x in (100..=500).step_by(50) {
        let point = Point::new(f64::from(x), 10.0);
        dispatch(
            range.handle_pointer(&track, &PointerInput::moved(point)),
            &mut listener,
        );
        println!("{} {:?}", draw(&track, &range.positions(), 51), range.values());
    }
    dispatch(range.handle_pointer(&track, &PointerInput::cancel()), &mut listener);

    // Now drag the high handle far left: it pushes the low handle down until
    // the low handle sits at the minimum, then further moves are dropped.
    let down = PointerInput::down(Point::new(500.0, 10.0)).on_handle(Handle::High);
    dispatch(range.handle_pointer(&track, &down), &mut listener);
    for x in (0..=500).rev().step_by(50) {
        let point = Point::new(f64::from(x), 10.0);
        dispatch(
            range.handle_pointer(&track, &PointerInput::moved(point)),
            &mut listener,
        );
        println!("{} {:?}", draw(&track, &range.positions(), 51), range.values());
    }
    dispatch(
        range.handle_pointer(&track, &PointerInput::up(Point::new(0.0, 10.0))),
        &mut listener,
    );

    // External writes are normalized into a valid pair.
    range.set_values([990.0, 10.0]);
    println!("external [990, 10] -> {:?}", range.values());
    println!("{} commits", listener.commits());
}
