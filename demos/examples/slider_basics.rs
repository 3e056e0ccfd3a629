// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider basics.
//!
//! Drive a single-handle slider with synthetic pointer and keyboard input,
//! first left-to-right, then mirrored right-to-left with snapping marks.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p understory_demos --example slider_basics`

use kurbo::{Point, Rect};
use understory_demos::{LogListener, draw};
use understory_slider::{Direction, Mark, PointerInput, Slider, SliderConfig, SliderKey, dispatch};

fn main() {
    env_logger::init();

    let config = SliderConfig::new(0.0, 100.0).step(5.0);
    let mut slider = Slider::with_value(&config, 20.0).expect("valid config");
    let track = slider.track(Rect::new(10.0, 0.0, 410.0, 16.0));
    let mut listener = LogListener::new("volume");

    // Press the track, drag right past the end, then let go.
    let mut x = 110.0;
    dispatch(
        slider.handle_pointer(&track, &PointerInput::down(Point::new(x, 8.0))),
        &mut listener,
    );
    while x < 500.0 {
        x += 60.0;
        dispatch(
            slider.handle_pointer(&track, &PointerInput::moved(Point::new(x, 8.0))),
            &mut listener,
        );
        println!("{} {:>5}", draw(&track, &[slider.position()], 41), slider.value());
    }
    dispatch(
        slider.handle_pointer(&track, &PointerInput::up(Point::new(x, 8.0))),
        &mut listener,
    );

    // Keyboard: Home, then a few steps up.
    slider.focus();
    for key in [SliderKey::Home, SliderKey::ArrowUp, SliderKey::ArrowRight] {
        dispatch(slider.key_down(key), &mut listener);
        println!("{key:?}: {}", slider.value());
    }

    // Right-to-left with labelled marks: arrows walk the marks, and
    // ArrowRight moves toward the minimum.
    let config = SliderConfig::new(0.0, 100.0)
        .marks([
            Mark::labeled(0.0, "off"),
            Mark::labeled(30.0, "low"),
            Mark::labeled(70.0, "high"),
            Mark::labeled(100.0, "max"),
        ])
        .step_on_marks(true)
        .direction(Direction::Rtl);
    let mut slider = Slider::with_value(&config, 70.0).expect("valid config");
    let track = slider.track(Rect::new(0.0, 0.0, 400.0, 16.0));
    let mut listener = LogListener::new("fan");
    slider.focus();
    for key in [SliderKey::ArrowRight, SliderKey::ArrowRight, SliderKey::ArrowLeft] {
        dispatch(slider.key_down(key), &mut listener);
        let label = slider.config().marks().label(slider.value()).unwrap_or("?");
        println!(
            "{} {key:?}: {} ({label})",
            draw(&track, &[slider.position()], 41),
            slider.value()
        );
    }
    println!("{} commits", listener.commits());
}
