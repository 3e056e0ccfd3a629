// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: headless engines for slider and range slider controls.
//!
//! This crate owns the interaction logic of a horizontal value picker and
//! leaves rendering to the host. It provides:
//!
//! - [`Slider`]: one handle selecting a single value.
//! - [`RangeSlider`]: two handles selecting an ordered `[low, high]` pair with
//!   optional minimum and maximum spacing.
//! - [`math`]: pure value math (percent mapping, step quantization, precision
//!   rounding and closest-mark lookup).
//! - [`MarkTable`]: sorted discrete stops with optional labels.
//! - [`Track`] and [`PointerInput`]: device-agnostic pointer input measured
//!   against the track bounds.
//! - [`SliderKey`]: keyboard navigation with right-to-left aware arrows.
//!
//! ## Values and events
//!
//! Engines hold their value and answer every input with the [`Events`] it
//! produced: a [`SliderEvent::Input`] for each live change and exactly one
//! [`SliderEvent::Commit`] when a pointer session or key press finishes.
//! Forward them to a [`SliderListener`] with [`dispatch`], or match on them.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_slider::{PointerInput, Slider, SliderConfig, SliderEvent};
//!
//! let config = SliderConfig::new(0.0, 100.0).step(10.0);
//! let mut slider = Slider::new(&config).unwrap();
//! let track = slider.track(Rect::new(0.0, 0.0, 200.0, 16.0));
//!
//! // Press the track a quarter of the way in: the value seeks there.
//! let events = slider.handle_pointer(&track, &PointerInput::down(Point::new(50.0, 8.0)));
//! assert_eq!(events.as_slice(), [SliderEvent::Input(30.0)]);
//!
//! // Dragging past the end pins the value at the maximum.
//! slider.handle_pointer(&track, &PointerInput::moved(Point::new(500.0, 8.0)));
//! let events = slider.handle_pointer(&track, &PointerInput::up(Point::new(500.0, 8.0)));
//! assert_eq!(events.as_slice(), [SliderEvent::Commit(100.0)]);
//! ```
//!
//! ## Marks
//!
//! With `step_on_marks`, pointer values snap to the closest mark and arrow
//! keys walk from mark to mark:
//!
//! ```rust
//! use understory_slider::{Slider, SliderConfig, SliderKey};
//!
//! let config = SliderConfig::new(0.0, 100.0)
//!     .marks([0.0, 25.0, 50.0, 100.0])
//!     .step_on_marks(true);
//! let mut slider = Slider::with_value(&config, 25.0).unwrap();
//! slider.focus();
//!
//! slider.key_down(SliderKey::ArrowRight);
//! assert_eq!(slider.value(), 50.0);
//! slider.press_track(0.62);
//! slider.release();
//! assert_eq!(slider.value(), 50.0);
//! ```
//!
//! ## Range constraints
//!
//! A [`RangeSlider`] keeps `low <= high`. With `min_range`/`max_range` set,
//! dragging one handle pushes or pulls the other; a move that cannot be
//! satisfied is dropped. See the [`dual`] module docs for the exact rules.
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` float math.
//! - `ui_events_adapter` (default): [`adapters::ui_events`] translates
//!   [`ui-events`](https://docs.rs/ui-events) pointer and keyboard events.
//! - `serde`: serialization for [`SliderConfig`], [`Mark`] and [`Direction`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod config;
pub mod dual;
mod error;
mod event;
mod keys;
mod marks;
pub mod math;
mod session;
mod single;
mod track;

pub use config::{Direction, ResolvedConfig, SliderConfig};
pub use dual::{Handle, RangeSlider};
pub use error::ConfigError;
pub use event::{Callbacks, Events, SliderEvent, SliderListener, dispatch};
pub use keys::{KeyIntent, SliderKey};
pub use marks::{Mark, MarkTable};
pub use session::{InputSession, PointerInput, PointerPhase};
pub use single::Slider;
pub use track::Track;
