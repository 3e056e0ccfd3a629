// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the slider demos.

use std::fmt::Debug;

use understory_slider::{SliderListener, Track};

/// Logs every event under a name.
#[derive(Debug)]
pub struct LogListener {
    name: &'static str,
    commits: usize,
}

impl LogListener {
    /// Creates a listener that tags its log lines with `name`.
    pub fn new(name: &'static str) -> Self {
        Self { name, commits: 0 }
    }

    /// Number of commits seen so far.
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl<V: Debug> SliderListener<V> for LogListener {
    fn on_input(&mut self, value: V) {
        log::info!("{}: input {value:?}", self.name);
    }

    fn on_commit(&mut self, value: V) {
        self.commits += 1;
        log::info!("{}: commit {value:?}", self.name);
    }
}

/// Draws handle positions (in percent) on a one-line text track.
///
/// Uses the track's direction, so a right-to-left track draws its minimum on
/// the right. A track without width draws every handle in the first column.
pub fn draw(track: &Track, positions: &[f64], columns: usize) -> String {
    let Some(last) = columns.checked_sub(1) else {
        return String::from("[]");
    };
    let mut cells = vec!['-'; columns];
    let bounds = track.bounds();
    for &percent in positions {
        let x = track.x_at_percent(percent);
        let t = if bounds.width() > 0.0 {
            ((x - bounds.x0) / bounds.width()).clamp(0.0, 1.0)
        } else {
            0.0
        };
        // NaN percentages land in the first column too.
        let t = if t.is_nan() { 0.0 } else { t };
        let column = (t * last as f64).round() as usize;
        cells[column] = 'O';
    }
    format!("[{}]", cells.into_iter().collect::<String>())
}
