// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry: pointer positions to offset ratios and back.

use kurbo::{Point, Rect};

use crate::config::Direction;

/// Measured track geometry.
///
/// `Track` is the only place where direction turns into geometry: it converts
/// pointer positions into offset ratios (`0` at the minimum end, `1` at the
/// maximum end) and percentages back into an x coordinate for placing a
/// handle. Everything past it works in direction-free value space.
///
/// Only the horizontal extent of the bounds is used for value mapping; the
/// vertical extent matters only for [`Track::contains`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    bounds: Rect,
    direction: Direction,
}

impl Track {
    /// Creates a track over `bounds` in view coordinates.
    #[must_use]
    pub fn new(bounds: Rect, direction: Direction) -> Self {
        Self {
            bounds: bounds.abs(),
            direction,
        }
    }

    /// Returns the track bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replaces the track bounds, typically after a layout pass.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds.abs();
    }

    /// Returns the direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sets the direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Offset ratio in `[0, 1]` of `point` along the track, measured from the
    /// minimum end.
    ///
    /// Points beyond either end clamp to it, so a drag that leaves the control
    /// keeps pinning the value at the nearest extreme. Returns `None` while the
    /// track has no width (for example before the first layout).
    #[must_use]
    pub fn ratio_at(&self, point: Point) -> Option<f64> {
        let width = self.bounds.width();
        if width <= 0.0 {
            return None;
        }
        let ratio = ((point.x - self.bounds.x0) / width).clamp(0.0, 1.0);
        Some(match self.direction {
            Direction::Ltr => ratio,
            Direction::Rtl => 1.0 - ratio,
        })
    }

    /// X coordinate for a handle at `percent` of the range.
    #[must_use]
    pub fn x_at_percent(&self, percent: f64) -> f64 {
        let ratio = (percent / 100.0).clamp(0.0, 1.0);
        let ratio = match self.direction {
            Direction::Ltr => ratio,
            Direction::Rtl => 1.0 - ratio,
        };
        self.bounds.x0 + ratio * self.bounds.width()
    }

    /// Returns `true` if `point` lies within the track bounds.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::Track;
    use crate::config::Direction;

    fn track(direction: Direction) -> Track {
        Track::new(Rect::new(100.0, 0.0, 300.0, 20.0), direction)
    }

    #[test]
    fn ltr_ratio_grows_to_the_right() {
        let t = track(Direction::Ltr);
        assert_eq!(t.ratio_at(Point::new(100.0, 10.0)), Some(0.0));
        assert_eq!(t.ratio_at(Point::new(150.0, 10.0)), Some(0.25));
        assert_eq!(t.ratio_at(Point::new(300.0, 10.0)), Some(1.0));
    }

    #[test]
    fn rtl_ratio_grows_to_the_left() {
        let t = track(Direction::Rtl);
        assert_eq!(t.ratio_at(Point::new(100.0, 10.0)), Some(1.0));
        assert_eq!(t.ratio_at(Point::new(150.0, 10.0)), Some(0.75));
        assert_eq!(t.ratio_at(Point::new(300.0, 10.0)), Some(0.0));
    }

    #[test]
    fn positions_outside_clamp_to_the_ends() {
        let t = track(Direction::Ltr);
        assert_eq!(t.ratio_at(Point::new(-40.0, 500.0)), Some(0.0));
        assert_eq!(t.ratio_at(Point::new(900.0, -500.0)), Some(1.0));
    }

    #[test]
    fn zero_width_has_no_ratio() {
        let t = Track::new(Rect::new(5.0, 0.0, 5.0, 10.0), Direction::Ltr);
        assert_eq!(t.ratio_at(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn inverted_bounds_are_normalized() {
        let t = Track::new(Rect::new(300.0, 20.0, 100.0, 0.0), Direction::Ltr);
        assert_eq!(t.ratio_at(Point::new(150.0, 10.0)), Some(0.25));
    }

    #[test]
    fn placement_mirrors_ratio() {
        let ltr = track(Direction::Ltr);
        let rtl = track(Direction::Rtl);
        assert_eq!(ltr.x_at_percent(25.0), 150.0);
        assert_eq!(rtl.x_at_percent(25.0), 250.0);
        assert_eq!(ltr.x_at_percent(0.0), 100.0);
        assert_eq!(rtl.x_at_percent(0.0), 300.0);
    }
}
