// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure value math shared by both engines.
//!
//! Everything here is stateless. The functions assume a validated range
//! (`min < max`, `step > 0`); [`SliderConfig::resolve`](crate::SliderConfig::resolve)
//! guarantees that before any engine calls into this module.

use alloc::format;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// Returns where `value` sits on `[min, max]` as a percentage in `[0, 100]`.
///
/// The mapping is linear and clamped. It knows nothing about direction: a
/// right-to-left control mirrors the percentage when placing the handle, see
/// [`Track`](crate::Track).
#[must_use]
pub fn position_of(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 || span.is_nan() {
        return 0.0;
    }
    ((value - min) / span * 100.0).clamp(0.0, 100.0)
}

/// Converts an offset ratio along the track into a value.
///
/// The offset `ratio · (max − min)` is quantized to the nearest multiple of
/// `step`, shifted by `min`, clamped into `[min, max]` and rounded to
/// `precision` decimal digits. A ratio of `0` (or anything at or below it)
/// yields exactly `min`.
#[must_use]
pub fn value_of(ratio: f64, min: f64, max: f64, step: f64, precision: u32) -> f64 {
    if ratio.is_nan() || ratio <= 0.0 {
        return min;
    }
    let raw = min + ratio.min(1.0) * (max - min);
    let value = quantize(raw, min, step).clamp(min, max);
    if value <= min {
        return min;
    }
    if value >= max {
        return max;
    }
    round_to(value, precision)
}

/// Snaps `value` onto the step lattice anchored at `min`.
#[must_use]
pub fn quantize(value: f64, min: f64, step: f64) -> f64 {
    min + ((value - min) / step).round() * step
}

/// Rounds `value` to `precision` decimal digits, half away from zero.
///
/// The decimal point is shifted on the shortest decimal representation of the
/// value rather than by multiplying, so `0.15` rounds to `0.2` at one digit
/// even though its binary approximation is slightly below `0.15`.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let Ok(shifted) = format!("{value}e{precision}").parse::<f64>() else {
        return value;
    };
    let rounded = shifted.round();
    format!("{rounded}e-{precision}").parse().unwrap_or(value)
}

/// Number of decimal digits in the shortest representation of `step`.
///
/// Integral steps give `0`; `0.1` gives `1`; `0.25` gives `2`.
#[must_use]
pub fn derive_precision(step: f64) -> u32 {
    if !step.is_finite() {
        return 0;
    }
    let repr = format!("{step}");
    repr.split_once('.')
        .map_or(0, |(_, fraction)| u32::try_from(fraction.len()).unwrap_or(u32::MAX))
}

/// Returns the mark closest to `value`, or `None` when there are no marks.
///
/// When two marks are equally distant the one encountered first wins; for an
/// ascending sequence that is the smaller mark.
#[must_use]
pub fn closest_mark<I>(value: f64, marks: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(f64, f64)> = None;
    for mark in marks {
        let distance = (mark - value).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((mark, distance)),
        }
    }
    best.map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_clamped_and_linear() {
        assert_eq!(position_of(0.0, 0.0, 100.0), 0.0);
        assert_eq!(position_of(100.0, 0.0, 100.0), 100.0);
        assert_eq!(position_of(25.0, 0.0, 100.0), 25.0);
        assert_eq!(position_of(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(position_of(150.0, 0.0, 100.0), 100.0);
        assert_eq!(position_of(15.0, 10.0, 20.0), 50.0);
    }

    #[test]
    fn position_is_monotonic() {
        let mut last = -1.0;
        for i in 0..=200 {
            let value = -10.0 + f64::from(i) * 0.7;
            let pos = position_of(value, -10.0, 120.0);
            assert!(pos >= last, "position went backwards at {value}");
            last = pos;
        }
    }

    #[test]
    fn degenerate_span_has_zero_position() {
        assert_eq!(position_of(5.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn zero_ratio_is_exactly_min() {
        assert_eq!(value_of(0.0, 0.3, 10.0, 1.0, 0), 0.3);
        assert_eq!(value_of(-0.5, -7.0, 7.0, 2.0, 0), -7.0);
        assert_eq!(value_of(f64::NAN, 1.0, 2.0, 0.1, 1), 1.0);
    }

    #[test]
    fn value_is_quantized_to_step() {
        assert_eq!(value_of(0.26, 0.0, 100.0, 10.0, 0), 30.0);
        assert_eq!(value_of(0.24, 0.0, 100.0, 10.0, 0), 20.0);
        assert_eq!(value_of(0.5, 10.0, 20.0, 3.0, 0), 16.0);
    }

    #[test]
    fn value_never_leaves_range() {
        // 95 is not a multiple of 10, so the last step would overshoot.
        assert_eq!(value_of(1.0, 0.0, 95.0, 10.0, 0), 95.0);
        assert_eq!(value_of(2.0, 0.0, 95.0, 10.0, 0), 95.0);
    }

    #[test]
    fn fractional_steps_round_to_precision() {
        assert_eq!(value_of(0.3, 0.0, 1.0, 0.1, 1), 0.3);
        assert_eq!(value_of(0.7, 0.0, 1.0, 0.1, 1), 0.7);
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round_to(0.15, 1), 0.2);
        assert_eq!(round_to(-0.15, 1), -0.2);
        assert_eq!(round_to(1.005, 2), 1.01);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(42.0, 2), 42.0);
    }

    #[test]
    fn round_passes_non_finite_through() {
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn precision_comes_from_step_fraction() {
        assert_eq!(derive_precision(1.0), 0);
        assert_eq!(derive_precision(10.0), 0);
        assert_eq!(derive_precision(0.1), 1);
        assert_eq!(derive_precision(0.25), 2);
        assert_eq!(derive_precision(0.005), 3);
    }

    #[test]
    fn closest_mark_prefers_first_on_tie() {
        let marks = [0.0, 25.0, 50.0, 75.0, 100.0];
        assert_eq!(closest_mark(60.0, marks), Some(50.0));
        assert_eq!(closest_mark(62.5, marks), Some(50.0));
        assert_eq!(closest_mark(63.0, marks), Some(75.0));
        assert_eq!(closest_mark(-20.0, marks), Some(0.0));
        assert_eq!(closest_mark(500.0, marks), Some(100.0));
    }

    #[test]
    fn closest_mark_on_empty_is_none() {
        assert_eq!(closest_mark(3.0, []), None);
    }

    #[test]
    fn round_trip_stays_within_one_step() {
        let (min, max, step) = (-20.0, 80.0, 2.5);
        let precision = derive_precision(step);
        for i in 0..=400 {
            let v = min + f64::from(i) * 0.25;
            let back = value_of(position_of(v, min, max) / 100.0, min, max, step, precision);
            assert!((back - v).abs() <= step, "{v} came back as {back}");
        }
    }
}
