// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control configuration and its validated form.

use alloc::vec::Vec;

use crate::error::ConfigError;
use crate::keys::KeyIntent;
use crate::marks::{Mark, MarkTable};
use crate::math;

/// Which screen edge holds the minimum value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Minimum at the left edge; `ArrowRight` increases.
    #[default]
    Ltr,
    /// Minimum at the right edge; `ArrowRight` decreases.
    Rtl,
}

/// Configuration shared by [`Slider`](crate::Slider) and
/// [`RangeSlider`](crate::RangeSlider).
///
/// Fields are public so a host can fill them from its own settings; the fluent
/// setters are a shorthand for the same thing. Nothing is checked until an
/// engine is constructed, at which point [`SliderConfig::resolve`] runs once.
///
/// ```rust
/// use understory_slider::{Direction, SliderConfig};
///
/// let config = SliderConfig::new(0.0, 1.0)
///     .step(0.05)
///     .direction(Direction::Rtl);
/// let resolved = config.resolve().unwrap();
/// assert_eq!(resolved.precision(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Smallest selectable value.
    pub min: f64,
    /// Largest selectable value.
    pub max: f64,
    /// Quantization step for pointer and keyboard input.
    pub step: f64,
    /// Decimal digits to round to; derived from `step` when `None`.
    pub precision: Option<u32>,
    /// Discrete stop points, in any order.
    pub marks: Vec<Mark>,
    /// Snap to marks instead of to `step`.
    pub step_on_marks: bool,
    /// Smallest allowed distance between the two handles of a range slider.
    pub min_range: Option<f64>,
    /// Largest allowed distance between the two handles of a range slider.
    pub max_range: Option<f64>,
    /// Initial direction; can be changed later on the engine.
    pub direction: Direction,
    /// Initial disabled state; can be changed later on the engine.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

impl SliderConfig {
    /// Creates a configuration over `[min, max]` with a step of `1`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: 1.0,
            precision: None,
            marks: Vec::new(),
            step_on_marks: false,
            min_range: None,
            max_range: None,
            direction: Direction::Ltr,
            disabled: false,
        }
    }

    /// Sets the quantization step.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets an explicit precision instead of deriving it from the step.
    #[must_use]
    pub fn precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Replaces the marks.
    #[must_use]
    pub fn marks<I>(mut self, marks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Mark>,
    {
        self.marks = marks.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one mark.
    #[must_use]
    pub fn mark(mut self, mark: impl Into<Mark>) -> Self {
        self.marks.push(mark.into());
        self
    }

    /// Enables or disables snapping to marks.
    #[must_use]
    pub fn step_on_marks(mut self, enabled: bool) -> Self {
        self.step_on_marks = enabled;
        self
    }

    /// Sets the minimum handle separation for range sliders.
    #[must_use]
    pub fn min_range(mut self, min_range: f64) -> Self {
        self.min_range = Some(min_range);
        self
    }

    /// Sets the maximum handle separation for range sliders.
    #[must_use]
    pub fn max_range(mut self, max_range: f64) -> Self {
        self.max_range = Some(max_range);
        self
    }

    /// Sets the initial direction.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the initial disabled state.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first problem found.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let resolved = self.validate();
        if let Err(err) = &resolved {
            log::debug!("rejecting slider configuration: {err}");
        }
        resolved
    }

    fn validate(&self) -> Result<ResolvedConfig, ConfigError> {
        let Self {
            min,
            max,
            step,
            min_range,
            max_range,
            ..
        } = *self;

        for (field, value) in [("min", min), ("max", max), ("step", step)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if min >= max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }

        if let Some(min_range) = min_range {
            if !min_range.is_finite() {
                return Err(ConfigError::NonFinite { field: "min_range" });
            }
            if min_range < 0.0 {
                return Err(ConfigError::NegativeMinRange(min_range));
            }
            if min_range > max - min {
                return Err(ConfigError::MinRangeExceedsSpan {
                    min_range,
                    span: max - min,
                });
            }
        }
        if let Some(max_range) = max_range {
            if !max_range.is_finite() {
                return Err(ConfigError::NonFinite { field: "max_range" });
            }
            if max_range < 0.0 {
                return Err(ConfigError::NegativeMaxRange(max_range));
            }
        }
        if let (Some(min_range), Some(max_range)) = (min_range, max_range)
            && min_range > max_range
        {
            return Err(ConfigError::InvertedSpacing {
                min_range,
                max_range,
            });
        }

        for mark in &self.marks {
            if !mark.value.is_finite() {
                return Err(ConfigError::NonFiniteMark);
            }
            if mark.value < min || mark.value > max {
                return Err(ConfigError::MarkOutOfRange {
                    value: mark.value,
                    min,
                    max,
                });
            }
        }
        if self.step_on_marks && self.marks.is_empty() {
            return Err(ConfigError::EmptyMarks);
        }

        Ok(ResolvedConfig {
            min,
            max,
            step,
            precision: self
                .precision
                .unwrap_or_else(|| math::derive_precision(step)),
            marks: MarkTable::new(self.marks.iter().cloned()),
            step_on_marks: self.step_on_marks,
            min_range,
            max_range,
        })
    }
}

/// A validated [`SliderConfig`].
///
/// Holds the numeric contract both engines work against. Direction and the
/// disabled flag are runtime state and live on the engines instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    min: f64,
    max: f64,
    step: f64,
    precision: u32,
    marks: MarkTable,
    step_on_marks: bool,
    min_range: Option<f64>,
    max_range: Option<f64>,
}

impl ResolvedConfig {
    /// Smallest selectable value.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest selectable value.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Quantization step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Decimal digits values are rounded to.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// The sorted mark table.
    #[must_use]
    pub fn marks(&self) -> &MarkTable {
        &self.marks
    }

    /// Whether values snap to marks rather than to the step.
    #[must_use]
    pub fn step_on_marks(&self) -> bool {
        self.step_on_marks
    }

    /// Minimum handle separation, if constrained.
    #[must_use]
    pub fn min_range(&self) -> Option<f64> {
        self.min_range
    }

    /// Maximum handle separation, if constrained.
    #[must_use]
    pub fn max_range(&self) -> Option<f64> {
        self.max_range
    }

    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Rounds `value` to the configured precision.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        math::round_to(value, self.precision)
    }

    /// Percentage of the track at which `value` sits.
    #[must_use]
    pub fn position_of(&self, value: f64) -> f64 {
        math::position_of(value, self.min, self.max)
    }

    /// Step-quantized value at an offset ratio along the track.
    #[must_use]
    pub fn value_at(&self, ratio: f64) -> f64 {
        math::value_of(ratio, self.min, self.max, self.step, self.precision)
    }

    /// Value a pointer at `ratio` selects.
    ///
    /// When stepping on marks, the unquantized offset is snapped to the closest
    /// mark, so `step` plays no part; otherwise this is
    /// [`value_at`](Self::value_at).
    #[must_use]
    pub fn pointer_value(&self, ratio: f64) -> f64 {
        if !self.step_on_marks {
            return self.value_at(ratio);
        }
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        self.snap(self.min + ratio * (self.max - self.min))
    }

    /// Snaps `value` to the closest mark when stepping on marks; otherwise
    /// returns it unchanged.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        if self.step_on_marks {
            self.marks.closest(value).unwrap_or(value)
        } else {
            value
        }
    }

    /// Value a key intent moves `current` to, before any handle constraints.
    #[must_use]
    pub fn key_target(&self, current: f64, intent: KeyIntent) -> f64 {
        let target = if self.step_on_marks {
            match intent {
                KeyIntent::Increase => self.marks.next(current),
                KeyIntent::Decrease => self.marks.previous(current),
                KeyIntent::ToMin => self.marks.first().unwrap_or(self.min),
                KeyIntent::ToMax => self.marks.last().unwrap_or(self.max),
            }
        } else {
            match intent {
                KeyIntent::Increase => current + self.step,
                KeyIntent::Decrease => current - self.step,
                KeyIntent::ToMin => self.min,
                KeyIntent::ToMax => self.max,
            }
        };
        self.round(self.clamp(target))
    }
}
