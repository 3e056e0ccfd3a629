// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use thiserror::Error;

/// Error returned when a [`SliderConfig`](crate::SliderConfig) cannot describe a
/// working control.
///
/// These are only produced at construction time. Once an engine exists, every
/// other condition (out-of-range values, spacing violations, input while
/// disabled) is resolved internally without an error.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// `min` is not strictly less than `max`.
    #[error("range is empty: min ({min}) must be less than max ({max})")]
    EmptyRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// One of `min`, `max`, `step`, `min_range` or `max_range` is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// `step` is zero or negative.
    #[error("step must be positive, got {0}")]
    InvalidStep(f64),
    /// `min_range` is negative.
    #[error("min_range must not be negative, got {0}")]
    NegativeMinRange(f64),
    /// `max_range` is negative.
    #[error("max_range must not be negative, got {0}")]
    NegativeMaxRange(f64),
    /// `min_range` is larger than `max_range`.
    #[error("min_range ({min_range}) exceeds max_range ({max_range})")]
    InvertedSpacing {
        /// Configured minimum separation.
        min_range: f64,
        /// Configured maximum separation.
        max_range: f64,
    },
    /// `min_range` is larger than the whole `max - min` span, so no pair of
    /// handle values could satisfy it.
    #[error("min_range ({min_range}) exceeds the span of the range ({span})")]
    MinRangeExceedsSpan {
        /// Configured minimum separation.
        min_range: f64,
        /// `max - min`.
        span: f64,
    },
    /// Step-on-marks was requested but no marks were supplied.
    #[error("step_on_marks requires at least one mark")]
    EmptyMarks,
    /// A mark value is NaN or infinite.
    #[error("mark value must be finite")]
    NonFiniteMark,
    /// A mark value lies outside `[min, max]`.
    #[error("mark {value} lies outside [{min}, {max}]")]
    MarkOutOfRange {
        /// The offending mark value.
        value: f64,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
}
