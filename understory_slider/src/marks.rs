// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete stop points along a slider track.

use alloc::string::String;
use smallvec::SmallVec;

use crate::math;

/// Most controls carry a handful of marks, so keep them inline.
const INLINE_MARKS: usize = 8;

/// A discrete stop point, optionally labelled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mark {
    /// Value of the stop point.
    pub value: f64,
    /// Optional label shown next to the stop point.
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,
}

impl Mark {
    /// Creates an unlabelled mark.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    /// Creates a labelled mark.
    #[must_use]
    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

impl From<f64> for Mark {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Sorted, de-duplicated set of [`Mark`]s for one control.
///
/// Callers may hand marks over in any order. Construction sorts them ascending
/// by value and drops later duplicates, so the first label supplied for a value
/// is the one that is kept. Navigation uses binary search.
///
/// ```rust
/// use understory_slider::{Mark, MarkTable};
///
/// let table = MarkTable::new([Mark::new(50.0), Mark::new(0.0), Mark::labeled(100.0, "max")]);
/// assert_eq!(table.first(), Some(0.0));
/// assert_eq!(table.next(0.0), 50.0);
/// assert_eq!(table.next(100.0), 100.0); // no wraparound
/// assert_eq!(table.label(100.0), Some("max"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkTable {
    marks: SmallVec<[Mark; INLINE_MARKS]>,
}

impl MarkTable {
    /// Builds a table from marks in any order.
    ///
    /// Marks with a NaN value cannot be ordered and are dropped; configuration
    /// validation rejects them before an engine ever builds a table.
    pub fn new<I>(marks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Mark>,
    {
        let mut marks: SmallVec<[Mark; INLINE_MARKS]> = marks
            .into_iter()
            .map(Into::into)
            .filter(|mark: &Mark| !mark.value.is_nan())
            .collect();
        // Stable, so the first occurrence of a value stays first.
        marks.sort_by(|a, b| a.value.total_cmp(&b.value));
        marks.dedup_by(|later, earlier| later.value == earlier.value);
        Self { marks }
    }

    /// Returns `true` if the table holds no marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the number of distinct marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns the marks in ascending order.
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Returns the mark values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.marks.iter().map(|mark| mark.value)
    }

    /// Smallest mark value.
    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.marks.first().map(|mark| mark.value)
    }

    /// Largest mark value.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.marks.last().map(|mark| mark.value)
    }

    /// Smallest mark strictly greater than `value`, or `value` itself if there
    /// is none.
    #[must_use]
    pub fn next(&self, value: f64) -> f64 {
        let idx = self.marks.partition_point(|mark| mark.value <= value);
        self.marks.get(idx).map_or(value, |mark| mark.value)
    }

    /// Largest mark strictly less than `value`, or `value` itself if there is
    /// none.
    #[must_use]
    pub fn previous(&self, value: f64) -> f64 {
        let idx = self.marks.partition_point(|mark| mark.value < value);
        match idx.checked_sub(1) {
            Some(prev) => self.marks[prev].value,
            None => value,
        }
    }

    /// Mark closest to `value`; on a tie the smaller mark wins.
    #[must_use]
    pub fn closest(&self, value: f64) -> Option<f64> {
        math::closest_mark(value, self.values())
    }

    /// Returns `true` if `value` is exactly one of the marks.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.find(value).is_some()
    }

    /// Label of the mark at `value`, if that mark exists and has one.
    #[must_use]
    pub fn label(&self, value: f64) -> Option<&str> {
        self.find(value).and_then(|mark| mark.label.as_deref())
    }

    fn find(&self, value: f64) -> Option<&Mark> {
        self.marks
            .binary_search_by(|mark| mark.value.total_cmp(&value))
            .ok()
            .map(|idx| &self.marks[idx])
    }
}
