// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-handle range slider engine.
//!
//! ## Moving a handle
//!
//! Every pointer or keyboard change funnels into one move operation that
//! takes a handle and a candidate value.
//!
//! Without step-on-marks, the spacing bounds push or pull the other handle:
//! - moving `Low` closer than `min_range` to `High` pushes `High` up, clamped
//!   at `max`; if even `max` is too close the move is rejected;
//! - moving `Low` farther than `max_range` from `High` pulls `High` along;
//! - `High` mirrors both rules against `Low`, clamped at `min`.
//!
//! With step-on-marks, the candidate snaps to the closest mark first:
//! - both handles may not share the first or the last mark;
//! - landing exactly on the other handle pushes it one mark away, past the
//!   moving handle;
//! - a result that breaks `min_range` or `max_range` is rejected.
//!
//! Afterwards both values are rounded and, if they crossed, swapped. The
//! pointer capture and keyboard focus follow the value that moved, so a drag
//! across the other handle keeps moving the grabbed value.

use kurbo::Rect;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use crate::config::{Direction, ResolvedConfig, SliderConfig};
use crate::error::ConfigError;
use crate::event::{Events, SliderEvent};
use crate::keys::SliderKey;
use crate::session::{InputSession, PointerInput, PointerPhase};
use crate::track::Track;

/// One of the two handles of a [`RangeSlider`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The handle holding the smaller value (ordinal `0`).
    Low,
    /// The handle holding the larger value (ordinal `1`).
    High,
}

impl Handle {
    /// Ordinal of the handle: `0` for [`Handle::Low`], `1` for [`Handle::High`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    /// Handle for an ordinal, if it is `0` or `1`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Low),
            1 => Some(Self::High),
            _ => None,
        }
    }

    /// The other handle.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// A control selecting an ordered pair `[low, high]` with two handles.
///
/// The pair always satisfies `low <= high`, stays inside `[min, max]`, and
/// honors `min_range <= high - low <= max_range` for whichever bounds are
/// configured. Events carry the full ordered pair.
///
/// ```rust
/// use understory_slider::{Handle, RangeSlider, SliderConfig, SliderEvent};
///
/// let config = SliderConfig::new(0.0, 100.0).min_range(10.0);
/// let mut range = RangeSlider::with_values(&config, [20.0, 30.0]).unwrap();
///
/// range.grab(Handle::Low);
/// let events = range.drag_to(0.25);
/// // The high handle is pushed to keep the minimum distance.
/// assert_eq!(events.as_slice(), [SliderEvent::Input([25.0, 35.0])]);
/// assert_eq!(range.release().as_slice(), [SliderEvent::Commit([25.0, 35.0])]);
/// ```
#[derive(Clone, Debug)]
pub struct RangeSlider {
    config: ResolvedConfig,
    values: [f64; 2],
    direction: Direction,
    disabled: bool,
    focused: Option<Handle>,
    session: InputSession<Handle>,
}

impl RangeSlider {
    /// Creates a range slider spanning the whole range, narrowed to
    /// `max_range` if one is set.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SliderConfig::resolve`].
    pub fn new(config: &SliderConfig) -> Result<Self, ConfigError> {
        Self::with_values(config, [config.min, config.max])
    }

    /// Creates a range slider with initial values.
    ///
    /// The values are clamped, ordered and adjusted to the spacing bounds.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SliderConfig::resolve`].
    pub fn with_values(config: &SliderConfig, values: [f64; 2]) -> Result<Self, ConfigError> {
        let resolved = config.resolve()?;
        let values = normalize(&resolved, values);
        Ok(Self {
            config: resolved,
            values,
            direction: config.direction,
            disabled: config.disabled,
            focused: None,
            session: InputSession::new(),
        })
    }

    /// Current `[low, high]` pair.
    #[must_use]
    pub fn values(&self) -> [f64; 2] {
        self.values
    }

    /// Value of one handle.
    #[must_use]
    pub fn value(&self, handle: Handle) -> f64 {
        self.values[handle.index()]
    }

    /// Track percentages of both handles.
    #[must_use]
    pub fn positions(&self) -> [f64; 2] {
        self.values.map(|value| self.config.position_of(value))
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Current direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Changes the direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// A [`Track`] over `bounds` using this slider's direction.
    #[must_use]
    pub fn track(&self, bounds: Rect) -> Track {
        Track::new(bounds, self.direction)
    }

    /// Returns `true` if the slider ignores input.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables the slider.
    ///
    /// Disabling during a drag ends the session and returns its commit.
    pub fn set_disabled(&mut self, disabled: bool) -> Events<[f64; 2]> {
        self.disabled = disabled;
        let mut events = Events::new();
        if disabled && self.session.end() {
            log::debug!("range slider disabled mid-drag, committing {:?}", self.values);
            events.push(SliderEvent::Commit(self.values));
        }
        events
    }

    /// The handle with keyboard focus.
    #[must_use]
    pub fn focused(&self) -> Option<Handle> {
        self.focused
    }

    /// Gives keyboard focus to `handle`.
    pub fn focus(&mut self, handle: Handle) {
        self.focused = Some(handle);
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Returns `true` while a pointer session is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// Returns `true` while `handle` is being dragged.
    #[must_use]
    pub fn is_dragging_handle(&self, handle: Handle) -> bool {
        self.session.captured() == Some(handle)
    }

    /// Handle captured by the current drag.
    #[must_use]
    pub fn captured(&self) -> Option<Handle> {
        self.session.captured()
    }

    /// Returns `true` while the pointer hovers the control.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.session.is_hovered()
    }

    /// Whether value tooltips should show.
    #[must_use]
    pub fn tooltip_visible(&self) -> bool {
        !self.disabled && self.session.tooltip_visible()
    }

    /// The interaction session state.
    #[must_use]
    pub fn session(&self) -> &InputSession<Handle> {
        &self.session
    }

    /// Replaces both values from outside.
    ///
    /// The pair is clamped, ordered and adjusted to the spacing bounds.
    /// Rejected while a session is in progress; returns `true` if applied.
    pub fn set_values(&mut self, values: [f64; 2]) -> bool {
        if self.session.is_active() {
            log::debug!("ignoring external range values {values:?} during a drag");
            return false;
        }
        self.values = normalize(&self.config, values);
        true
    }

    /// The handle a track press at `value` should move.
    ///
    /// `Low` only wins when it is strictly closer; ties go to `High`.
    #[must_use]
    pub fn closest_handle(&self, value: f64) -> Handle {
        let [low, high] = self.values;
        if (value - low).abs() < (value - high).abs() {
            Handle::Low
        } else {
            Handle::High
        }
    }

    /// Starts a drag from `handle` itself, without seeking.
    pub fn grab(&mut self, handle: Handle) -> Events<[f64; 2]> {
        if self.disabled || self.session.is_active() {
            return Events::new();
        }
        self.focused = Some(handle);
        self.session.begin(handle);
        Events::new()
    }

    /// Presses the track at offset `ratio`: picks the closer handle, seeks it
    /// there and starts a drag.
    pub fn press_track(&mut self, ratio: f64) -> Events<[f64; 2]> {
        let mut events = Events::new();
        if self.disabled || self.session.is_active() {
            return events;
        }
        let value = self.config.pointer_value(ratio);
        let handle = self.closest_handle(value);
        self.focused = Some(handle);
        self.session.begin(handle);
        self.move_handle(handle, value, &mut events);
        events
    }

    /// Moves the captured handle to offset `ratio`.
    pub fn drag_to(&mut self, ratio: f64) -> Events<[f64; 2]> {
        let mut events = Events::new();
        if self.disabled {
            return events;
        }
        if let Some(handle) = self.session.captured() {
            let value = self.config.pointer_value(ratio);
            self.move_handle(handle, value, &mut events);
        }
        events
    }

    /// Ends the active drag and commits the pair.
    pub fn release(&mut self) -> Events<[f64; 2]> {
        let mut events = Events::new();
        if self.session.end() {
            events.push(SliderEvent::Commit(self.values));
        }
        events
    }

    /// Handles a navigation key for the focused handle.
    ///
    /// The new value goes through the same spacing and mark rules as a drag.
    /// A handled key emits a live update if the pair changed, then a commit.
    pub fn key_down(&mut self, key: SliderKey) -> Events<[f64; 2]> {
        let mut events = Events::new();
        let Some(handle) = self.focused else {
            return events;
        };
        if self.disabled || self.session.is_active() {
            log::trace!("range slider ignored {key:?}");
            return events;
        }
        let target = self
            .config
            .key_target(self.values[handle.index()], key.intent(self.direction));
        self.move_handle(handle, target, &mut events);
        events.push(SliderEvent::Commit(self.values));
        events
    }

    /// Routes a normalized pointer input through `track`.
    pub fn handle_pointer(
        &mut self,
        track: &Track,
        input: &PointerInput<Handle>,
    ) -> Events<[f64; 2]> {
        if self.disabled || !input.primary {
            return Events::new();
        }
        let ratio = input.position.and_then(|position| track.ratio_at(position));
        match input.phase {
            PointerPhase::Down => match (input.handle, ratio) {
                (Some(handle), _) => self.grab(handle),
                (None, Some(ratio)) => self.press_track(ratio),
                (None, None) => Events::new(),
            },
            PointerPhase::Move => {
                if self.session.is_active() {
                    ratio.map_or_else(Events::new, |ratio| self.drag_to(ratio))
                } else {
                    if let Some(position) = input.position {
                        self.session.set_hovered(track.contains(position));
                    }
                    Events::new()
                }
            }
            PointerPhase::Up | PointerPhase::Cancel => self.release(),
            PointerPhase::Enter => {
                self.session.set_hovered(true);
                Events::new()
            }
            PointerPhase::Leave => {
                self.session.set_hovered(false);
                Events::new()
            }
        }
    }

    fn move_handle(&mut self, handle: Handle, candidate: f64, events: &mut Events<[f64; 2]>) {
        let next = if self.config.step_on_marks() {
            self.resolve_on_marks(handle, candidate)
        } else {
            self.resolve_continuous(handle, candidate)
        };
        let Some(mut next) = next else {
            log::trace!("rejected moving {handle:?} to {candidate}");
            return;
        };

        let mut moved = handle;
        if next[0] > next[1] {
            next.swap(0, 1);
            moved = handle.other();
        }
        if moved != handle {
            self.session.recapture(moved);
            if self.focused == Some(handle) {
                self.focused = Some(moved);
            }
        }
        if next != self.values {
            self.values = next;
            events.push(SliderEvent::Input(next));
        }
    }

    fn resolve_continuous(&self, handle: Handle, value: f64) -> Option<[f64; 2]> {
        let config = &self.config;
        let (min, max) = (config.min(), config.max());
        let mut next = self.values;
        next[handle.index()] = value;

        match handle {
            Handle::Low => {
                if let Some(min_range) = config.min_range()
                    && next[1] - value < min_range
                {
                    if value > max - min_range {
                        return None;
                    }
                    next[1] = (value + min_range).min(max);
                }
                if let Some(max_range) = config.max_range()
                    && next[1] - value > max_range
                {
                    next[1] = value + max_range;
                }
            }
            Handle::High => {
                if let Some(min_range) = config.min_range()
                    && value - next[0] < min_range
                {
                    if value < min + min_range {
                        return None;
                    }
                    next[0] = (value - min_range).max(min);
                }
                if let Some(max_range) = config.max_range()
                    && value - next[0] > max_range
                {
                    next[0] = value - max_range;
                }
            }
        }

        // Without a minimum spacing the handles may cross. Once ordered, the
        // moved value is fixed and the other one is pulled within max_range.
        if next[0] > next[1]
            && let Some(max_range) = config.max_range()
            && next[0] - next[1] > max_range
        {
            let other = handle.other().index();
            next[other] = match handle {
                Handle::Low => value - max_range,
                Handle::High => value + max_range,
            };
        }

        // Rounding can undo a push or pull smaller than the precision.
        let next = next.map(|v| config.round(v));
        spacing_holds(config, next).then_some(next)
    }

    fn resolve_on_marks(&self, handle: Handle, candidate: f64) -> Option<[f64; 2]> {
        let config = &self.config;
        let marks = config.marks();
        let snapped = config.snap(candidate);
        let current = self.values[handle.index()];
        let other = self.values[handle.other().index()];

        if other == snapped && (marks.last() == Some(snapped) || marks.first() == Some(snapped)) {
            return None;
        }

        let mut next = self.values;
        next[handle.index()] = snapped;
        if snapped == other {
            next[handle.other().index()] = if snapped > current {
                marks.previous(other)
            } else {
                marks.next(other)
            };
        }

        spacing_holds(config, next).then_some(next)
    }
}

/// Whether a pair, in either order, honors the configured spacing bounds.
///
/// Differences of decimal values pick up binary error (`0.7 - 0.4` is just
/// under `0.3`), so the bounds get a tolerance far below any usable precision.
fn spacing_holds(config: &ResolvedConfig, pair: [f64; 2]) -> bool {
    let spacing = (pair[1] - pair[0]).abs();
    let tolerance = (config.max() - config.min()) * 1e-9;
    !(config
        .min_range()
        .is_some_and(|min_range| spacing < min_range - tolerance)
        || config
            .max_range()
            .is_some_and(|max_range| spacing > max_range + tolerance))
}

/// Clamps, orders and spaces an externally supplied pair.
fn normalize(config: &ResolvedConfig, values: [f64; 2]) -> [f64; 2] {
    let (min, max) = (config.min(), config.max());
    let [a, b] = values;
    let a = if a.is_nan() { min } else { config.clamp(a) };
    let b = if b.is_nan() { max } else { config.clamp(b) };
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if config.step_on_marks() {
        return normalize_on_marks(config, [config.snap(low), config.snap(high)]);
    }
    let (mut low, mut high) = (low, high);

    if let Some(min_range) = config.min_range()
        && high - low < min_range
    {
        high = (low + min_range).min(max);
        low = (high - min_range).max(min);
    }
    if let Some(max_range) = config.max_range()
        && high - low > max_range
    {
        high = low + max_range;
    }
    [low, high]
}

/// Moves a snapped pair onto marks that satisfy the sharing and spacing rules.
///
/// Both handles may not share the first or the last mark. When the spacing
/// bounds cannot be met exactly, the high handle moves first, then the low one;
/// a table too sparse for either keeps the snapped pair.
fn normalize_on_marks(config: &ResolvedConfig, [mut low, mut high]: [f64; 2]) -> [f64; 2] {
    let marks = config.marks();
    if low == high {
        if marks.last() == Some(high) {
            low = marks.previous(high);
        } else if marks.first() == Some(low) {
            high = marks.next(low);
        }
    }

    let values = marks.marks();
    if let Some(min_range) = config.min_range()
        && high - low < min_range
    {
        if let Some(mark) = values.iter().find(|m| m.value - low >= min_range) {
            high = mark.value;
        } else if let Some(mark) = values.iter().rev().find(|m| high - m.value >= min_range) {
            low = mark.value;
        }
    }
    if let Some(max_range) = config.max_range()
        && high - low > max_range
        && let Some(mark) = values
            .iter()
            .rev()
            .find(|m| m.value >= low && m.value - low <= max_range)
    {
        high = mark.value;
    }
    [low, high]
}
