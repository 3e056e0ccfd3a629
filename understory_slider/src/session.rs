// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-agnostic pointer input and the interaction session state.
//!
//! ## Usage
//!
//! 1) Measure the track and keep a [`Track`](crate::Track) up to date.
//! 2) Turn each platform pointer event into a [`PointerInput`]. Mouse, pen and
//!    touch all use the same type; only the primary pointer drives a session.
//! 3) Feed it to the engine's `handle_pointer` and act on the returned events.
//!
//! A session starts on [`PointerPhase::Down`] and ends on the first
//! [`PointerPhase::Up`] or [`PointerPhase::Cancel`], wherever the pointer is at
//! that point. Hover ([`PointerPhase::Enter`], [`PointerPhase::Leave`]) is
//! tracked on the side and never touches values.

use kurbo::Point;

/// Phase of a pointer input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed or touch started.
    Down,
    /// Pointer moved.
    Move,
    /// Button released or touch ended.
    Up,
    /// The platform cancelled the pointer.
    Cancel,
    /// Pointer entered the control.
    Enter,
    /// Pointer left the control.
    Leave,
}

/// One pointer input, normalized across mouse, pen and touch.
///
/// `H` identifies a handle: `()` for a [`Slider`](crate::Slider),
/// [`Handle`](crate::Handle) for a [`RangeSlider`](crate::RangeSlider).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput<H = ()> {
    /// What happened.
    pub phase: PointerPhase,
    /// Pointer position in the same coordinate space as the track bounds.
    /// `None` for phases that carry no position.
    pub position: Option<Point>,
    /// Whether this is the primary pointer. Secondary touches are ignored.
    pub primary: bool,
    /// For [`PointerPhase::Down`], the handle the press landed on, if any.
    /// A press that misses every handle seeks on the track.
    pub handle: Option<H>,
}

impl<H> PointerInput<H> {
    fn new(phase: PointerPhase, position: Option<Point>) -> Self {
        Self {
            phase,
            position,
            primary: true,
            handle: None,
        }
    }

    /// A press at `position`.
    #[must_use]
    pub fn down(position: Point) -> Self {
        Self::new(PointerPhase::Down, Some(position))
    }

    /// A move to `position`.
    #[must_use]
    pub fn moved(position: Point) -> Self {
        Self::new(PointerPhase::Move, Some(position))
    }

    /// A release at `position`.
    #[must_use]
    pub fn up(position: Point) -> Self {
        Self::new(PointerPhase::Up, Some(position))
    }

    /// A platform cancellation.
    #[must_use]
    pub fn cancel() -> Self {
        Self::new(PointerPhase::Cancel, None)
    }

    /// The pointer entered the control.
    #[must_use]
    pub fn enter(position: Point) -> Self {
        Self::new(PointerPhase::Enter, Some(position))
    }

    /// The pointer left the control.
    #[must_use]
    pub fn leave() -> Self {
        Self::new(PointerPhase::Leave, None)
    }

    /// Marks the press as landing on `handle`.
    #[must_use]
    pub fn on_handle(mut self, handle: H) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Marks the input as coming from a non-primary pointer.
    #[must_use]
    pub fn secondary(mut self) -> Self {
        self.primary = false;
        self
    }
}

/// Explicit interaction session state.
///
/// Tracks whether a pointer session is in progress, which handle it captured,
/// and whether the pointer hovers the control. Engines own one of these and
/// update it through plain method calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputSession<H> {
    active: bool,
    captured: Option<H>,
    hovered: bool,
}

impl<H> Default for InputSession<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> InputSession<H> {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: false,
            captured: None,
            hovered: false,
        }
    }

    /// Returns `true` while a pointer session is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` while the pointer hovers the control.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a value tooltip should show: while hovering or dragging.
    #[must_use]
    pub fn tooltip_visible(&self) -> bool {
        self.hovered || self.active
    }

    /// Updates hover state.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Starts a session that captured `handle`.
    pub fn begin(&mut self, handle: H) {
        self.active = true;
        self.captured = Some(handle);
    }

    /// Ends the session. Returns `true` if one was in progress, meaning the
    /// caller owes its commit.
    pub fn end(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        self.captured = None;
        was_active
    }
}

impl<H: Copy> InputSession<H> {
    /// Handle captured by the current session.
    #[must_use]
    pub fn captured(&self) -> Option<H> {
        self.captured
    }

    /// Moves the capture to another handle without ending the session.
    ///
    /// Used when the handles swap order mid-drag so the pointer keeps
    /// following the value it grabbed.
    pub fn recapture(&mut self, handle: H) {
        if self.active {
            self.captured = Some(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = InputSession::<u8>::new();
        assert!(!session.is_active());
        assert_eq!(session.captured(), None);
        assert!(!session.tooltip_visible());
    }

    #[test]
    fn begin_and_end() {
        let mut session = InputSession::new();
        session.begin(1_u8);
        assert!(session.is_active());
        assert_eq!(session.captured(), Some(1));
        assert!(session.tooltip_visible());

        assert!(session.end());
        assert!(!session.is_active());
        assert_eq!(session.captured(), None);

        // A second end has no session to close.
        assert!(!session.end());
    }

    #[test]
    fn recapture_only_during_session() {
        let mut session = InputSession::new();
        session.recapture(1_u8);
        assert_eq!(session.captured(), None);

        session.begin(0);
        session.recapture(1);
        assert_eq!(session.captured(), Some(1));
    }

    #[test]
    fn hover_is_independent_of_session() {
        let mut session = InputSession::<()>::new();
        session.set_hovered(true);
        assert!(session.is_hovered());
        assert!(!session.is_active());
        assert!(session.tooltip_visible());

        session.begin(());
        session.set_hovered(false);
        assert!(session.tooltip_visible());
        assert!(session.end());
        assert!(!session.tooltip_visible());
    }

    #[test]
    fn pointer_input_builders() {
        let down = PointerInput::<u8>::down(Point::new(1.0, 2.0)).on_handle(1);
        assert_eq!(down.phase, PointerPhase::Down);
        assert_eq!(down.handle, Some(1));
        assert!(down.primary);

        let touch = PointerInput::<u8>::moved(Point::new(3.0, 4.0)).secondary();
        assert!(!touch.primary);
        assert_eq!(PointerInput::<u8>::cancel().position, None);
    }
}
