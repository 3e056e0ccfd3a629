// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-handle slider engine.

use kurbo::Rect;

use crate::config::{Direction, ResolvedConfig, SliderConfig};
use crate::error::ConfigError;
use crate::event::{Events, SliderEvent};
use crate::keys::SliderKey;
use crate::session::{InputSession, PointerInput, PointerPhase};
use crate::track::Track;

/// A continuous-value control with one handle.
///
/// The engine is either idle or dragging. Pointer input moves the value
/// through a session that ends in exactly one commit; keyboard input steps
/// the value and commits immediately.
///
/// ```rust
/// use understory_slider::{Slider, SliderConfig, SliderEvent, SliderKey};
///
/// let config = SliderConfig::new(0.0, 100.0).step(10.0);
/// let mut slider = Slider::with_value(&config, 20.0).unwrap();
/// slider.focus();
///
/// let events = slider.key_down(SliderKey::ArrowRight);
/// assert_eq!(events.as_slice(), [SliderEvent::Input(30.0), SliderEvent::Commit(30.0)]);
///
/// // Press the track at 75% and drag to 90% before letting go.
/// slider.press_track(0.75);
/// slider.drag_to(0.9);
/// let events = slider.release();
/// assert_eq!(events.as_slice(), [SliderEvent::Commit(90.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct Slider {
    config: ResolvedConfig,
    value: f64,
    direction: Direction,
    disabled: bool,
    focused: bool,
    session: InputSession<()>,
}

impl Slider {
    /// Creates a slider whose value starts at `min`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SliderConfig::resolve`].
    pub fn new(config: &SliderConfig) -> Result<Self, ConfigError> {
        Self::with_value(config, config.min)
    }

    /// Creates a slider with an initial value, clamped into range.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SliderConfig::resolve`].
    pub fn with_value(config: &SliderConfig, value: f64) -> Result<Self, ConfigError> {
        let resolved = config.resolve()?;
        let value = clamp_external(&resolved, value);
        Ok(Self {
            config: resolved,
            value,
            direction: config.direction,
            disabled: config.disabled,
            focused: false,
            session: InputSession::new(),
        })
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Percentage of the track at which the handle sits.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.config.position_of(self.value)
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

    /// Changes the direction. Takes effect for the next key press and for
    /// tracks built with [`Slider::track`].
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
    /// Disabling during a drag ends the session; the returned events then hold
    /// its commit.
    pub fn set_disabled(&mut self, disabled: bool) -> Events<f64> {
        self.disabled = disabled;
        let mut events = Events::new();
        if disabled && self.session.end() {
            log::debug!("slider disabled mid-drag, committing {}", self.value);
            events.push(SliderEvent::Commit(self.value));
        }
        events
    }

    /// Returns `true` if the slider has keyboard focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Gives the slider keyboard focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Returns `true` while a pointer session is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// Returns `true` while the pointer hovers the control.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.session.is_hovered()
    }

    /// Whether a value tooltip should show.
    #[must_use]
    pub fn tooltip_visible(&self) -> bool {
        !self.disabled && self.session.tooltip_visible()
    }

    /// The interaction session state.
    #[must_use]
    pub fn session(&self) -> &InputSession<()> {
        &self.session
    }

    /// Replaces the value from outside, clamped into range and, when stepping
    /// on marks, snapped to the closest mark.
    ///
    /// Rejected while a session is in progress so the host cannot tear an
    /// ongoing drag. Returns `true` if the value was applied. No events are
    /// emitted for external writes.
    pub fn set_value(&mut self, value: f64) -> bool {
        if self.session.is_active() {
            log::debug!("ignoring external slider value {value} during a drag");
            return false;
        }
        self.value = clamp_external(&self.config, value);
        true
    }

    /// Starts a drag from the handle itself, without seeking.
    pub fn grab(&mut self) -> Events<f64> {
        if self.disabled || self.session.is_active() {
            return Events::new();
        }
        self.focused = true;
        self.session.begin(());
        Events::new()
    }

    /// Presses the track at offset `ratio`: seeks there, then starts a drag.
    pub fn press_track(&mut self, ratio: f64) -> Events<f64> {
        let mut events = Events::new();
        if self.disabled || self.session.is_active() {
            return events;
        }
        self.focused = true;
        self.session.begin(());
        self.update(self.config.pointer_value(ratio), &mut events);
        events
    }

    /// Moves the active drag to offset `ratio`.
    ///
    /// Emits a live update only if the value changed.
    pub fn drag_to(&mut self, ratio: f64) -> Events<f64> {
        let mut events = Events::new();
        if self.disabled || !self.session.is_active() {
            return events;
        }
        self.update(self.config.pointer_value(ratio), &mut events);
        events
    }

    /// Ends the active drag and commits the final value.
    ///
    /// Also the right call for a pointer cancellation.
    pub fn release(&mut self) -> Events<f64> {
        let mut events = Events::new();
        if self.session.end() {
            events.push(SliderEvent::Commit(self.value));
        }
        events
    }

    /// Handles a navigation key.
    ///
    /// Only a focused, enabled, idle slider responds. A handled key emits a
    /// live update if the value changed, followed by a commit.
    pub fn key_down(&mut self, key: SliderKey) -> Events<f64> {
        let mut events = Events::new();
        if self.disabled || !self.focused || self.session.is_active() {
            log::trace!("slider ignored {key:?}");
            return events;
        }
        let target = self
            .config
            .key_target(self.value, key.intent(self.direction));
        self.update(target, &mut events);
        events.push(SliderEvent::Commit(self.value));
        events
    }

    /// Routes a normalized pointer input through `track`.
    pub fn handle_pointer(&mut self, track: &Track, input: &PointerInput<()>) -> Events<f64> {
        if self.disabled || !input.primary {
            return Events::new();
        }
        let ratio = input.position.and_then(|position| track.ratio_at(position));
        match input.phase {
            PointerPhase::Down => match (input.handle, ratio) {
                (Some(()), _) => self.grab(),
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

    fn update(&mut self, value: f64, events: &mut Events<f64>) {
        if value != self.value {
            self.value = value;
            events.push(SliderEvent::Input(value));
        }
    }
}

/// Clamps an initial or external value, then snaps it onto a mark when
/// stepping on marks.
fn clamp_external(config: &ResolvedConfig, value: f64) -> f64 {
    let value = if value.is_nan() {
        config.min()
    } else {
        config.clamp(value)
    };
    config.snap(value)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::*;

    fn slider(value: f64) -> Slider {
        let config = SliderConfig::new(0.0, 100.0).step(10.0);
        Slider::with_value(&config, value).unwrap()
    }

    #[test]
    fn initial_value_is_clamped() {
        assert_eq!(slider(-5.0).value(), 0.0);
        assert_eq!(slider(500.0).value(), 100.0);
        assert_eq!(slider(f64::NAN).value(), 0.0);
        let config = SliderConfig::new(0.0, 100.0);
        assert_eq!(Slider::new(&config).unwrap().value(), 0.0);
    }

    #[test]
    fn construction_surfaces_config_errors() {
        let config = SliderConfig::new(1.0, 0.0);
        assert!(Slider::new(&config).is_err());
    }

    #[test]
    fn press_seeks_then_drags() {
        let mut s = slider(0.0);
        let events = s.press_track(0.42);
        assert_eq!(events.as_slice(), [SliderEvent::Input(40.0)]);
        assert!(s.is_dragging());
        assert!(s.is_focused());

        // Same quantized value: no duplicate live update.
        assert!(s.drag_to(0.38).is_empty());

        let events = s.drag_to(0.61);
        assert_eq!(events.as_slice(), [SliderEvent::Input(60.0)]);

        let events = s.release();
        assert_eq!(events.as_slice(), [SliderEvent::Commit(60.0)]);
        assert!(!s.is_dragging());
    }

    #[test]
    fn grab_does_not_seek() {
        let mut s = slider(30.0);
        assert!(s.grab().is_empty());
        assert!(s.is_dragging());
        assert_eq!(s.value(), 30.0);
        assert_eq!(s.release().as_slice(), [SliderEvent::Commit(30.0)]);
    }

    #[test]
    fn release_without_session_is_silent() {
        let mut s = slider(30.0);
        assert!(s.release().is_empty());
        assert!(s.drag_to(0.9).is_empty());
        assert_eq!(s.value(), 30.0);
    }

    #[test]
    fn keys_need_focus() {
        let mut s = slider(20.0);
        assert!(s.key_down(SliderKey::ArrowRight).is_empty());
        assert_eq!(s.value(), 20.0);
    }

    #[test]
    fn keys_are_ignored_while_dragging() {
        let mut s = slider(20.0);
        s.focus();
        s.grab();
        assert!(s.key_down(SliderKey::ArrowRight).is_empty());
        assert_eq!(s.value(), 20.0);
    }

    #[test]
    fn key_at_boundary_still_commits() {
        let mut s = slider(0.0);
        s.focus();
        let events = s.key_down(SliderKey::ArrowLeft);
        assert_eq!(events.as_slice(), [SliderEvent::Commit(0.0)]);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn home_and_end() {
        let mut s = slider(50.0);
        s.focus();
        assert_eq!(s.key_down(SliderKey::End).last(), Some(&SliderEvent::Commit(100.0)));
        assert_eq!(s.key_down(SliderKey::Home).last(), Some(&SliderEvent::Commit(0.0)));
    }

    #[test]
    fn rtl_flips_horizontal_arrows() {
        let mut s = slider(50.0);
        s.set_direction(Direction::Rtl);
        s.focus();
        s.key_down(SliderKey::ArrowRight);
        assert_eq!(s.value(), 40.0);
        s.key_down(SliderKey::ArrowLeft);
        s.key_down(SliderKey::ArrowLeft);
        assert_eq!(s.value(), 60.0);
        s.key_down(SliderKey::ArrowUp);
        assert_eq!(s.value(), 70.0);
    }

    #[test]
    fn disabled_ignores_everything() {
        let config = SliderConfig::new(0.0, 100.0).step(10.0).disabled(true);
        let mut s = Slider::with_value(&config, 50.0).unwrap();
        s.focus();
        assert!(s.press_track(0.9).is_empty());
        assert!(s.grab().is_empty());
        assert!(s.key_down(SliderKey::End).is_empty());
        assert!(!s.is_dragging());
        assert_eq!(s.value(), 50.0);
    }

    #[test]
    fn disabling_mid_drag_commits() {
        let mut s = slider(0.0);
        s.press_track(0.5);
        let events = s.set_disabled(true);
        assert_eq!(events.as_slice(), [SliderEvent::Commit(50.0)]);
        assert!(!s.is_dragging());
        assert!(s.release().is_empty());
        assert!(s.set_disabled(false).is_empty());
    }

    #[test]
    fn external_value_rejected_during_drag() {
        let mut s = slider(0.0);
        s.press_track(0.5);
        assert!(!s.set_value(10.0));
        assert_eq!(s.value(), 50.0);
        s.release();
        assert!(s.set_value(120.0));
        assert_eq!(s.value(), 100.0);
    }

    #[test]
    fn external_values_snap_to_marks() {
        let config = SliderConfig::new(0.0, 100.0)
            .marks([0.0, 50.0, 100.0])
            .step_on_marks(true);
        let mut s = Slider::with_value(&config, 30.0).unwrap();
        assert_eq!(s.value(), 50.0);
        s.grab();
        assert_eq!(s.release().as_slice(), [SliderEvent::Commit(50.0)]);

        assert!(s.set_value(20.0));
        assert_eq!(s.value(), 0.0);
        assert!(s.set_value(-40.0));
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn cancel_ends_the_session_with_one_commit() {
        let mut s = slider(0.0);
        let track = s.track(Rect::new(0.0, 0.0, 100.0, 10.0));
        s.handle_pointer(&track, &PointerInput::down(Point::new(30.0, 5.0)));
        s.handle_pointer(&track, &PointerInput::moved(Point::new(70.0, 5.0)));
        let events = s.handle_pointer(&track, &PointerInput::cancel());
        assert_eq!(events.as_slice(), [SliderEvent::Commit(70.0)]);
        assert!(!s.is_dragging());
        assert!(s.handle_pointer(&track, &PointerInput::cancel()).is_empty());
    }

    #[test]
    fn pointer_routing_through_track() {
        let mut s = slider(0.0);
        let track = s.track(Rect::new(0.0, 0.0, 200.0, 10.0));

        let events = s.handle_pointer(&track, &PointerInput::down(Point::new(50.0, 5.0)));
        assert_eq!(events.as_slice(), [SliderEvent::Input(30.0)]);

        // Dragging far outside the control pins at the end.
        let events = s.handle_pointer(&track, &PointerInput::moved(Point::new(900.0, 80.0)));
        assert_eq!(events.as_slice(), [SliderEvent::Input(100.0)]);

        // Release outside the control still commits.
        let events = s.handle_pointer(&track, &PointerInput::up(Point::new(900.0, 80.0)));
        assert_eq!(events.as_slice(), [SliderEvent::Commit(100.0)]);
    }

    #[test]
    fn secondary_pointers_are_ignored() {
        let mut s = slider(0.0);
        let track = s.track(Rect::new(0.0, 0.0, 100.0, 10.0));
        let input = PointerInput::down(Point::new(50.0, 5.0)).secondary();
        assert!(s.handle_pointer(&track, &input).is_empty());
        assert!(!s.is_dragging());
    }

    #[test]
    fn hover_tracks_enter_leave_and_moves() {
        let mut s = slider(0.0);
        let track = s.track(Rect::new(0.0, 0.0, 100.0, 10.0));
        s.handle_pointer(&track, &PointerInput::enter(Point::new(1.0, 1.0)));
        assert!(s.is_hovered());
        assert!(s.tooltip_visible());
        s.handle_pointer(&track, &PointerInput::moved(Point::new(500.0, 1.0)));
        assert!(!s.is_hovered());
        s.handle_pointer(&track, &PointerInput::moved(Point::new(50.0, 5.0)));
        assert!(s.is_hovered());
        s.handle_pointer(&track, &PointerInput::leave());
        assert!(!s.is_hovered());
        assert_eq!(s.value(), 0.0);
    }
}
