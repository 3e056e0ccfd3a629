// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation from [`ui_events`] pointer and keyboard events.
//!
//! Hit testing stays with the host: pass the handle a press landed on, if any,
//! and `None` otherwise.
//!
//! ```rust,ignore
//! use understory_slider::adapters::ui_events::{pointer_input, slider_key};
//!
//! if let Some(input) = pointer_input(&event, hit_handle) {
//!     let events = range.handle_pointer(&track, &input);
//!     dispatch(events, &mut listener);
//! }
//! ```

use ui_events::keyboard::{Key, KeyboardEvent, NamedKey};
use ui_events::pointer::PointerEvent;

use crate::keys::SliderKey;
use crate::session::{PointerInput, PointerPhase};

/// Converts a pointer event into a [`PointerInput`].
///
/// `handle` is the handle a [`PointerEvent::Down`] landed on; it is ignored for
/// other phases. Scroll and gesture events have no slider meaning and map to
/// `None`.
#[must_use]
pub fn pointer_input<H>(event: &PointerEvent, handle: Option<H>) -> Option<PointerInput<H>> {
    let (phase, position, primary) = match event {
        PointerEvent::Down(e) => (
            PointerPhase::Down,
            Some(e.state.logical_point()),
            e.pointer.is_primary_pointer(),
        ),
        PointerEvent::Move(e) => (
            PointerPhase::Move,
            Some(e.current.logical_point()),
            e.pointer.is_primary_pointer(),
        ),
        PointerEvent::Up(e) => (
            PointerPhase::Up,
            Some(e.state.logical_point()),
            e.pointer.is_primary_pointer(),
        ),
        PointerEvent::Cancel(info) => (PointerPhase::Cancel, None, info.is_primary_pointer()),
        PointerEvent::Enter(info) => (PointerPhase::Enter, None, info.is_primary_pointer()),
        PointerEvent::Leave(info) => (PointerPhase::Leave, None, info.is_primary_pointer()),
        _ => return None,
    };
    Some(PointerInput {
        phase,
        position,
        primary,
        handle: if phase == PointerPhase::Down {
            handle
        } else {
            None
        },
    })
}

/// Converts a key press into a [`SliderKey`].
///
/// Key releases and keys the slider does not handle map to `None`.
#[must_use]
pub fn slider_key(event: &KeyboardEvent) -> Option<SliderKey> {
    if !event.state.is_down() {
        return None;
    }
    key_from(&event.key)
}

/// Maps a logical key to a [`SliderKey`].
#[must_use]
pub fn key_from(key: &Key) -> Option<SliderKey> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some(SliderKey::ArrowUp),
        Key::Named(NamedKey::ArrowDown) => Some(SliderKey::ArrowDown),
        Key::Named(NamedKey::ArrowLeft) => Some(SliderKey::ArrowLeft),
        Key::Named(NamedKey::ArrowRight) => Some(SliderKey::ArrowRight),
        Key::Named(NamedKey::Home) => Some(SliderKey::Home),
        Key::Named(NamedKey::End) => Some(SliderKey::End),
        _ => None,
    }
}
