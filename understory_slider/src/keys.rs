// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation keys and their direction-aware meaning.

use crate::config::Direction;

/// Keys a slider responds to.
///
/// Hosts translate their own key identifiers into this type, or use the
/// `ui_events_adapter` feature to do it from `ui-events` keyboard events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `Home`.
    Home,
    /// `End`.
    End,
}

/// What a key asks the focused handle to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    /// Move one step (or one mark) toward `max`.
    Increase,
    /// Move one step (or one mark) toward `min`.
    Decrease,
    /// Jump to `min` (or the first mark).
    ToMin,
    /// Jump to `max` (or the last mark).
    ToMax,
}

impl SliderKey {
    /// Maps this key to an intent under `direction`.
    ///
    /// Horizontal arrows follow the reading direction; vertical arrows,
    /// `Home` and `End` do not.
    ///
    /// | key          | `Ltr`      | `Rtl`      |
    /// |--------------|------------|------------|
    /// | `ArrowUp`    | `Increase` | `Increase` |
    /// | `ArrowDown`  | `Decrease` | `Decrease` |
    /// | `ArrowRight` | `Increase` | `Decrease` |
    /// | `ArrowLeft`  | `Decrease` | `Increase` |
    /// | `Home`       | `ToMin`    | `ToMin`    |
    /// | `End`        | `ToMax`    | `ToMax`    |
    #[must_use]
    pub const fn intent(self, direction: Direction) -> KeyIntent {
        match (self, direction) {
            (Self::ArrowUp, _)
            | (Self::ArrowRight, Direction::Ltr)
            | (Self::ArrowLeft, Direction::Rtl) => KeyIntent::Increase,
            (Self::ArrowDown, _)
            | (Self::ArrowLeft, Direction::Ltr)
            | (Self::ArrowRight, Direction::Rtl) => KeyIntent::Decrease,
            (Self::Home, _) => KeyIntent::ToMin,
            (Self::End, _) => KeyIntent::ToMax,
        }
    }
}
