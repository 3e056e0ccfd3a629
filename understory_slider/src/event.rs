// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events emitted by the engines.
//!
//! Every input handler returns the events it produced, in emission order. A
//! host can inspect the returned [`Events`] directly, or forward them to a
//! [`SliderListener`] with [`dispatch`].

use alloc::vec::Vec;
use smallvec::SmallVec;

/// One observable change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent<V> {
    /// The live value changed. Emitted on every change during a session.
    Input(V),
    /// The session ended; carries the final value. Always the last event of a
    /// session, and emitted exactly once per session.
    Commit(V),
}

impl<V> SliderEvent<V> {
    /// Value carried by the event.
    #[must_use]
    pub fn value(&self) -> &V {
        match self {
            Self::Input(value) | Self::Commit(value) => value,
        }
    }

    /// Returns `true` for [`SliderEvent::Commit`].
    #[must_use]
    pub fn is_commit(&self) -> bool {
        matches!(self, Self::Commit(_))
    }
}

/// Events produced by a single input.
///
/// No input produces more than a live update followed by a commit, so this
/// never allocates.
pub type Events<V> = SmallVec<[SliderEvent<V>; 2]>;

/// Receives engine events as callbacks.
pub trait SliderListener<V> {
    /// Called for every live value change.
    fn on_input(&mut self, value: V);

    /// Called once at the end of every session.
    fn on_commit(&mut self, value: V);
}

/// Forwards `events` to `listener` in order.
pub fn dispatch<V, L>(events: Events<V>, listener: &mut L)
where
    L: SliderListener<V> + ?Sized,
{
    for event in events {
        match event {
            SliderEvent::Input(value) => listener.on_input(value),
            SliderEvent::Commit(value) => listener.on_commit(value),
        }
    }
}

/// A [`SliderListener`] built from two closures.
///
/// ```rust
/// use understory_slider::{Callbacks, Events, SliderEvent, dispatch};
///
/// let mut live = 0.0;
/// let mut committed = None;
/// let mut callbacks = Callbacks::new(|v| live = v, |v| committed = Some(v));
///
/// let events: Events<f64> = [SliderEvent::Input(3.0), SliderEvent::Commit(3.0)]
///     .into_iter()
///     .collect();
/// dispatch(events, &mut callbacks);
/// drop(callbacks);
/// assert_eq!(live, 3.0);
/// assert_eq!(committed, Some(3.0));
/// ```
#[derive(Debug)]
pub struct Callbacks<I, C> {
    on_input: I,
    on_commit: C,
}

impl<I, C> Callbacks<I, C> {
    /// Wraps the live-update and commit callbacks.
    pub fn new(on_input: I, on_commit: C) -> Self {
        Self {
            on_input,
            on_commit,
        }
    }
}

impl<V, I, C> SliderListener<V> for Callbacks<I, C>
where
    I: FnMut(V),
    C: FnMut(V),
{
    fn on_input(&mut self, value: V) {
        (self.on_input)(value);
    }

    fn on_commit(&mut self, value: V) {
        (self.on_commit)(value);
    }
}

/// Records every event, mostly useful in tests.
impl<V> SliderListener<V> for Vec<SliderEvent<V>> {
    fn on_input(&mut self, value: V) {
        self.push(SliderEvent::Input(value));
    }

    fn on_commit(&mut self, value: V) {
        self.push(SliderEvent::Commit(value));
    }
}
