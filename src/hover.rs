//! Pointer sampling and hover state.
//!
//! Pointer moves arrive far faster than hover needs to be evaluated. The
//! [`Throttle`] admits at most one sample per interval and drops the rest; it
//! never queues, so hover always reflects the latest admitted position.
//! [`HoverTracker`] turns "what is under the pointer now" into the
//! mouseover/mouseout/cursor [`Action`]s the host dispatches.
//!
//! Hover never touches label placement.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use crate::engine::{Action, Cursor};
use crate::feature::FeatureId;

/// Drops events that arrive within `interval_ms` of the last admitted one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_ms: None }
    }

    /// Whether an event at `now_ms` should be handled. Admitting it starts a new window.
    ///
    /// A timestamp earlier than the last admitted one (the clock stepped back)
    /// is admitted and restarts the window.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms >= last && now_ms - last < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }

    /// Forget the last admitted event so the next one is admitted immediately.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    #[must_use]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

/// The single shape currently under the pointer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<FeatureId>,
}

impl HoverTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<FeatureId> {
        self.hovered
    }

    /// Move hover to `next`, emitting actions only when it changes.
    ///
    /// The previous shape gets its mouseout before the new one gets its
    /// mouseover; the cursor follows whether anything is hovered.
    pub fn update(&mut self, next: Option<FeatureId>) -> Vec<Action> {
        if next == self.hovered {
            return Vec::new();
        }

        let mut actions = Vec::with_capacity(3);
        if let Some(previous) = self.hovered.take() {
            actions.push(Action::MouseOut(previous));
        }
        match next {
            Some(id) => {
                actions.push(Action::SetCursor(Cursor::Interactive));
                actions.push(Action::MouseOver(id));
            }
            None => actions.push(Action::SetCursor(Cursor::Default)),
        }
        self.hovered = next;
        actions
    }

    /// The pointer left the surface: clear hover.
    pub fn leave(&mut self) -> Vec<Action> {
        self.update(None)
    }
}
