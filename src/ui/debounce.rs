//! Time-based debouncing for edge-triggered buttons.
//!
//! Mechanical contacts bounce for a few milliseconds after each press,
//! producing a burst of falling edges.  The first edge of a burst is
//! accepted and every further edge inside the debounce window is dropped.

use super::{ButtonEvent, ButtonId};

/// How the debounce window is tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceScope {
    /// Each line has its own window; pressing B right after A is accepted.
    PerButton,
    /// One window for all lines; any accepted press blocks the others.
    Shared,
}

/// Debounce bookkeeping: last accepted edge time per scope slot.
#[derive(Clone, Debug)]
pub struct Debouncer {
    scope: DebounceScope,
    window_ms: u64,
    last_accepted: [Option<u64>; 3],
}

impl Debouncer {
    pub const fn new(scope: DebounceScope, window_ms: u64) -> Self {
        Self {
            scope,
            window_ms,
            last_accepted: [None; 3],
        }
    }

    pub fn scope(&self) -> DebounceScope {
        self.scope
    }

    /// Feed one falling edge observed at `now_ms`.
    ///
    /// Returns the press when at least `window_ms` has passed since the
    /// previous accepted edge in the same slot, `None` for bounce.
    pub fn on_edge(&mut self, id: ButtonId, now_ms: u64) -> Option<ButtonEvent> {
        let slot = match self.scope {
            DebounceScope::PerButton => id.index(),
            DebounceScope::Shared => 0,
        };

        if let Some(last) = self.last_accepted[slot] {
            if now_ms.saturating_sub(last) < self.window_ms {
                return None;
            }
        }

        self.last_accepted[slot] = Some(now_ms);
        Some(ButtonEvent { id, at_ms: now_ms })
    }
}
