use std::time::Duration;

use crate::models::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Opening { at: Instant },
    Open,
    Closing { at: Instant },
}

/// Delayed hover/focus reveal of the card's timezone detail.
///
/// Hover and focus both count as interest. Gaining interest opens after
/// `open_delay`; losing all interest closes after `close_delay`. Regaining interest
/// while a close is pending keeps the detail open.
#[derive(Debug, Clone)]
pub struct HoverDisclosure {
    open_delay: Duration,
    close_delay: Duration,
    phase: Phase,
    hovered: bool,
    focused: bool,
}

impl HoverDisclosure {
    pub fn new(open_delay: Duration, close_delay: Duration, default_open: bool) -> Self {
        let phase = if default_open { Phase::Open } else { Phase::Closed };
        Self { open_delay, close_delay, phase, hovered: false, focused: false }
    }

    /// Whether the detail is currently shown (including while a close is pending)
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open | Phase::Closing { .. })
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// When the next pending transition should be polled
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Opening { at } | Phase::Closing { at } => Some(at),
            Phase::Closed | Phase::Open => None,
        }
    }

    pub fn pointer_enter(&mut self, now: Instant) {
        self.hovered = true;
        self.interest_changed(now);
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        self.hovered = false;
        self.interest_changed(now);
    }

    pub fn focus(&mut self, now: Instant) {
        self.focused = true;
        self.interest_changed(now);
    }

    pub fn blur(&mut self, now: Instant) {
        self.focused = false;
        self.interest_changed(now);
    }

    /// Force the open state, skipping delays. Returns the new state if it changed.
    pub fn set_open(&mut self, open: bool) -> Option<bool> {
        let was_open = self.is_open();
        self.phase = if open { Phase::Open } else { Phase::Closed };
        (was_open != open).then_some(open)
    }

    /// Apply any transition whose delay has elapsed. Returns the new state if it changed.
    pub fn poll(&mut self, now: Instant) -> Option<bool> {
        match self.phase {
            Phase::Opening { at } if at <= now => {
                self.phase = Phase::Open;
                Some(true)
            }
            Phase::Closing { at } if at <= now => {
                self.phase = Phase::Closed;
                Some(false)
            }
            _ => None,
        }
    }

    fn interest_changed(&mut self, now: Instant) {
        let interested = self.hovered || self.focused;
        self.phase = match (self.phase, interested) {
            (Phase::Closed, true) => Phase::Opening { at: now + self.open_delay },
            (Phase::Closing { .. }, true) => Phase::Open,
            (Phase::Open, false) => Phase::Closing { at: now + self.close_delay },
            (Phase::Opening { .. }, false) => Phase::Closed,
            (phase, _) => phase,
        };
    }
}
