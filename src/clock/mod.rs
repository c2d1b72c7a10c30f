//! Time sources.
//!
//! Formatting never reads the clock itself; hosts ask a [`Clock`] for "now" at each
//! tick and pass it down. [`MockClock`] lets tests step time deterministically.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;

use crate::models::Instant;

pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::from(Utc::now())
    }
}

/// Manually advanced clock; clones share the same current time.
///
/// Single-threaded like the hosts that drive cards, so it is `!Send`.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Rc<Cell<Instant>>,
}

impl MockClock {
    pub fn new(start: Instant) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Instant) {
        self.now.set(to);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
