use std::collections::BTreeMap;
use std::time::Duration;

use crate::clock::Clock;
use crate::models::Instant;

/// Handle returned by [`Scheduler::set_interval`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Repeating-timer primitive supplied by the host event loop
pub trait Scheduler {
    fn set_interval(&mut self, period: Duration) -> TimerId;

    /// Returns false if `id` was not active
    fn clear_interval(&mut self, id: TimerId) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next_fire: Instant,
}

/// Deadline table for interval timers, driven by polling [`IntervalScheduler::due`]
#[derive(Debug)]
pub struct IntervalScheduler<C: Clock> {
    clock: C,
    next_id: u64,
    timers: BTreeMap<TimerId, Interval>,
}

impl<C: Clock> IntervalScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, next_id: 0, timers: BTreeMap::new() }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Earliest pending fire time across all active timers
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|interval| interval.next_fire).min()
    }

    /// Timers whose deadline has passed, each reported once.
    ///
    /// A timer that fell several periods behind fires a single time and its next
    /// deadline is moved to the first period boundary after now.
    pub fn due(&mut self) -> Vec<TimerId> {
        let now = self.clock.now();
        let mut fired = Vec::new();

        for (id, interval) in self.timers.iter_mut() {
            if interval.next_fire > now {
                continue;
            }
            fired.push(*id);

            let period_ms = i64::try_from(interval.period.as_millis()).unwrap_or(i64::MAX).max(1);
            let periods = now.since(interval.next_fire) / period_ms + 1;
            let step = u64::try_from(period_ms.saturating_mul(periods)).unwrap_or(u64::MAX);
            interval.next_fire = interval.next_fire + Duration::from_millis(step);
        }

        fired
    }
}

impl<C: Clock> Scheduler for IntervalScheduler<C> {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let next_fire = self.clock.now() + period;
        self.timers.insert(id, Interval { period, next_fire });
        tracing::debug!(timer = id.0, period_ms = period.as_millis() as u64, "interval armed");
        id
    }

    fn clear_interval(&mut self, id: TimerId) -> bool {
        let removed = self.timers.remove(&id).is_some();
        if removed {
            tracing::debug!(timer = id.0, "interval cleared");
        }
        removed
    }
}
