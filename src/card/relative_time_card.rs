use std::time::Duration;

use chrono::Local;

use super::disclosure::HoverDisclosure;
use super::scheduler::{Scheduler, TimerId};
use crate::formatter::{format_relative_time, timezone_views};
use crate::models::{CardOptions, Instant, TimezoneView};

/// A live relative-time display for one instant.
///
/// While mounted the card owns exactly one interval timer on the host
/// [`Scheduler`]; every operation that re-arms cancels the previous timer first.
#[derive(Debug)]
pub struct RelativeTimeCard {
    instant: Instant,
    options: CardOptions,
    label: String,
    timer: Option<TimerId>,
    disclosure: HoverDisclosure,
}

impl RelativeTimeCard {
    pub fn new(instant: Instant, options: CardOptions) -> Self {
        let disclosure =
            HoverDisclosure::new(options.open_delay, options.close_delay, options.default_open);
        let label = premount_label(instant, &options);
        Self { instant, options, label, timer: None, disclosure }
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    /// Current relative-time label
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    pub fn disclosure(&self) -> &HoverDisclosure {
        &self.disclosure
    }

    pub fn disclosure_mut(&mut self) -> &mut HoverDisclosure {
        &mut self.disclosure
    }

    /// Compute the label now and start refreshing it every `update_interval`
    pub fn mount<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S, now: Instant) {
        self.cancel(scheduler);
        self.refresh(now);
        let timer = scheduler.set_interval(self.options.update_interval);
        tracing::debug!(instant = %self.instant, ?timer, "card mounted");
        self.timer = Some(timer);
    }

    /// Stop refreshing. The last label is kept.
    pub fn unmount<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.cancel(scheduler);
        tracing::debug!(instant = %self.instant, "card unmounted");
    }

    /// Point the card at a different instant, re-arming its timer if mounted
    pub fn set_instant<S: Scheduler + ?Sized>(
        &mut self,
        instant: Instant,
        scheduler: &mut S,
        now: Instant,
    ) {
        if instant == self.instant {
            return;
        }
        self.instant = instant;

        if self.is_mounted() {
            self.mount(scheduler, now);
        } else {
            self.label = premount_label(instant, &self.options);
        }
    }

    /// Change the refresh period, re-arming the timer if mounted
    pub fn set_update_interval<S: Scheduler + ?Sized>(
        &mut self,
        interval: Duration,
        scheduler: &mut S,
        now: Instant,
    ) {
        if interval == self.options.update_interval {
            return;
        }
        self.options.update_interval = interval;

        if self.is_mounted() {
            self.mount(scheduler, now);
        }
    }

    /// Handle a fired timer. Ticks from any timer other than the active one are ignored.
    pub fn on_timer(&mut self, id: TimerId, now: Instant) -> bool {
        if self.timer != Some(id) {
            tracing::debug!(?id, active = ?self.timer, "ignoring stale tick");
            return false;
        }
        self.refresh(now);
        true
    }

    /// One view per configured timezone followed by the viewer's local zone
    pub fn timezone_views(&self) -> Vec<TimezoneView> {
        timezone_views(self.instant, &self.options.timezones, self.options.locale)
    }

    /// Absolute date and time shown on the trigger, in the viewer's local zone
    pub fn trigger_label(&self) -> String {
        self.options.locale.trigger(&self.instant.to_datetime().with_timezone(&Local))
    }

    fn refresh(&mut self, now: Instant) {
        self.label = format_relative_time(self.instant, now, self.options.locale);
    }

    fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(timer) = self.timer.take() {
            scheduler.clear_interval(timer);
        }
    }
}

/// Before the first tick the card shows the plain short date
fn premount_label(instant: Instant, options: &CardOptions) -> String {
    options.locale.short_date(&instant.to_datetime().with_timezone(&Local))
}
