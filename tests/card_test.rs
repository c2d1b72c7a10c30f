/// Relative time card integration tests
///
/// Drive cards through the public API with a mock clock and verify the label
/// and timer contracts end to end
use std::time::Duration;

use chrono::Utc;
use relative_time_card::card::{IntervalScheduler, RelativeTimeCard, Scheduler};
use relative_time_card::clock::{Clock, MockClock};
use relative_time_card::formatter::format_relative_time_in;
use relative_time_card::{CardOptions, Instant, Locale, ZoneId, pluralize};

fn now() -> Instant {
    "2026-10-16T12:00:00Z".parse().unwrap()
}

fn label(instant: Instant) -> String {
    format_relative_time_in(instant, now(), Locale::EnUs, &Utc)
}

fn pump(card: &mut RelativeTimeCard, scheduler: &mut IntervalScheduler<MockClock>) -> usize {
    let at = scheduler.now();
    scheduler.due().into_iter().filter(|id| card.on_timer(*id, at)).count()
}

#[test]
fn test_same_instant_is_just_now() {
    for millis in [0_i64, 1_792_152_000_000, -86_400_000] {
        let instant = Instant::from_millis(millis).unwrap();
        assert_eq!(format_relative_time_in(instant, instant, Locale::EnUs, &Utc), "just now");
    }
}

#[test]
fn test_dead_zone_under_five_seconds() {
    for ms in (0..5000).step_by(250) {
        let past = now() - Duration::from_millis(ms);
        let future = now() + Duration::from_millis(ms);
        assert_eq!(label(past), "just now", "past {}ms", ms);
        assert_eq!(label(future), "just now", "future {}ms", ms);
    }
}

#[test]
fn test_minute_asymmetry() {
    assert_eq!(label(now() - Duration::from_millis(90_000)), "1 minute 30 seconds ago");
    assert_eq!(label(now() + Duration::from_millis(90_000)), "in 1 minute");
}

#[test]
fn test_pluralize_examples() {
    assert_eq!(pluralize(1, "hour"), "1 hour");
    assert_eq!(pluralize(2, "hour"), "2 hours");
    assert_eq!(pluralize(0, "hour"), "0 hours");
}

#[test]
fn test_a_week_or_more_is_short_date() {
    let nine_days_ago = now() - Duration::from_secs(9 * 24 * 3600);
    let eight_days_ahead = now() + Duration::from_secs(8 * 24 * 3600);

    assert_eq!(label(nine_days_ago), "10/7/2026");
    assert_eq!(label(eight_days_ahead), "10/24/2026");
}

#[test]
fn test_end_to_end_examples() {
    assert_eq!(label(now() - Duration::from_secs(45)), "45 seconds ago");
    assert_eq!(label(now() + Duration::from_secs(45)), "in 45 seconds");
    assert_eq!(label(now() - Duration::from_secs(125)), "2 minutes 5 seconds ago");
    assert_eq!(label(now() + Duration::from_secs(125)), "in 2 minutes");
}

#[test]
fn test_replacing_instant_leaves_one_live_timer() {
    let clock = MockClock::new(now());
    let mut scheduler = IntervalScheduler::new(clock.clone());

    let mut card = RelativeTimeCard::new(now() - Duration::from_secs(45), CardOptions::default());
    card.mount(&mut scheduler, clock.now());
    let stale = card.timer().unwrap();

    card.set_instant(now() - Duration::from_secs(125), &mut scheduler, clock.now());
    assert_eq!(scheduler.active_count(), 1);

    for _ in 0..5 {
        clock.advance(Duration::from_secs(1));
        let fired = scheduler.due();
        assert!(!fired.contains(&stale), "replaced timer fired");
        assert_eq!(fired.len(), 1);
        for id in fired {
            assert!(card.on_timer(id, clock.now()));
        }
    }
    assert_eq!(card.label(), "2 minutes 10 seconds ago");
}

#[test]
fn test_unmounted_card_never_ticks() {
    let clock = MockClock::new(now());
    let mut scheduler = IntervalScheduler::new(clock.clone());

    let mut card = RelativeTimeCard::new(now() - Duration::from_secs(10), CardOptions::default());
    card.mount(&mut scheduler, clock.now());
    card.unmount(&mut scheduler);

    clock.advance(Duration::from_secs(30));
    assert_eq!(pump(&mut card, &mut scheduler), 0);
    assert_eq!(card.label(), "10 seconds ago");
}

#[test]
fn test_cards_have_independent_timers() {
    let clock = MockClock::new(now());
    let mut scheduler = IntervalScheduler::new(clock.clone());

    let mut fast = RelativeTimeCard::new(
        now() - Duration::from_secs(10),
        CardOptions { update_interval: Duration::from_millis(500), ..CardOptions::default() },
    );
    let mut slow = RelativeTimeCard::new(
        now() - Duration::from_secs(10),
        CardOptions { update_interval: Duration::from_secs(5), ..CardOptions::default() },
    );
    fast.mount(&mut scheduler, clock.now());
    slow.mount(&mut scheduler, clock.now());
    assert_eq!(scheduler.active_count(), 2);

    clock.advance(Duration::from_secs(2));
    let at = clock.now();
    for id in scheduler.due() {
        fast.on_timer(id, at);
        slow.on_timer(id, at);
    }

    assert_eq!(fast.label(), "12 seconds ago");
    assert_eq!(slow.label(), "10 seconds ago");

    slow.unmount(&mut scheduler);
    assert_eq!(scheduler.active_count(), 1);
    assert!(scheduler.clear_interval(fast.timer().unwrap()));
}

#[test]
fn test_timezone_views_project_same_instant() {
    let instant: Instant = "2024-01-15T20:00:00Z".parse().unwrap();
    let options = CardOptions {
        timezones: vec![
            ZoneId::Named(chrono_tz::Tz::UTC),
            ZoneId::Named(chrono_tz::Tz::America__Los_Angeles),
        ],
        ..CardOptions::default()
    };
    let card = RelativeTimeCard::new(instant, options);
    let views = card.timezone_views();

    assert_eq!(views.len(), 3);
    assert_eq!(views[1].name, "PST");
    assert_eq!(views[1].date, "January 15, 2024");
    assert_eq!(views[1].time, "12:00:00 PM");
    assert!(views.iter().all(|v| v.iso == "2024-01-15T20:00:00.000Z"));
    assert_eq!(views[0].aria_label(), "Time in UTC: January 15, 2024 08:00:00 PM");
}
