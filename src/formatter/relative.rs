use chrono::{Local, TimeZone};

use super::absolute::Locale;
use crate::models::Instant;

/// Below this many whole seconds either side of now the label is "just now"
const JUST_NOW_SECONDS: i64 = 5;
/// At this many whole days the label switches to an absolute date
const ABSOLUTE_AFTER_DAYS: i64 = 7;

/// `"{n} {word}"` when `n == 1`, otherwise `"{n} {word}s"`
pub fn pluralize(n: i64, word: &str) -> String {
    if n == 1 { format!("{} {}", n, word) } else { format!("{} {}s", n, word) }
}

/// Describe `instant` relative to `now`, e.g. "in 3 hours" or "2 minutes 5 seconds ago".
///
/// Instants a week or more away fall back to the locale's short date in the
/// viewer's local timezone.
pub fn format_relative_time(instant: Instant, now: Instant, locale: Locale) -> String {
    format_relative_time_in(instant, now, locale, &Local)
}

/// Same as [`format_relative_time`] with the fallback date rendered in `zone`
pub fn format_relative_time_in<Tz: TimeZone>(
    instant: Instant,
    now: Instant,
    locale: Locale,
    zone: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let diff = now.since(instant);
    let is_future = diff < 0;
    let abs_diff = diff.unsigned_abs();

    let seconds = i64::try_from(abs_diff / 1000).unwrap_or(i64::MAX);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < JUST_NOW_SECONDS {
        return "just now".to_string();
    }

    if days >= ABSOLUTE_AFTER_DAYS {
        return locale.short_date(&instant.to_datetime().with_timezone(zone));
    }

    if is_future {
        if seconds < 60 {
            format!("in {}", pluralize(seconds, "second"))
        } else if minutes < 60 {
            format!("in {}", pluralize(minutes, "minute"))
        } else if hours < 24 {
            format!("in {}", pluralize(hours, "hour"))
        } else {
            format!("in {}", pluralize(days, "day"))
        }
    } else if seconds < 60 {
        format!("{} ago", pluralize(seconds, "second"))
    } else if minutes < 60 {
        // Past minutes carry the residual seconds; future minutes do not
        format!("{} {} ago", pluralize(minutes, "minute"), pluralize(seconds % 60, "second"))
    } else if hours < 24 {
        format!("{} ago", pluralize(hours, "hour"))
    } else {
        format!("{} ago", pluralize(days, "day"))
    }
}
