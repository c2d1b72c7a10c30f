use chrono::{DateTime, Local, Offset, TimeZone};
use chrono_tz::{OffsetName, Tz};

use super::absolute::Locale;
use crate::models::{Instant, TimezoneView, ZoneId};

/// Project `instant` into `zone`
pub fn timezone_view(instant: Instant, zone: ZoneId, locale: Locale) -> TimezoneView {
    let utc = instant.to_datetime();
    match zone {
        ZoneId::Named(tz) => {
            let local = utc.with_timezone(&tz);
            build_view(instant, zone, named_zone_label(&local), &local, locale)
        }
        ZoneId::Local => {
            let local = utc.with_timezone(&Local);
            let name = short_offset(local.offset().fix().local_minus_utc());
            build_view(instant, zone, name, &local, locale)
        }
    }
}

/// One view per requested zone, in order, followed by the viewer's local zone
pub fn timezone_views(instant: Instant, zones: &[ZoneId], locale: Locale) -> Vec<TimezoneView> {
    zones
        .iter()
        .copied()
        .chain(std::iter::once(ZoneId::Local))
        .map(|zone| timezone_view(instant, zone, locale))
        .collect()
}

fn build_view<Z: TimeZone>(
    instant: Instant,
    zone: ZoneId,
    name: String,
    datetime: &DateTime<Z>,
    locale: Locale,
) -> TimezoneView
where
    Z::Offset: std::fmt::Display,
{
    TimezoneView {
        zone,
        name,
        date: locale.long_date(datetime),
        time: locale.clock_time(datetime),
        iso: instant.to_rfc3339(),
    }
}

/// Abbreviation in effect at this moment (so DST shows as `PDT`, not `PST`),
/// or the short offset when the zone only publishes numeric abbreviations
fn named_zone_label(datetime: &DateTime<Tz>) -> String {
    let offset = datetime.offset();
    match offset.abbreviation() {
        Some(abbr) if abbr.chars().all(|c| c.is_ascii_alphabetic()) => abbr.to_string(),
        _ => short_offset(offset.fix().local_minus_utc()),
    }
}

/// `GMT`, `GMT+2`, `GMT-7`, `GMT+5:30`
pub fn short_offset(offset_seconds: i32) -> String {
    if offset_seconds == 0 {
        return "GMT".to_string();
    }

    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let total_minutes = offset_seconds.unsigned_abs() / 60;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);

    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}
