use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;

/// Locales with known absolute date/time layouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
        }
    }

    /// Numeric calendar date: `10/16/2026` or `16/10/2026`
    pub fn short_date<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            Locale::EnUs => datetime.format("%-m/%-d/%Y").to_string(),
            Locale::EnGb => datetime.format("%d/%m/%Y").to_string(),
        }
    }

    /// Spelled-out calendar date: `October 16, 2026` or `16 October 2026`
    pub fn long_date<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            Locale::EnUs => datetime.format("%B %-d, %Y").to_string(),
            Locale::EnGb => datetime.format("%-d %B %Y").to_string(),
        }
    }

    /// 12-hour clock with seconds: `09:05:03 AM` or `09:05:03 am`
    pub fn clock_time<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let (hour, minute, second) = (datetime.hour12().1, datetime.minute(), datetime.second());
        format!("{:02}:{:02}:{:02} {}", hour, minute, second, self.meridiem(datetime))
    }

    /// Compact date and time used on the card trigger: `Oct 16, 2026, 09:05 PM` or
    /// `16 Oct 2026, 21:05` (en-GB keeps its default 24-hour clock here)
    pub fn trigger<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            Locale::EnUs => format!(
                "{}, {:02}:{:02} {}",
                datetime.format("%b %-d, %Y"),
                datetime.hour12().1,
                datetime.minute(),
                self.meridiem(datetime)
            ),
            Locale::EnGb => datetime.format("%-d %b %Y, %H:%M").to_string(),
        }
    }

    fn meridiem<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> &'static str {
        let pm = datetime.hour12().0;
        match (self, pm) {
            (Locale::EnUs, false) => "AM",
            (Locale::EnUs, true) => "PM",
            (Locale::EnGb, false) => "am",
            (Locale::EnGb, true) => "pm",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Accepts BCP-47 tags (`en-GB`) and POSIX locale names (`en_GB.UTF-8`, `C`)
impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let base = s.trim().split(['.', '@']).next().unwrap_or_default();
        let normalized = base.replace('_', "-").to_ascii_lowercase();

        match normalized.as_str() {
            "c" | "posix" | "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" | "en-ie" | "en-au" | "en-nz" => Ok(Locale::EnGb),
            _ => bail!("unsupported locale: {}", s.trim()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 9, 5, 3).unwrap()
    }

    fn evening() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 21, 30, 0).unwrap()
    }

    #[test]
    fn test_short_date() {
        assert_eq!(Locale::EnUs.short_date(&morning()), "1/5/2026");
        assert_eq!(Locale::EnGb.short_date(&morning()), "05/01/2026");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(Locale::EnUs.long_date(&evening()), "October 16, 2026");
        assert_eq!(Locale::EnGb.long_date(&evening()), "16 October 2026");
    }

    #[test]
    fn test_clock_time() {
        assert_eq!(Locale::EnUs.clock_time(&morning()), "09:05:03 AM");
        assert_eq!(Locale::EnUs.clock_time(&evening()), "09:30:00 PM");
        assert_eq!(Locale::EnGb.clock_time(&evening()), "09:30:00 pm");
    }

    #[test]
    fn test_clock_time_noon_and_midnight() {
        let noon = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(Locale::EnUs.clock_time(&noon), "12:00:00 PM");
        assert_eq!(Locale::EnUs.clock_time(&midnight), "12:00:00 AM");
    }

    #[test]
    fn test_trigger() {
        assert_eq!(Locale::EnUs.trigger(&morning()), "Jan 5, 2026, 09:05 AM");
        assert_eq!(Locale::EnGb.trigger(&morning()), "5 Jan 2026, 09:05");
    }

    #[test]
    fn test_trigger_evening_clock() {
        assert_eq!(Locale::EnUs.trigger(&evening()), "Oct 16, 2026, 09:30 PM");
        assert_eq!(Locale::EnGb.trigger(&evening()), "16 Oct 2026, 21:30");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("en_GB.UTF-8".parse::<Locale>().unwrap(), Locale::EnGb);
        assert_eq!("C".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("en_AU".parse::<Locale>().unwrap(), Locale::EnGb);
        assert!("fr_FR.UTF-8".parse::<Locale>().is_err());
    }
}
