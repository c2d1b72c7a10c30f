use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An absolute point in time with epoch-millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    /// Build from milliseconds since the Unix epoch
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside chrono's representable range.
    pub fn from_millis(millis: i64) -> Result<Self> {
        if DateTime::from_timestamp_millis(millis).is_none() {
            bail!("timestamp out of range: {}", millis);
        }
        Ok(Self(millis))
    }

    pub fn from_datetime<Tz: chrono::TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.timestamp_millis())
    }

    pub fn millis(&self) -> i64 {
        self.0
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        // Constructors and arithmetic only produce in-range values
        DateTime::from_timestamp_millis(self.0).unwrap_or_default()
    }

    /// Signed milliseconds from `earlier` to `self` (negative when `earlier` is later)
    pub fn since(&self, earlier: Instant) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    /// RFC 3339 with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
    pub fn to_rfc3339(&self) -> String {
        self.to_datetime().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn duration_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// Earliest and latest millisecond chrono can represent
fn millis_range() -> (i64, i64) {
    (DateTime::<Utc>::MIN_UTC.timestamp_millis(), DateTime::<Utc>::MAX_UTC.timestamp_millis())
}

/// Saturates at the latest representable instant
impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        let (_, max) = millis_range();
        Instant(self.0.saturating_add(duration_millis(rhs)).min(max))
    }
}

/// Saturates at the earliest representable instant
impl Sub<Duration> for Instant {
    type Output = Instant;

    fn sub(self, rhs: Duration) -> Instant {
        let (min, _) = millis_range();
        Instant(self.0.saturating_sub(duration_millis(rhs)).max(min))
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(&datetime)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Parses epoch milliseconds, RFC 3339 timestamps, or bare `YYYY-MM-DD` dates (UTC midnight)
impl FromStr for Instant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            bail!("timestamp cannot be empty");
        }

        if let Ok(millis) = trimmed.parse::<i64>() {
            return Self::from_millis(millis);
        }

        if let Ok(datetime) = trimmed.parse::<DateTime<Utc>>() {
            return Ok(Self::from(datetime));
        }

        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .with_context(|| format!("invalid timestamp: {}", trimmed))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .with_context(|| format!("invalid timestamp: {}", trimmed))?
            .and_utc();
        Ok(Self::from(midnight))
    }
}

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        crate::parsers::deserializers::deserialize_instant(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_epoch_millis() {
        let instant: Instant = "1714564800000".parse().unwrap();
        assert_eq!(instant.millis(), 1_714_564_800_000);
    }

    #[test]
    fn test_parse_negative_epoch_millis() {
        let instant: Instant = "-1000".parse().unwrap();
        assert_eq!(instant.to_rfc3339(), "1969-12-31T23:59:59.000Z");
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let instant: Instant = "2024-05-01T14:00:00+02:00".parse().unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_parse_truncates_to_millis() {
        let instant: Instant = "2024-05-01T12:00:00.123456Z".parse().unwrap();
        assert_eq!(instant.millis() % 1000, 123);
    }

    #[test]
    fn test_parse_bare_date_is_utc_midnight() {
        let instant: Instant = "2024-05-01".parse().unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-05-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "yesterday-ish".parse::<Instant>().unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"));

        assert!("".parse::<Instant>().is_err());
        assert!("   ".parse::<Instant>().is_err());
    }

    #[test]
    fn test_from_millis_out_of_range() {
        assert!(Instant::from_millis(i64::MAX).is_err());
    }

    #[test]
    fn test_arithmetic_and_since() {
        let base = Instant::from_millis(10_000).unwrap();
        let later = base + Duration::from_secs(5);
        assert_eq!(later.millis(), 15_000);
        assert_eq!((later - Duration::from_millis(500)).millis(), 14_500);
        assert_eq!(later.since(base), 5_000);
        assert_eq!(base.since(later), -5_000);
    }

    #[test]
    fn test_arithmetic_clamps_to_representable_range() {
        let (min, max) = millis_range();
        let latest = Instant::from_millis(max).unwrap();
        let earliest = Instant::from_millis(min).unwrap();

        let past_end = latest + Duration::from_secs(10);
        assert_eq!(past_end, latest);
        assert_eq!(past_end.to_datetime().timestamp_millis(), max);

        let before_start = earliest - Duration::from_secs(u64::MAX);
        assert_eq!(before_start, earliest);
        assert_eq!(before_start.to_datetime().timestamp_millis(), min);
    }

    #[test]
    fn test_serde_round_trip_forms() {
        let from_number: Instant = serde_json::from_str("1714564800000").unwrap();
        let from_string: Instant = serde_json::from_str(r#""2024-05-01T12:00:00Z""#).unwrap();
        assert_eq!(from_number, from_string);

        let json = serde_json::to_string(&from_number).unwrap();
        assert_eq!(json, r#""2024-05-01T12:00:00.000Z""#);
    }
}
