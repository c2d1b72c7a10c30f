use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono_tz::Tz;
use serde::Serialize;

/// A timezone a card can project its instant into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneId {
    /// IANA zone, e.g. `America/Los_Angeles`
    Named(Tz),
    /// The viewer's own zone as reported by the operating system
    Local,
}

impl FromStr for ZoneId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(ZoneId::Local);
        }
        trimmed
            .parse::<Tz>()
            .map(ZoneId::Named)
            .map_err(|e| anyhow!("unknown timezone '{}': {}", trimmed, e))
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Named(tz) => f.write_str(tz.name()),
            ZoneId::Local => f.write_str("Local"),
        }
    }
}

impl Serialize for ZoneId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Read-only projection of one instant into one timezone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimezoneView {
    pub zone: ZoneId,
    /// Short display name such as `PDT`, `UTC` or `GMT+2`
    pub name: String,
    /// Long calendar date, e.g. `October 16, 2026`
    pub date: String,
    /// Clock time, e.g. `09:05:03 AM`
    pub time: String,
    /// Machine-readable form of the underlying instant
    pub iso: String,
}

impl TimezoneView {
    pub fn aria_label(&self) -> String {
        format!("Time in {}: {} {}", self.name, self.date, self.time)
    }
}
