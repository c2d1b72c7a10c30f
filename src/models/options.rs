use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::timezone::ZoneId;
use crate::formatter::Locale;

pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_OPEN_DELAY_MS: u64 = 500;
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 300;

/// Card settings as written in a config file or collected from flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardConfig {
    pub timezones: Vec<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_millis")]
    pub update_interval_ms: u64,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_millis")]
    pub open_delay_ms: u64,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_millis")]
    pub close_delay_ms: u64,
    pub locale: Option<String>,
    pub default_open: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            timezones: vec!["UTC".to_string()],
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            open_delay_ms: DEFAULT_OPEN_DELAY_MS,
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
            locale: None,
            default_open: false,
        }
    }
}

/// Validated card settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOptions {
    pub timezones: Vec<ZoneId>,
    pub update_interval: Duration,
    pub open_delay: Duration,
    pub close_delay: Duration,
    pub locale: Locale,
    pub default_open: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            timezones: vec![ZoneId::Named(chrono_tz::Tz::UTC)],
            update_interval: Duration::from_millis(DEFAULT_UPDATE_INTERVAL_MS),
            open_delay: Duration::from_millis(DEFAULT_OPEN_DELAY_MS),
            close_delay: Duration::from_millis(DEFAULT_CLOSE_DELAY_MS),
            locale: Locale::default(),
            default_open: false,
        }
    }
}

impl CardConfig {
    /// Validate into [`CardOptions`]; `fallback_locale` applies when no locale is configured
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A timezone is not a known IANA identifier (or `local`)
    /// - The update interval is zero
    /// - The configured locale is unsupported
    pub fn resolve(&self, fallback_locale: Locale) -> Result<CardOptions> {
        let timezones = self
            .timezones
            .iter()
            .map(|name| name.parse::<ZoneId>())
            .collect::<Result<Vec<_>>>()
            .context("Invalid timezone list")?;

        if self.update_interval_ms == 0 {
            bail!("updateIntervalMs must be greater than zero");
        }

        let locale = match &self.locale {
            Some(tag) => tag.parse::<Locale>()?,
            None => fallback_locale,
        };

        Ok(CardOptions {
            timezones,
            update_interval: Duration::from_millis(self.update_interval_ms),
            open_delay: Duration::from_millis(self.open_delay_ms),
            close_delay: Duration::from_millis(self.close_delay_ms),
            locale,
            default_open: self.default_open,
        })
    }
}
