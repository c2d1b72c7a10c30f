//! Relative Time Card - human-readable "time ago" labels that stay current
//!
//! This library turns an absolute instant into a label such as "2 minutes 5 seconds ago"
//! or "in 3 hours" and keeps that label fresh on a timer. It supports:
//!
//! - Pure relative formatting against an injected "now"
//! - Projecting an instant into IANA timezones with DST-aware short names
//! - A card that owns exactly one refresh timer and reveals timezone detail on hover/focus
//! - A terminal host (`watch` subcommand) driving the card from a real clock
//!
//! # Example
//!
//! ```
//! use relative_time_card::{Instant, Locale, format_relative_time};
//!
//! let now: Instant = "2024-05-01T12:00:00Z".parse()?;
//! let then: Instant = "2024-05-01T11:57:55Z".parse()?;
//! assert_eq!(format_relative_time(then, now, Locale::EnUs), "2 minutes 5 seconds ago");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod card;
pub mod cli;
pub mod clock;
pub mod formatter;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use card::RelativeTimeCard;
pub use formatter::{Locale, format_relative_time, pluralize, timezone_view, timezone_views};
pub use models::{CardOptions, Instant, TimezoneView, ZoneId};
