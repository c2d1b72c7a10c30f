//! Human-readable renderings of an [`Instant`](crate::models::Instant).
//!
//! - [`relative`] - "3 minutes 12 seconds ago" / "in 2 days" labels against an injected now
//! - [`absolute`] - locale-specific calendar dates and clock times
//! - [`zones`] - projections of one instant into named timezones
//!
//! Nothing here reads the clock; callers pass the current time explicitly.

pub mod absolute;
pub mod relative;
pub mod zones;

pub use absolute::Locale;
pub use relative::{format_relative_time, format_relative_time_in, pluralize};
pub use zones::{short_offset, timezone_view, timezone_views};
