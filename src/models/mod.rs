//! Data models for relative time cards.
//!
//! - [`Instant`] - absolute point in time with millisecond precision
//! - [`TimezoneView`] / [`ZoneId`] - one instant projected into one timezone
//! - [`CardConfig`] / [`CardOptions`] - raw and validated card settings
//!
//! Instants deserialize from either epoch milliseconds or timestamp strings via the
//! custom deserializers in the `parsers` module.

pub mod instant;
pub mod options;
pub mod timezone;

pub use instant::Instant;
pub use options::{CardConfig, CardOptions};
pub use timezone::{TimezoneView, ZoneId};
