//! The relative time card: a label that keeps itself current on a timer, plus
//! per-timezone detail revealed on hover or focus.
//!
//! # Timer discipline
//!
//! A card arms at most one interval on the host [`Scheduler`]. Mounting, changing
//! the instant, and changing the interval all cancel the old timer before arming a
//! new one, and [`RelativeTimeCard::on_timer`] ignores ids it no longer owns, so a
//! tick that was already queued when the timer was replaced cannot overwrite the label.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use relative_time_card::card::{IntervalScheduler, RelativeTimeCard};
//! use relative_time_card::clock::{Clock, MockClock};
//! use relative_time_card::models::{CardOptions, Instant};
//!
//! let clock = MockClock::new("2024-05-01T12:00:00Z".parse()?);
//! let mut scheduler = IntervalScheduler::new(clock.clone());
//! let instant: Instant = "2024-05-01T11:59:15Z".parse()?;
//!
//! let mut card = RelativeTimeCard::new(instant, CardOptions::default());
//! card.mount(&mut scheduler, clock.now());
//! assert_eq!(card.label(), "45 seconds ago");
//!
//! clock.advance(Duration::from_secs(1));
//! for id in scheduler.due() {
//!     card.on_timer(id, clock.now());
//! }
//! assert_eq!(card.label(), "46 seconds ago");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod disclosure;
pub mod relative_time_card;
pub mod scheduler;

pub use disclosure::HoverDisclosure;
pub use relative_time_card::RelativeTimeCard;
pub use scheduler::{IntervalScheduler, Scheduler, TimerId};
