//! Boundary parsing for instants and card configuration
//!
//! Malformed input is rejected here with `anyhow` context describing what was wrong;
//! nothing past this layer re-validates timestamps or settings.

pub mod config;
pub mod deserializers;

pub use config::load_config;
