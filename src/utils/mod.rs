pub mod environment;
pub mod logging;

pub use environment::detect_locale;
