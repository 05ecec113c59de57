//! Utilities - logging setup and time display helpers

pub mod logger;
pub mod time;

pub use time::format_clock;
