//! Time display helpers
//!
//! The ledger stores Unix millis; display strings are produced here in the
//! machine's local time zone.

use chrono::{Local, TimeZone};
use shared::types::Timestamp;
use std::fmt::Write;

const FALLBACK_FORMAT: &str = "%H:%M:%S";

/// Format a timestamp as a local wall-clock string
///
/// An invalid format string falls back to `HH:MM:SS`, an out-of-range
/// timestamp renders as `-`.
pub fn format_clock(millis: Timestamp, format: &str) -> String {
    let Some(dt) = Local.timestamp_millis_opt(millis).single() else {
        return "-".to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", dt.format(format)).is_ok() {
        return out;
    }

    tracing::warn!("Invalid clock format '{}', using {}", format, FALLBACK_FORMAT);
    dt.format(FALLBACK_FORMAT).to_string()
}
