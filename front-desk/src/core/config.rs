/// Default restaurant capacity
pub const DEFAULT_TOTAL_SEATS: u32 = 20;

/// Default clock format for check-in/check-out display (e.g. `7:05:09 PM`)
pub const DEFAULT_CLOCK_FORMAT: &str = "%-I:%M:%S %p";

/// Front desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TOTAL_SEATS | 20 | Restaurant capacity |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Daily rolling log file directory |
/// | CLOCK_FORMAT | %-I:%M:%S %p | Check-in/out display format |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// TOTAL_SEATS=32 LOG_DIR=./logs cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Total seats in the restaurant
    pub total_seats: u32,
    /// tracing max level
    pub log_level: String,
    /// Daily log file directory, log panel only when unset
    pub log_dir: Option<String>,
    /// chrono format string used for displayed times
    pub clock_format: String,
    /// development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            total_seats: parse_total_seats(std::env::var("TOTAL_SEATS").ok().as_deref()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            clock_format: std::env::var("CLOCK_FORMAT")
                .ok()
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| DEFAULT_CLOCK_FORMAT.into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_seats: DEFAULT_TOTAL_SEATS,
            log_level: "info".into(),
            log_dir: None,
            clock_format: DEFAULT_CLOCK_FORMAT.into(),
            environment: "development".into(),
        }
    }
}

/// A restaurant with zero seats cannot take reservations, so 0 falls back too.
fn parse_total_seats(raw: Option<&str>) -> u32 {
    match raw {
        None => DEFAULT_TOTAL_SEATS,
        Some(value) => match value.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                tracing::warn!(
                    "Invalid TOTAL_SEATS '{}', falling back to {}",
                    value,
                    DEFAULT_TOTAL_SEATS
                );
                DEFAULT_TOTAL_SEATS
            }
        },
    }
}
