//! Logging Infrastructure
//!
//! The console owns the terminal in raw mode, so events go to a `tui-logger`
//! panel instead of stdout, plus an optional daily rolling file.

use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the level filter, `RUST_LOG` wins over the configured level
pub fn build_filter(log_level: Option<&str>) -> EnvFilter {
    let level = log_level.unwrap_or("info");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the logger for the console
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// `log_dir` is ignored when the directory does not exist.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let file_layer = log_dir
        .map(Path::new)
        .filter(|p| p.exists())
        .and_then(|p| p.to_str())
        .map(|dir| {
            let file_appender = tracing_appender::rolling::daily(dir, "front-desk");
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(false)
        });

    let init = tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .with(build_filter(log_level))
        .try_init();
    if init.is_err() {
        // Already initialized (tests, repeated console runs)
        return;
    }

    // Dependencies that log through the `log` crate
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);
}
