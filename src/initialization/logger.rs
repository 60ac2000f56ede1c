//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colored levels) and JSON formats. Logs go to stderr so they never
/// mix with the progress lines printed on stdout.
///
/// The logger reads from the `RUST_LOG` environment variable first; the
/// provided `level` overrides it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show every moved file
/// website_organizer https://example.com --log-level debug
///
/// # Machine-readable logs
/// website_organizer https://example.com --log-level info --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for &(module, ceiling) in DEPENDENCY_LOG_CEILINGS {
        builder.filter_module(module, ceiling.min(level));
    }
    builder.filter_module("website_organizer", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(
                        chrono::Utc::now().timestamp_millis(),
                        record.level(),
                        record.target(),
                        &record.args().to_string(),
                    )
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    level.to_string().color(level_color(level)),
                    record.args()
                )
            });
        }
    }

    // try_init so a second call reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Most verbose level let through for dependencies that log via `log`.
///
/// html5ever reports every recoverable parse error of the fetched page at
/// warn/debug; reqwest logs each connection and redirect at debug.
const DEPENDENCY_LOG_CEILINGS: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
];

fn level_color(level: log::Level) -> Color {
    match level {
        log::Level::Error => Color::Red,
        log::Level::Warn => Color::Yellow,
        log::Level::Info => Color::Green,
        log::Level::Debug => Color::Blue,
        log::Level::Trace => Color::Magenta,
    }
}

fn json_line(ts_millis: i64, level: log::Level, target: &str, msg: &str) -> String {
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        ts_millis,
        level,
        target,
        serde_json::to_string(msg).unwrap_or_else(|_| "\"\"".into())
    )
}
