//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_OUTPUT_DIR;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and library configuration.
///
/// Parsed by `clap` in the binary; the library only reads `url` and `output`,
/// so it can also be built programmatically with `..Default::default()`.
///
/// # Examples
///
/// ```bash
/// # Save into ./copied_website
/// website_organizer https://example.com
///
/// # Custom output directory
/// website_organizer https://example.com -o ./mirror
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "website_organizer", about = "Website Copy Organizer")]
pub struct Config {
    /// URL of the website to copy (https:// is assumed when no scheme is given)
    pub url: String,

    /// Output directory
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}
