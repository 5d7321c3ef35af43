//! CLI option types.
//!
//! This module defines enums and structs used for command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::STDIN_PATH;

/// `--log-level` values. Logs go to stderr so stdout stays JSON.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Failures only
    Error,
    /// Default: skipped tags stay quiet
    Warn,
    /// Also notes where input is read from
    Info,
    /// One line per contributed property
    Debug,
    /// Every walk decision, including ignored keys
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        use log::LevelFilter;
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// `--log-format` values.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// `target [LEVEL] message`, level colored
    Plain,
    /// One JSON object per line
    Json,
}

/// Command-line options for the `opengraph` binary.
///
/// The binary only reads local input: a file path, or stdin when `file` is `-`.
///
/// # Examples
///
/// ```bash
/// curl -s https://example.com/post | opengraph https://example.com/post --absolute --fulfill
/// opengraph https://example.com/post page.html --pretty
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "opengraph", version, about)]
pub struct Opt {
    /// Address of the page the HTML came from (base for relative URLs)
    pub url: String,

    /// HTML file to read, or `-` for stdin
    #[arg(default_value = STDIN_PATH)]
    pub file: PathBuf,

    /// Rewrite image and favicon URLs to absolute form
    #[arg(long)]
    pub absolute: bool,

    /// Fill defaults (site name from the page host)
    #[arg(long)]
    pub fulfill: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
