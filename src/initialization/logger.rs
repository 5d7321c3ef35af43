//! Logger setup for the `opengraph` binary.

use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Installs `env_logger` on stderr.
///
/// `RUST_LOG` is read first and `level` then overrides it for this crate, so
/// `RUST_LOG=opengraph::parse=trace` still narrows output to the walker.
/// Parser crates are held at warnings and above regardless.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("html5ever", LevelFilter::Error)
        .filter_module("selectors", LevelFilter::Warn)
        .filter_module("opengraph", level)
        .target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            let line = serde_json::json!({
                "ts": chrono::Utc::now().timestamp_millis(),
                "level": record.level().as_str(),
                "target": record.target(),
                "msg": record.args().to_string(),
            });
            writeln!(buf, "{}", line)
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                record.target().cyan(),
                colored_level(record.level()),
                record.args()
            )
        }),
    };

    builder.try_init()?;
    Ok(())
}

fn colored_level(level: Level) -> ColoredString {
    let name = level.as_str();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.purple(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_second_call_fails_cleanly() {
        // env_logger can only be installed once per process; whichever call
        // comes second must return an error rather than panic
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_colored_level_keeps_level_name() {
        assert_eq!(&*colored_level(Level::Warn), "WARN");
        assert_eq!(&*colored_level(Level::Trace), "TRACE");
    }
}
