//! Logger initialization.
//!
//! This module provides the function that installs the process-wide logger
//! with custom formatting. Log records are the only operator-facing surface of
//! a run, so every recovered failure ends up here.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use env_logger::Env;
use log::LevelFilter;

/// Dependencies whose logging is capped regardless of the default level.
const DEPENDENCY_FILTERS: [(&str, LevelFilter); 4] = [
    ("sqlx", LevelFilter::Info),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

/// Initializes the logger with the specified default level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// `RUST_LOG` takes precedence over `default_level` when it is set, so an
/// operator can turn on `RUST_LOG=catalog_scraper=debug` to see every
/// extracted product without rebuilding.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(
    default_level: LevelFilter,
    format: LogFormat,
) -> Result<(), InitializationError> {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level.as_str()));

    for (module, level) in DEPENDENCY_FILTERS {
        builder.filter_module(module, level);
    }

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}
