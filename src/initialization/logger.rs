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
/// (colored level, with a marker on warnings and errors) and JSON formats for
/// structured logging. Targets inside this crate are printed without the
/// crate prefix.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-query debug output
/// sqlite_to_csv app.db ./tables --log-level debug
///
/// # Machine-readable logs
/// sqlite_to_csv app.db ./tables --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // sqlx logs every statement; only keep its warnings (slow queries, etc.)
    builder.filter_module("sqlx", LevelFilter::Warn);
    builder.filter_module("sqlite_to_csv", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    short_target(record.target()),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => format!("❌ {level:<5}").red(),
                    log::Level::Warn => format!("⚠️ {level:<5}").yellow(),
                    log::Level::Info => format!("{level:<5}").green(),
                    log::Level::Debug | log::Level::Trace => format!("{level:<5}").dimmed(),
                };

                writeln!(
                    buf,
                    "{} {} {}",
                    colored_level,
                    short_target(record.target()).cyan(),
                    record.args()
                )
            });
        }
    }

    // try_init() so a second initialization (e.g. in tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Drops the crate prefix from a log target (`sqlite_to_csv::export::csv`
/// becomes `export::csv`). Targets of other crates are kept as-is.
fn short_target(target: &str) -> &str {
    match target.strip_prefix(env!("CARGO_CRATE_NAME")) {
        Some("") => target,
        Some(rest) => rest.strip_prefix("::").unwrap_or(target),
        None => target,
    }
}
