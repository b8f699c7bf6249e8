//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_ERROR_LOG_PATH, ERROR_LOG_ENV_VAR, EXIT_CODE_EXPORT_FAILED,
};
use crate::export::ExportReport;

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

/// Exit code policy for a run that stopped on an error.
///
/// The failure is always written to the error log. This only decides whether
/// the process exit status reflects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0, even when the export stopped early (default)
    Never,
    /// Exit non-zero when any table failed to export
    Error,
}

impl FailOn {
    /// Maps a finished run to a process exit code under this policy.
    pub fn exit_code(&self, report: &ExportReport) -> i32 {
        match self {
            FailOn::Never => 0,
            FailOn::Error => {
                if report.is_complete() {
                    0
                } else {
                    EXIT_CODE_EXPORT_FAILED
                }
            }
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use sqlite_to_csv::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     source: PathBuf::from("app.db"),
///     output_dir: PathBuf::from("out"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file to read
    pub source: PathBuf,

    /// Existing directory receiving one CSV file per table
    pub output_dir: PathBuf,

    /// Where the failure record is written (truncated on each failing run)
    pub error_log: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Exit code policy
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("database.db"),
            output_dir: PathBuf::from("."),
            error_log: PathBuf::from(DEFAULT_ERROR_LOG_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// sqlite_to_csv app.db ./tables
///
/// # Keep the failure record somewhere else and fail the process on error
/// sqlite_to_csv app.db ./tables --error-log /tmp/export-errors.txt --fail-on error
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "sqlite_to_csv",
    version,
    about = "Extracts every table of a SQLite database into CSV files."
)]
pub struct Opt {
    /// SQLite database file to read
    #[arg(value_parser)]
    pub source: PathBuf,

    /// Existing directory to write `<table>.csv` files into
    #[arg(value_parser)]
    pub output_dir: PathBuf,

    /// File receiving the failure record (truncated on each failing run)
    #[arg(long, value_parser, env = ERROR_LOG_ENV_VAR, default_value = DEFAULT_ERROR_LOG_PATH)]
    pub error_log: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// When to exit non-zero: never|error
    ///
    /// `never` keeps the historical behavior of exiting 0 and leaving the
    /// failure in the error log only.
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            source: opt.source,
            output_dir: opt.output_dir,
            error_log: opt.error_log,
            log_level: opt.log_level,
            log_format: opt.log_format,
            fail_on: opt.fail_on,
        }
    }
}
