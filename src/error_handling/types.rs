//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::path::{Path, PathBuf};

use log::SetLoggerError;
use strum_macros::{Display, EnumIter as EnumIterMacro, IntoStaticStr};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Category of an export failure, as recorded in the error log.
///
/// The variant names are written verbatim as the first line of a failure
/// record, so renaming one changes the error log format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display, IntoStaticStr,
)]
#[allow(clippy::enum_variant_names)]
pub enum ErrorKind {
    /// The source file is missing, unreadable, or not a SQLite database.
    ConnectionError,
    /// The table catalog or a column list could not be queried.
    IntrospectionError,
    /// Rows of a table could not be fetched or decoded.
    ReadError,
    /// An output file could not be created or written.
    WriteError,
    /// Anything else, including a panic caught at the export boundary.
    UnknownError,
}

/// A failure that stopped an export run.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Opening or probing the source database failed.
    #[error("Failed to open database {}: {source}", .path.display())]
    Connection {
        /// Source database path
        path: PathBuf,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },

    /// Listing tables (`table` is `None`) or listing a table's columns failed.
    #[error("Failed to introspect {}: {source}", introspection_target(.table))]
    Introspection {
        /// Table whose columns were being listed
        table: Option<String>,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },

    /// Fetching or decoding a table's rows failed.
    #[error("Failed to read rows of table '{table}': {source}")]
    Read {
        /// Table being read
        table: String,
        /// Driver error
        #[source]
        source: sqlx::Error,
    },

    /// Creating, writing, or flushing a table's CSV file failed.
    #[error("Failed to write table '{table}' to {}: {source}", .path.display())]
    Write {
        /// Table being written
        table: String,
        /// Output file path
        path: PathBuf,
        /// Writer error (I/O failures are wrapped by the csv writer)
        #[source]
        source: csv::Error,
    },

    /// Unexpected failure with no more specific category.
    #[error("Unexpected export failure: {0}")]
    Unknown(String),
}

fn introspection_target(table: &Option<String>) -> String {
    match table {
        Some(name) => format!("columns of table '{name}'"),
        None => "table catalog".to_string(),
    }
}

impl ExportError {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::Connection { .. } => ErrorKind::ConnectionError,
            ExportError::Introspection { .. } => ErrorKind::IntrospectionError,
            ExportError::Read { .. } => ErrorKind::ReadError,
            ExportError::Write { .. } => ErrorKind::WriteError,
            ExportError::Unknown(_) => ErrorKind::UnknownError,
        }
    }

    /// Returns the table being processed when the error occurred, if any.
    pub fn table(&self) -> Option<&str> {
        match self {
            ExportError::Introspection { table, .. } => table.as_deref(),
            ExportError::Read { table, .. } | ExportError::Write { table, .. } => {
                Some(table.as_str())
            }
            ExportError::Connection { .. } | ExportError::Unknown(_) => None,
        }
    }

    /// Returns the file involved in the error (source database or output CSV), if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportError::Connection { path, .. } | ExportError::Write { path, .. } => {
                Some(path.as_path())
            }
            _ => None,
        }
    }

    /// Builds an `Unknown` error from a caught panic payload.
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "panic with non-string payload".to_string()
        };
        ExportError::Unknown(format!("panic: {message}"))
    }
}
