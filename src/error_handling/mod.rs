//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`ExportError`, `InitializationError`)
//! - Error categorization (`ErrorKind`)
//! - The failure record written to the error log
//!
//! Every `ExportError` maps to exactly one `ErrorKind`:
//! - **ConnectionError**: the source database could not be opened
//! - **IntrospectionError**: the catalog or a column list could not be queried
//! - **ReadError**: rows could not be fetched
//! - **WriteError**: an output file could not be written
//! - **UnknownError**: anything else, including panics

mod record;
mod types;

// Re-export public API
pub use record::{format_error_record, write_error_record};
pub use types::{ErrorKind, ExportError, InitializationError};
