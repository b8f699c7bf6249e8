//! Failure record written to the error log.
//!
//! A record is plain text:
//!
//! ```text
//! <ErrorKind>
//! <message>
//! trace:
//!   recorded at: <RFC 3339 timestamp>
//!   table: <table>            (when a table was being processed)
//!   path: <file>              (when a file was involved)
//!   caused by: <source>       (one line per error in the source chain)
//! ```

use std::error::Error as StdError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};

use super::types::ExportError;

/// Renders the failure record for `error`.
pub fn format_error_record(error: &ExportError) -> String {
    let mut record = format!("{}\n{}\ntrace:\n", error.kind(), error);
    record.push_str(&format!(
        "  recorded at: {}\n",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    if let Some(table) = error.table() {
        record.push_str(&format!("  table: {table}\n"));
    }
    if let Some(path) = error.path() {
        record.push_str(&format!("  path: {}\n", path.display()));
    }

    let mut cause = error.source();
    while let Some(err) = cause {
        record.push_str(&format!("  caused by: {err}\n"));
        cause = err.source();
    }
    record
}

/// Writes the failure record for `error` to `path`.
///
/// The file is opened in truncating write mode, so it holds only the most
/// recent failure. Missing parent directories are created.
pub fn write_error_record(path: &Path, error: &ExportError) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(format_error_record(error).as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_error() -> ExportError {
        ExportError::Write {
            table: "users".to_string(),
            path: PathBuf::from("out/users.csv"),
            source: csv::Error::from(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            )),
        }
    }

    #[test]
    fn test_record_starts_with_kind_and_message() {
        let record = format_error_record(&write_error());
        let mut lines = record.lines();
        assert_eq!(lines.next(), Some("WriteError"));
        assert!(lines
            .next()
            .is_some_and(|line| line.starts_with("Failed to write table 'users'")));
        assert_eq!(lines.next(), Some("trace:"));
    }

    #[test]
    fn test_record_includes_trace_context() {
        let record = format_error_record(&write_error());
        assert!(record.contains("  recorded at: "));
        assert!(record.contains("  table: users\n"));
        assert!(record.contains("  path: out/users.csv\n"));
        assert!(record.contains("  caused by: permission denied"));
    }

    #[test]
    fn test_record_without_table_or_path() {
        let record = format_error_record(&ExportError::Unknown("panic: boom".to_string()));
        assert!(record.starts_with("UnknownError\nUnexpected export failure: panic: boom\n"));
        assert!(!record.contains("  table:"));
        assert!(!record.contains("  path:"));
        assert!(!record.contains("caused by"));
    }

    #[test]
    fn test_write_creates_parent_and_truncates() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_path = temp_dir.path().join("tables").join("errors.txt");

        write_error_record(&log_path, &write_error()).expect("first write");
        write_error_record(&log_path, &ExportError::Unknown("second".to_string()))
            .expect("second write");

        let contents = fs::read_to_string(&log_path).expect("Failed to read error log");
        assert!(contents.starts_with("UnknownError\n"));
        assert!(!contents.contains("WriteError"));
    }
}
