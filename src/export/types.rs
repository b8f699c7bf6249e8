//! Export types and results.

use std::path::PathBuf;

use crate::error_handling::ExportError;

/// A table to export: its name and its column names in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDescriptor {
    /// Table name as stored in the catalog
    pub name: String,
    /// Column names, ordered by declaration
    pub columns: Vec<String>,
}

/// Result of exporting a single table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableExport {
    /// Table name
    pub name: String,
    /// Number of columns (fields per CSV line)
    pub columns: usize,
    /// Number of data rows written (header excluded)
    pub rows: usize,
    /// CSV file that was written
    pub path: PathBuf,
}

/// Results of an export run.
///
/// `tables` lists every table whose file was fully written, in catalog order.
/// When `error` is set the run stopped at that failure and later tables were
/// not attempted.
#[derive(Debug)]
pub struct ExportReport {
    /// Source database path
    pub source: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
    /// Tables exported successfully, in order
    pub tables: Vec<TableExport>,
    /// Failure that stopped the run, if any
    pub error: Option<ExportError>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ExportReport {
    /// Returns `true` when every table in the catalog was exported.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Total data rows written across all exported tables.
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|table| table.rows).sum()
    }
}
