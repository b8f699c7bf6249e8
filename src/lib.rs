//! sqlite_to_csv library: extracts a SQLite database into CSV files
//!
//! Every table listed in the database catalog is written to
//! `<output_dir>/<table>.csv`, with a header line of column names followed by
//! one line per row.
//!
//! # Example
//!
//! ```no_run
//! use sqlite_to_csv::extract;
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let report = extract(Path::new("app.db"), Path::new("tables")).await;
//! println!("Exported {} tables", report.tables.len());
//! if let Some(err) = &report.error {
//!     eprintln!("Export stopped early: {err}");
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use error_handling::{ErrorKind, ExportError};
pub use export::{ExportReport, TableExport};
pub use run::{extract, run_export};

// Internal run module (contains the top-level error boundary)
mod run {
    use std::panic::AssertUnwindSafe;
    use std::path::Path;
    use std::time::Instant;

    use futures::FutureExt;
    use log::{error, info};

    use crate::config::Config;
    use crate::error_handling::{write_error_record, ExportError};
    use crate::export::{export_all_tables, ExportReport};
    use crate::storage::{close_source_db, open_source_db};

    /// Extracts every table of `source` into `output_dir`.
    ///
    /// Failures are written to the default error log (`tables/errors.txt`,
    /// relative to the working directory). See [`run_export`].
    pub async fn extract(source: &Path, output_dir: &Path) -> ExportReport {
        let config = Config {
            source: source.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            ..Default::default()
        };
        run_export(&config).await
    }

    /// Runs an export with the provided configuration.
    ///
    /// This is the single error boundary of the exporter. It never fails:
    /// opening, catalog, read, and write errors (and panics inside the export
    /// loop) are caught here, written to `config.error_log`, and returned in
    /// [`ExportReport::error`]. The run stops at the first failure; files
    /// already written for earlier tables are left in place.
    ///
    /// The source connection is closed before returning on every path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sqlite_to_csv::{run_export, Config};
    /// use std::path::PathBuf;
    ///
    /// # async fn example() {
    /// let config = Config {
    ///     source: PathBuf::from("app.db"),
    ///     output_dir: PathBuf::from("tables"),
    ///     error_log: PathBuf::from("export-errors.txt"),
    ///     ..Default::default()
    /// };
    /// let report = run_export(&config).await;
    /// assert!(report.is_complete());
    /// # }
    /// ```
    pub async fn run_export(config: &Config) -> ExportReport {
        let start_time = Instant::now();
        let mut tables = Vec::new();

        let result = match open_source_db(&config.source).await {
            Ok(mut conn) => {
                let outcome = AssertUnwindSafe(export_all_tables(
                    &mut conn,
                    &config.output_dir,
                    &mut tables,
                ))
                .catch_unwind()
                .await;
                close_source_db(conn).await;
                outcome.unwrap_or_else(|payload| Err(ExportError::from_panic(payload)))
            }
            Err(e) => Err(e),
        };

        let error = result.err();
        if let Some(err) = &error {
            error!("[{}] {}", err.kind(), err);
            if let Err(log_err) = write_error_record(&config.error_log, err) {
                error!(
                    "Failed to write error log {}: {log_err}",
                    config.error_log.display()
                );
            }
        }

        let report = ExportReport {
            source: config.source.clone(),
            output_dir: config.output_dir.clone(),
            tables,
            error,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        };
        info!(
            "Exported {} table(s), {} row(s) in {:.2}s",
            report.tables.len(),
            report.total_rows(),
            report.elapsed_seconds
        );
        report
    }
}
