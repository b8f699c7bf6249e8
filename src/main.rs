//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sqlite_to_csv` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output and exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use sqlite_to_csv::config::Opt;
use sqlite_to_csv::initialization::init_logger_with;
use sqlite_to_csv::{run_export, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Optional .env in the working directory (RUST_LOG, SQLITE_TO_CSV_ERROR_LOG)
    let _ = dotenvy::dotenv();

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let report = run_export(&config).await;

    match &report.error {
        None => {
            println!(
                "✅ Exported {} table{} ({} rows) from {} to {} in {:.1}s",
                report.tables.len(),
                if report.tables.len() == 1 { "" } else { "s" },
                report.total_rows(),
                report.source.display(),
                report.output_dir.display(),
                report.elapsed_seconds
            );
        }
        Some(e) => {
            eprintln!(
                "sqlite_to_csv error after {} table(s): {} (details in {})",
                report.tables.len(),
                e,
                config.error_log.display()
            );
        }
    }

    let exit_code = config.fail_on.exit_code(&report);
    if exit_code != 0 {
        process::exit(exit_code);
    }
    Ok(())
}
