// Shared test helpers for fixture databases and CSV output.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

use sqlite_to_csv::Config;

/// Creates a SQLite database at `db_path` and runs `statements` against it.
/// The pool is closed before returning so the file is complete on disk.
pub async fn create_fixture_db(db_path: &Path, statements: &[&str]) {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .expect("Failed to create fixture database");
    for statement in statements {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .unwrap_or_else(|e| panic!("Failed to run `{statement}`: {e}"));
    }
    pool.close().await;
}

/// Builds a config whose output directory and error log live under `root`.
/// The output directory is created; the error log is not.
#[allow(dead_code)] // Used by other test files
pub fn test_config(root: &Path, source: PathBuf) -> Config {
    let output_dir = root.join("out");
    std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");
    Config {
        source,
        output_dir,
        error_log: root.join("logs").join("errors.txt"),
        ..Default::default()
    }
}

/// Reads a CSV file back with a standard reader: (header, rows).
#[allow(dead_code)] // Used by other test files
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open CSV file");
    let header = reader
        .headers()
        .expect("Failed to read CSV header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("Failed to read CSV record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (header, rows)
}

/// Lists the file names in `dir`, sorted.
#[allow(dead_code)] // Used by other test files
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
