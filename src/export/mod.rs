//! Export functionality for SQLite tables.
//!
//! This module reads the table catalog, the columns and rows of each table,
//! and writes one CSV file per table.

mod csv;
mod queries;
mod row;
mod types;

use std::path::Path;

use log::info;
use sqlx::sqlite::SqliteConnection;

use crate::error_handling::ExportError;

pub use self::csv::{export_csv, table_csv_path};
pub use queries::{describe_table, fetch_rows, list_tables};
pub use row::{decode_field, decode_row, FieldValue};
pub use types::{ExportReport, TableDescriptor, TableExport};

/// Exports one table: columns, then rows, then the CSV file.
pub async fn export_table(
    conn: &mut SqliteConnection,
    output_dir: &Path,
    table_name: &str,
) -> Result<TableExport, ExportError> {
    let table = describe_table(conn, table_name).await?;
    let rows = fetch_rows(conn, &table).await?;
    let path = export_csv(output_dir, &table, &rows)?;

    info!(
        "Exported table '{}' ({} row{}) to {}",
        table.name,
        rows.len(),
        if rows.len() == 1 { "" } else { "s" },
        path.display()
    );

    Ok(TableExport {
        name: table.name,
        columns: table.columns.len(),
        rows: rows.len(),
        path,
    })
}

/// Exports every table in catalog order, stopping at the first failure.
///
/// Completed tables are pushed onto `exported` as they finish, so the caller
/// keeps them even when a later table fails.
pub async fn export_all_tables(
    conn: &mut SqliteConnection,
    output_dir: &Path,
    exported: &mut Vec<TableExport>,
) -> Result<(), ExportError> {
    let tables = list_tables(conn).await?;
    info!("Found {} table(s) to export", tables.len());

    for table_name in &tables {
        let table = export_table(conn, output_dir, table_name).await?;
        exported.push(table);
    }

    Ok(())
}
