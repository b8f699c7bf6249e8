//! Catalog and row queries for export.
//!
//! Table and column names come from the catalog and are interpolated into SQL
//! as quoted identifiers; they are never taken from user input.

use log::debug;
use sqlx::sqlite::SqliteConnection;

use crate::config::{COLUMN_LIST_QUERY, TABLE_LIST_QUERY};
use crate::error_handling::ExportError;

use super::row::decode_row;
use super::types::TableDescriptor;

/// Quotes an SQLite identifier, doubling embedded double quotes.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Builds the `SELECT` used to read every row of `table`.
///
/// Columns are listed explicitly (rather than `*`) so the result always has
/// exactly the columns named in the header.
pub(crate) fn build_select(table: &TableDescriptor) -> String {
    let columns = table
        .columns
        .iter()
        .map(|column| quote_identifier(column))
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT {} FROM {}", columns, quote_identifier(&table.name))
}

/// Lists every table in catalog order, internal tables included.
pub async fn list_tables(conn: &mut SqliteConnection) -> Result<Vec<String>, ExportError> {
    let tables: Vec<String> = sqlx::query_scalar(TABLE_LIST_QUERY)
        .fetch_all(&mut *conn)
        .await
        .map_err(|source| ExportError::Introspection {
            table: None,
            source,
        })?;
    debug!("Catalog lists {} table(s)", tables.len());
    Ok(tables)
}

/// Reads the column names of `table` in declaration order.
pub async fn describe_table(
    conn: &mut SqliteConnection,
    table: &str,
) -> Result<TableDescriptor, ExportError> {
    let columns: Vec<String> = sqlx::query_scalar(COLUMN_LIST_QUERY)
        .bind(table)
        .fetch_all(&mut *conn)
        .await
        .map_err(|source| ExportError::Introspection {
            table: Some(table.to_string()),
            source,
        })?;
    debug!("Table '{}' has {} column(s)", table, columns.len());
    Ok(TableDescriptor {
        name: table.to_string(),
        columns,
    })
}

/// Fetches every row of `table`, in natural retrieval order, as CSV fields.
///
/// The whole result set is materialized before returning.
pub async fn fetch_rows(
    conn: &mut SqliteConnection,
    table: &TableDescriptor,
) -> Result<Vec<Vec<String>>, ExportError> {
    let read_error = |source: sqlx::Error| ExportError::Read {
        table: table.name.clone(),
        source,
    };

    let query = build_select(table);
    debug!("Reading rows: {}", query);
    let rows = sqlx::query(&query)
        .fetch_all(&mut *conn)
        .await
        .map_err(read_error)?;

    rows.iter()
        .map(|row| decode_row(row).map_err(read_error))
        .collect()
}
