//! Source database connection management.
//!
//! The exporter holds exactly one connection for the whole run:
//! - opened read-only, never creating the file
//! - checked once with a catalog query so a non-database file fails here rather than mid-export
//! - closed exactly once by the caller

use std::path::Path;

use log::{debug, error, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

use crate::config::CONNECTION_CHECK_QUERY;
use crate::error_handling::ExportError;

/// Opens a read-only connection to an existing SQLite file.
///
/// # Errors
///
/// Returns `ExportError::Connection` if the file is missing, unreadable, or
/// not a SQLite database.
pub async fn open_source_db(db_path: &Path) -> Result<SqliteConnection, ExportError> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(false)
        .read_only(true);

    let connection_error = |source: sqlx::Error| {
        error!("Failed to open database {}: {source}", db_path.display());
        ExportError::Connection {
            path: db_path.to_path_buf(),
            source,
        }
    };

    let mut conn = SqliteConnection::connect_with(&options)
        .await
        .map_err(connection_error)?;

    if let Err(e) = sqlx::query_scalar::<_, i64>(CONNECTION_CHECK_QUERY)
        .fetch_one(&mut conn)
        .await
    {
        // The handle is already open; release it before reporting.
        close_source_db(conn).await;
        return Err(connection_error(e));
    }

    debug!("Opened source database {}", db_path.display());
    Ok(conn)
}

/// Closes the source connection, logging (not propagating) any failure.
pub async fn close_source_db(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close source database cleanly: {e}");
    } else {
        debug!("Closed source database");
    }
}
