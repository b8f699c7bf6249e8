//! Configuration constants.
//!
//! Defaults shared by the CLI options and the library `Config`.

/// Default location of the failure record, relative to the working directory.
///
/// The file is truncated on every failing run, so it only ever holds the
/// most recent failure.
pub const DEFAULT_ERROR_LOG_PATH: &str = "tables/errors.txt";

/// Environment variable consulted when `--error-log` is not given.
pub const ERROR_LOG_ENV_VAR: &str = "SQLITE_TO_CSV_ERROR_LOG";

/// Extension appended to each table name to form its output file name.
pub const CSV_EXTENSION: &str = "csv";

/// Catalog query listing every table, in catalog (creation) order.
///
/// Internal tables such as `sqlite_sequence` are deliberately not filtered.
pub const TABLE_LIST_QUERY: &str = "SELECT name FROM sqlite_master WHERE type = 'table'";

/// Column introspection query; `?1` is the table name.
///
/// `table_xinfo` also reports generated columns (`hidden` 2 and 3), which
/// `table_info` omits. `hidden = 1` marks the hidden columns of virtual
/// tables, which `SELECT *` does not return either.
pub const COLUMN_LIST_QUERY: &str =
    "SELECT name FROM pragma_table_xinfo(?1) WHERE hidden IN (0, 2, 3) ORDER BY cid";

/// Sanity query run right after connecting.
///
/// SQLite opens non-database files lazily, so the first real read is what
/// surfaces "file is not a database".
pub const CONNECTION_CHECK_QUERY: &str = "SELECT count(*) FROM sqlite_master";

/// Exit code used by `--fail-on error` when the export did not complete.
pub const EXIT_CODE_EXPORT_FAILED: i32 = 2;
