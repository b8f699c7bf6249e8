//! CSV export functionality.
//!
//! Writes one table to one CSV file: a header line of column names, then one
//! line per row. Fields are quoted only when they contain a comma, a double
//! quote, or a line break; embedded quotes are doubled.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::config::CSV_EXTENSION;
use crate::error_handling::ExportError;

use super::types::TableDescriptor;

/// Returns the output path for `table`: `<output_dir>/<table>.csv`.
pub fn table_csv_path(output_dir: &Path, table: &str) -> PathBuf {
    output_dir.join(format!("{table}.{CSV_EXTENSION}"))
}

/// Builds the CSV writer used for every table.
pub(crate) fn csv_writer<W: Write>(inner: W) -> Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(inner)
}

/// Writes the header and `rows` of `table` into `writer`, then flushes it.
pub(crate) fn write_records<W: Write>(
    writer: &mut Writer<W>,
    table: &TableDescriptor,
    rows: &[Vec<String>],
) -> Result<(), csv::Error> {
    writer.write_record(&table.columns)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Exports `rows` of `table` to `<output_dir>/<table>.csv`.
///
/// The file is created or truncated, fully written, flushed, and closed before
/// this returns.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns `ExportError::Write` if the file cannot be created or written.
pub fn export_csv(
    output_dir: &Path,
    table: &TableDescriptor,
    rows: &[Vec<String>],
) -> Result<PathBuf, ExportError> {
    let path = table_csv_path(output_dir, &table.name);
    let write_error = |source: csv::Error| ExportError::Write {
        table: table.name.clone(),
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(|e| write_error(e.into()))?;
    let mut writer = csv_writer(file);
    write_records(&mut writer, table, rows).map_err(write_error)?;
    // Dropping the writer closes the file.
    drop(writer);

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorKind;
    use tempfile::TempDir;

    fn users() -> TableDescriptor {
        TableDescriptor {
            name: "users".to_string(),
            columns: vec!["id".to_string(), "name".to_string()],
        }
    }

    fn render(table: &TableDescriptor, rows: &[Vec<String>]) -> String {
        let mut writer = csv_writer(Vec::new());
        write_records(&mut writer, table, rows).expect("Failed to write records");
        String::from_utf8(writer.into_inner().expect("Failed to finish writer"))
            .expect("CSV output should be UTF-8")
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_table_csv_path() {
        assert_eq!(
            table_csv_path(Path::new("out"), "users"),
            PathBuf::from("out").join("users.csv")
        );
    }

    #[test]
    fn test_plain_fields_are_not_quoted() {
        let output = render(&users(), &[row(&["1", "Alice"]), row(&["2", "Bob"])]);
        assert_eq!(output, "id,name\n1,Alice\n2,Bob\n");
    }

    #[test]
    fn test_special_characters_are_quoted() {
        let output = render(
            &users(),
            &[
                row(&["1", "Smith, Jane"]),
                row(&["2", "say \"hi\""]),
                row(&["3", "two\nlines"]),
                row(&["4", "carriage\rreturn"]),
            ],
        );
        assert_eq!(
            output,
            "id,name\n1,\"Smith, Jane\"\n2,\"say \"\"hi\"\"\"\n3,\"two\nlines\"\n4,\"carriage\rreturn\"\n"
        );
    }

    #[test]
    fn test_header_only_for_empty_table() {
        assert_eq!(render(&users(), &[]), "id,name\n");
    }

    #[test]
    fn test_export_csv_overwrites_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let stale = temp_dir.path().join("users.csv");
        std::fs::write(&stale, "stale contents that are longer than the new file\n")
            .expect("Failed to write stale file");

        let path = export_csv(temp_dir.path(), &users(), &[row(&["1", "Alice"])])
            .expect("Failed to export");
        assert_eq!(path, stale);
        assert_eq!(
            std::fs::read_to_string(&path).expect("Failed to read CSV"),
            "id,name\n1,Alice\n"
        );
    }

    #[test]
    fn test_export_csv_missing_directory_is_write_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("does-not-exist");

        let err = export_csv(&missing, &users(), &[]).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::WriteError);
        assert_eq!(err.table(), Some("users"));
        assert!(!missing.exists(), "output directory must not be created");
    }
}
