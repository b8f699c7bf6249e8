//! Dynamic row decoding.
//!
//! SQLite columns are loosely typed, so each value is decoded from its runtime
//! storage class rather than from the declared column type.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, TypeInfo, ValueRef};

/// A single field value read from a table.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// SQL NULL
    Null,
    /// INTEGER storage class
    Integer(i64),
    /// REAL storage class
    Real(f64),
    /// TEXT storage class
    Text(String),
    /// BLOB storage class
    Blob(Vec<u8>),
}

impl FieldValue {
    /// Renders the value as a CSV field.
    ///
    /// NULL becomes an empty field and is indistinguishable from empty text.
    /// Reals always keep a fractional part or exponent (`3.0`, `1e20`), and
    /// blobs are rendered as lowercase hex.
    pub fn to_field(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Integer(v) => v.to_string(),
            FieldValue::Real(v) => format!("{v:?}"),
            FieldValue::Text(v) => v.clone(),
            FieldValue::Blob(bytes) => bytes.iter().map(|b| format!("{b:02x}")).collect(),
        }
    }
}

/// Decodes the value at `index` of `row`.
pub fn decode_field(row: &SqliteRow, index: usize) -> Result<FieldValue, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(FieldValue::Null);
    }

    // Non-null values report their storage class, not the declared type.
    let value = match raw.type_info().name() {
        "INTEGER" => FieldValue::Integer(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" => FieldValue::Real(row.try_get_unchecked::<f64, _>(index)?),
        "BLOB" => FieldValue::Blob(row.try_get_unchecked::<Vec<u8>, _>(index)?),
        _ => {
            let bytes = row.try_get_unchecked::<Vec<u8>, _>(index)?;
            FieldValue::Text(String::from_utf8_lossy(&bytes).into_owned())
        }
    };
    Ok(value)
}

/// Decodes every column of `row` into CSV fields.
pub fn decode_row(row: &SqliteRow) -> Result<Vec<String>, sqlx::Error> {
    (0..row.len())
        .map(|index| decode_field(row, index).map(|value| value.to_field()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqliteConnection;
    use sqlx::Connection;

    #[test]
    fn test_null_renders_empty() {
        assert_eq!(FieldValue::Null.to_field(), "");
    }

    #[test]
    fn test_integer_rendering() {
        assert_eq!(FieldValue::Integer(42).to_field(), "42");
        assert_eq!(FieldValue::Integer(-7).to_field(), "-7");
        assert_eq!(
            FieldValue::Integer(i64::MAX).to_field(),
            "9223372036854775807"
        );
    }

    #[test]
    fn test_real_rendering() {
        assert_eq!(FieldValue::Real(2.5).to_field(), "2.5");
        assert_eq!(FieldValue::Real(3.0).to_field(), "3.0");
        assert_eq!(FieldValue::Real(-0.125).to_field(), "-0.125");
        assert_eq!(FieldValue::Real(1e20).to_field(), "1e20");
    }

    #[test]
    fn test_text_and_blob_rendering() {
        assert_eq!(
            FieldValue::Text("a,b \"c\"".to_string()).to_field(),
            "a,b \"c\""
        );
        assert_eq!(
            FieldValue::Blob(vec![0x00, 0xab, 0x10, 0xff]).to_field(),
            "00ab10ff"
        );
        assert_eq!(FieldValue::Blob(Vec::new()).to_field(), "");
    }

    #[tokio::test]
    async fn test_decode_row_uses_storage_class() {
        let mut conn = SqliteConnection::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        // A loosely typed column may hold a different class on every row.
        let row = sqlx::query("SELECT 1, 2.5, 'text', x'CAFE', NULL")
            .fetch_one(&mut conn)
            .await
            .expect("Failed to select literals");

        assert_eq!(decode_field(&row, 0).unwrap(), FieldValue::Integer(1));
        assert_eq!(decode_field(&row, 1).unwrap(), FieldValue::Real(2.5));
        assert_eq!(
            decode_field(&row, 2).unwrap(),
            FieldValue::Text("text".to_string())
        );
        assert_eq!(
            decode_field(&row, 3).unwrap(),
            FieldValue::Blob(vec![0xca, 0xfe])
        );
        assert_eq!(decode_field(&row, 4).unwrap(), FieldValue::Null);

        assert_eq!(
            decode_row(&row).unwrap(),
            vec!["1", "2.5", "text", "cafe", ""]
        );
    }
}
