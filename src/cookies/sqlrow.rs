//! Typed column access for browser cookie databases.
//!
//! SQLite columns are dynamically typed, so every value is checked against
//! the storage class the reader expects before it is used.

use crate::base::cookieerror::{ColumnError, ColumnType, CookieError};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row};
use std::io;
use std::path::Path;

/// Open a cookie database read-only.
pub fn open_read_only(path: &Path) -> Result<Connection, CookieError> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("cookie database not found: {}", path.display()),
        )
        .into());
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

/// A row of `table` with typed, checked column accessors.
pub struct RowReader<'r, 'stmt> {
    table: &'static str,
    row: &'r Row<'stmt>,
}

impl<'r, 'stmt> RowReader<'r, 'stmt> {
    pub fn new(table: &'static str, row: &'r Row<'stmt>) -> Self {
        Self { table, row }
    }

    /// A `TEXT` column.
    pub fn text(&self, index: usize, column: &'static str) -> Result<String, CookieError> {
        match self.row.get_ref(index)? {
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| {
                    ColumnError::InvalidUtf8 {
                        table: self.table,
                        column,
                    }
                    .into()
                }),
            other => Err(self.mismatch(index, column, ColumnType::Text, other)),
        }
    }

    /// An `INTEGER` column.
    pub fn integer(&self, index: usize, column: &'static str) -> Result<i64, CookieError> {
        match self.row.get_ref(index)? {
            ValueRef::Integer(value) => Ok(value),
            other => Err(self.mismatch(index, column, ColumnType::Integer, other)),
        }
    }

    /// A `BLOB` column.
    pub fn blob(&self, index: usize, column: &'static str) -> Result<Vec<u8>, CookieError> {
        match self.row.get_ref(index)? {
            ValueRef::Blob(bytes) => Ok(bytes.to_vec()),
            other => Err(self.mismatch(index, column, ColumnType::Blob, other)),
        }
    }

    /// A byte-string column stored as either `BLOB` or `TEXT`.
    ///
    /// A `BLOB DEFAULT ''` column holds `TEXT` for rows that never set it.
    pub fn bytes(&self, index: usize, column: &'static str) -> Result<Vec<u8>, CookieError> {
        match self.row.get_ref(index)? {
            ValueRef::Blob(bytes) | ValueRef::Text(bytes) => Ok(bytes.to_vec()),
            other => Err(self.mismatch(index, column, ColumnType::Blob, other)),
        }
    }

    fn mismatch(
        &self,
        index: usize,
        column: &'static str,
        expected: ColumnType,
        found: ValueRef<'_>,
    ) -> CookieError {
        ColumnError::TypeMismatch {
            table: self.table,
            column,
            index,
            expected,
            found: found.data_type().into(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_row<T>(sql: &str, f: impl FnOnce(&RowReader<'_, '_>) -> T) -> T {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare(sql).unwrap();
        let mut rows = stmt.query([]).unwrap();
        let row = rows.next().unwrap().unwrap();
        f(&RowReader::new("t", row))
    }

    #[test]
    fn test_typed_values() {
        with_row("SELECT 'abc', 42, x'0102', ''", |row| {
            assert_eq!(row.text(0, "a").unwrap(), "abc");
            assert_eq!(row.integer(1, "b").unwrap(), 42);
            assert_eq!(row.blob(2, "c").unwrap(), vec![1, 2]);
            assert_eq!(row.bytes(2, "c").unwrap(), vec![1, 2]);
            assert!(row.bytes(3, "d").unwrap().is_empty());
        });
    }

    #[test]
    fn test_mismatch_reports_expected_and_found() {
        with_row("SELECT 42, NULL, 1.5", |row| {
            let err = row.text(0, "host_key").unwrap_err();
            match err {
                CookieError::Column(ColumnError::TypeMismatch {
                    table,
                    column,
                    index,
                    expected,
                    found,
                }) => {
                    assert_eq!(table, "t");
                    assert_eq!(column, "host_key");
                    assert_eq!(index, 0);
                    assert_eq!(expected, ColumnType::Text);
                    assert_eq!(found, ColumnType::Integer);
                }
                other => panic!("Expected TypeMismatch, got {:?}", other),
            }

            assert!(matches!(
                row.integer(1, "expiry"),
                Err(CookieError::Column(ColumnError::TypeMismatch {
                    found: ColumnType::Null,
                    ..
                }))
            ));
            assert!(matches!(
                row.bytes(2, "encrypted_value"),
                Err(CookieError::Column(ColumnError::TypeMismatch {
                    expected: ColumnType::Blob,
                    found: ColumnType::Real,
                    ..
                }))
            ));
        });
    }

    #[test]
    fn test_index_out_of_range_is_database_error() {
        with_row("SELECT 1", |row| {
            assert!(matches!(
                row.integer(5, "missing"),
                Err(CookieError::Database { .. })
            ));
        });
    }

    #[test]
    fn test_open_missing_database() {
        let err = open_read_only(Path::new("/nonexistent/cookies.sqlite")).unwrap_err();
        assert!(matches!(err, CookieError::Io(e) if e.kind() == io::ErrorKind::NotFound));
    }
}
