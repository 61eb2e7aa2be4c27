use std::fmt;
use std::io;
use thiserror::Error;

/// Structure of a binary cookies file that was being read when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The 8-byte file header (magic + page count).
    Header,
    /// The big-endian page-size table following the header.
    PageSizeTable,
    /// The raw body of the page with the given index.
    PageBody(usize),
    /// The marker and record count at the start of a page.
    PageHeader(usize),
    /// The record-offset table of a page.
    OffsetTable(usize),
    /// The fixed-size header at the start of a record.
    RecordHeader,
    /// The 8-byte trailer after the last page.
    Checksum,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => f.write_str("file header"),
            Section::PageSizeTable => f.write_str("page size table"),
            Section::PageBody(page) => write!(f, "body of page {}", page),
            Section::PageHeader(page) => write!(f, "header of page {}", page),
            Section::OffsetTable(page) => write!(f, "offset table of page {}", page),
            Section::RecordHeader => f.write_str("record header"),
            Section::Checksum => f.write_str("checksum"),
        }
    }
}

/// Field of a cookie record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The record itself, addressed by the page's offset table.
    Record,
    Domain,
    Name,
    Path,
    Value,
    Expiration,
    Creation,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Record => "record",
            Field::Domain => "domain",
            Field::Name => "name",
            Field::Path => "path",
            Field::Value => "value",
            Field::Expiration => "expiration",
            Field::Creation => "creation",
        };
        f.write_str(name)
    }
}

/// Malformed `Cookies.binarycookies` data.
///
/// Every variant is fatal to the decode: callers get either the complete
/// cookie list or one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("bad magic {found:02x?}, expected \"cook\"")]
    BadMagic { found: [u8; 4] },

    #[error("truncated {section}")]
    Truncated { section: Section },

    #[error("failed reading {section}: {kind}")]
    Read { section: Section, kind: io::ErrorKind },

    #[error("bad marker {found:02x?} on page {page}, expected [00, 00, 01, 00]")]
    BadPageMarker { page: usize, found: [u8; 4] },

    #[error("{field} offset {offset} outside buffer of {len} bytes")]
    OffsetOutOfRange {
        field: Field,
        offset: i64,
        len: usize,
    },

    #[error("{field} string has no NUL terminator")]
    UnterminatedString { field: Field },

    #[error("{field} string is not valid UTF-8")]
    InvalidUtf8 { field: Field },

    #[error("{field} timestamp {value} cannot be represented")]
    InvalidTimestamp { field: Field, value: f64 },

    #[error("record {index} on page {page}: {cause}")]
    RecordDecodeFailed {
        page: usize,
        index: usize,
        cause: Box<FormatError>,
    },
}

impl FormatError {
    /// The innermost error, unwrapping any `RecordDecodeFailed` layers.
    pub fn root_cause(&self) -> &FormatError {
        match self {
            FormatError::RecordDecodeFailed { cause, .. } => cause.root_cause(),
            other => other,
        }
    }
}

/// SQLite storage class of a column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Null,
    Integer,
    Real,
    Text,
    Blob,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Null => "NULL",
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
            ColumnType::Blob => "BLOB",
        };
        f.write_str(name)
    }
}

impl From<rusqlite::types::Type> for ColumnType {
    fn from(ty: rusqlite::types::Type) -> Self {
        use rusqlite::types::Type;
        match ty {
            Type::Null => ColumnType::Null,
            Type::Integer => ColumnType::Integer,
            Type::Real => ColumnType::Real,
            Type::Text => ColumnType::Text,
            Type::Blob => ColumnType::Blob,
        }
    }
}

/// A database row did not have the shape a reader expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    #[error("{table}.{column} (column {index}): expected {expected}, got {found}")]
    TypeMismatch {
        table: &'static str,
        column: &'static str,
        index: usize,
        expected: ColumnType,
        found: ColumnType,
    },

    #[error("{table}.{column} is not valid UTF-8")]
    InvalidUtf8 {
        table: &'static str,
        column: &'static str,
    },
}

/// Crate-level error for cookie extraction.
#[derive(Debug, Error)]
pub enum CookieError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid binary cookies file: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Column(#[from] ColumnError),

    #[error("cookie database error: {message}")]
    Database { message: String },

    #[error("cookie database is locked")]
    DatabaseLocked,

    #[error("{column} timestamp {value} cannot be represented")]
    InvalidTimestamp { column: &'static str, value: i64 },

    #[error("cookie decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("cookie decryption is not available on {0}")]
    DecryptionUnavailable(String),

    #[error("unsupported browser: {0}")]
    UnsupportedBrowser(String),

    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),
}

impl CookieError {
    /// Create a database error from any displayable source.
    pub fn database(message: impl fmt::Display) -> Self {
        CookieError::Database {
            message: message.to_string(),
        }
    }

    /// Create a decryption failed error.
    pub fn decryption_failed(reason: impl Into<String>) -> Self {
        CookieError::DecryptionFailed(reason.into())
    }
}

impl From<rusqlite::Error> for CookieError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ffi::ErrorCode::DatabaseBusy
                    || e.code == rusqlite::ffi::ErrorCode::DatabaseLocked =>
            {
                CookieError::DatabaseLocked
            }
            _ => CookieError::database(err),
        }
    }
}
