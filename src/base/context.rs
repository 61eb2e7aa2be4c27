//! Ergonomic error context helpers.
//!
//! Provides an extension trait for converting IO errors raised while
//! reading a binary cookies file into context-rich `FormatError` variants.

use crate::base::cookieerror::{FormatError, Section};
use std::io;

/// Extension trait for adding decode context to IO Results.
pub trait ReadResultExt<T> {
    /// Tag an IO error with the structure that was being read.
    ///
    /// A short read becomes `FormatError::Truncated`; anything else is
    /// reported as `FormatError::Read` with the original error kind.
    ///
    /// # Example
    /// ```ignore
    /// use browsercookies::base::context::ReadResultExt;
    ///
    /// reader.read_exact(&mut header).section(Section::Header)?;
    /// // Error: "truncated file header"
    /// ```
    fn section(self, section: Section) -> Result<T, FormatError>;
}

impl<T> ReadResultExt<T> for Result<T, io::Error> {
    fn section(self, section: Section) -> Result<T, FormatError> {
        self.map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => FormatError::Truncated { section },
            kind => FormatError::Read { section, kind },
        })
    }
}
