//! Safari binary cookies parser (`Cookies.binarycookies`).
//!
//! Safari stores cookies in a proprietary binary format on macOS.
//! This module parses the format to extract cookies.
//!
//! ## File Format
//! The file consists of:
//! 1. Header: "cook" magic + page count + page sizes (big-endian)
//! 2. Pages: marker, record count, record offsets, records (little-endian)
//! 3. Footer: 8-byte checksum (read, not validated)
//!
//! Decoding runs strictly forward in three stages:
//! [`container`] → [`page`] → [`record`].
//!
//! ## References
//! - https://github.com/libyal/dtformats/blob/main/documentation/Safari%20Cookies.asciidoc
//! - https://github.com/als0052/BinaryCookieReader

mod bytes;
pub mod container;
pub mod page;
pub mod record;

pub use container::{decode_container, BinaryCookies, ContainerReader, CHECKSUM_LEN, MAGIC};
pub use page::{decode_page, PAGE_MARKER};
pub use record::{decode_record, RecordHeader, FLAG_HTTP_ONLY, FLAG_SECURE, RECORD_HEADER_LEN};

use crate::base::cookieerror::{CookieError, FormatError};
use crate::cookies::browser::{Browser, BrowserCookieReader};
use crate::cookies::cookie::Cookie;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a Safari binary cookies file held in memory.
///
/// # Arguments
/// * `data` - The raw bytes of the Cookies.binarycookies file
///
/// # Returns
/// * `Ok(cookies)` - Every cookie, in page then record order
/// * `Err(...)` - The first structural problem found
pub fn parse_binary_cookies(data: &[u8]) -> Result<Vec<Cookie>, FormatError> {
    read_binary_cookies(data)
}

/// Parse a Safari binary cookies file from any byte source.
pub fn read_binary_cookies<R: Read>(reader: R) -> Result<Vec<Cookie>, FormatError> {
    decode_container(reader).map(|decoded| decoded.cookies)
}

/// Reader for Safari's `Cookies.binarycookies`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafariCookieReader;

impl SafariCookieReader {
    pub fn new() -> Self {
        Self
    }
}

impl BrowserCookieReader for SafariCookieReader {
    fn browser(&self) -> Browser {
        Browser::Safari
    }

    fn read_all_cookies(&self, path: &Path) -> Result<Vec<Cookie>, CookieError> {
        let file = File::open(path)?;
        let cookies = read_binary_cookies(BufReader::new(file)).inspect_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "binary cookies decode failed");
        })?;
        tracing::debug!(path = %path.display(), count = cookies.len(), "read safari cookies");
        Ok(cookies)
    }
}
