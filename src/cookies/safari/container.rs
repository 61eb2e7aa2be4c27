//! Container-level reading: file header, page-size table, pages, trailer.
//!
//! Container fields are big-endian, the opposite of the page and record
//! bodies.

use super::page::decode_page;
use crate::base::context::ReadResultExt;
use crate::base::cookieerror::{FormatError, Section};
use crate::cookies::cookie::Cookie;
use std::io::Read;

/// Magic bytes at the start of a Safari binary cookies file.
pub const MAGIC: &[u8; 4] = b"cook";

/// Length of the trailer after the last page.
pub const CHECKSUM_LEN: usize = 8;

/// Sequential reader over the structures of a binary cookies file.
///
/// Pages are read by their declared size alone. A truncated file shows up
/// as `FormatError::Truncated` on whichever read runs out of bytes.
pub struct ContainerReader<R> {
    reader: R,
}

impl<R: Read> ContainerReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Validate the magic and return the declared page sizes.
    ///
    /// On a bad magic nothing past the first four bytes is read.
    pub fn read_header(&mut self) -> Result<Vec<u32>, FormatError> {
        let mut magic = [0u8; 4];
        self.reader.read_exact(&mut magic).section(Section::Header)?;
        if &magic != MAGIC {
            return Err(FormatError::BadMagic { found: magic });
        }

        let page_count = self.read_u32_be(Section::Header)?;

        // Not pre-allocated: a corrupt count must fail on the short read.
        let mut page_sizes = Vec::new();
        for _ in 0..page_count {
            page_sizes.push(self.read_u32_be(Section::PageSizeTable)?);
        }
        Ok(page_sizes)
    }

    /// Read exactly `size` bytes as the raw buffer of page `index`.
    pub fn read_page(&mut self, index: usize, size: u32) -> Result<Vec<u8>, FormatError> {
        let mut page = Vec::new();
        self.reader
            .by_ref()
            .take(u64::from(size))
            .read_to_end(&mut page)
            .section(Section::PageBody(index))?;
        if page.len() != size as usize {
            return Err(FormatError::Truncated {
                section: Section::PageBody(index),
            });
        }
        Ok(page)
    }

    /// Read the trailing checksum. Its contents are not validated.
    pub fn read_checksum(&mut self) -> Result<[u8; CHECKSUM_LEN], FormatError> {
        let mut checksum = [0u8; CHECKSUM_LEN];
        self.reader
            .read_exact(&mut checksum)
            .section(Section::Checksum)?;
        Ok(checksum)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_u32_be(&mut self, section: Section) -> Result<u32, FormatError> {
        let mut buf = [0u8; 4];
        self.reader.read_exact(&mut buf).section(section)?;
        Ok(u32::from_be_bytes(buf))
    }
}

/// A fully decoded binary cookies file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryCookies {
    /// Cookies in page order, then offset-table order within each page.
    pub cookies: Vec<Cookie>,
    /// Page sizes as declared by the page-size table.
    pub page_sizes: Vec<u32>,
    /// The raw trailer, exposed unvalidated.
    pub checksum: [u8; CHECKSUM_LEN],
}

/// Decode a complete binary cookies file from `reader`.
pub fn decode_container<R: Read>(reader: R) -> Result<BinaryCookies, FormatError> {
    let mut container = ContainerReader::new(reader);
    let page_sizes = container.read_header()?;
    tracing::debug!(pages = page_sizes.len(), "read binary cookies header");

    let mut cookies = Vec::new();
    for (index, &size) in page_sizes.iter().enumerate() {
        let page = container.read_page(index, size)?;
        let decoded = decode_page(index, &page)?;
        tracing::trace!(page = index, size, records = decoded.len(), "decoded page");
        cookies.extend(decoded);
    }

    let checksum = container.read_checksum()?;
    tracing::debug!(count = cookies.len(), "decoded binary cookies");

    Ok(BinaryCookies {
        cookies,
        page_sizes,
        checksum,
    })
}
