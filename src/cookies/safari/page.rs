//! Page decoding.
//!
//! A page is a self-contained buffer whose length comes from the file's
//! page-size table. Unlike the file header, everything inside a page is
//! little-endian:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | marker `00 00 01 00` |
//! | 4 | 4 | record count |
//! | 8 | 4 × count | record offsets from the page start |

use super::bytes::{array_at, i32_le_at, u32_le_at};
use super::record::decode_record;
use crate::base::cookieerror::{Field, FormatError, Section};
use crate::cookies::cookie::Cookie;

/// Marker at the start of every page.
pub const PAGE_MARKER: [u8; 4] = [0x00, 0x00, 0x01, 0x00];

const PAGE_HEADER_LEN: usize = 8;

/// Decode every record of page `page` in offset-table order.
///
/// Any record failure aborts the whole page.
pub fn decode_page(page: usize, data: &[u8]) -> Result<Vec<Cookie>, FormatError> {
    let offsets = record_offsets(page, data)?;

    let mut cookies = Vec::with_capacity(offsets.len());
    for (index, &offset) in offsets.iter().enumerate() {
        let cookie = record_start(offset, data.len())
            .and_then(|start| decode_record(data, start))
            .map_err(|cause| FormatError::RecordDecodeFailed {
                page,
                index,
                cause: Box::new(cause),
            })?;
        cookies.push(cookie);
    }

    Ok(cookies)
}

/// Validate the page header and read its record-offset table.
fn record_offsets(page: usize, data: &[u8]) -> Result<Vec<i32>, FormatError> {
    let header_truncated = FormatError::Truncated {
        section: Section::PageHeader(page),
    };
    let marker: [u8; 4] = array_at(data, 0).ok_or_else(|| header_truncated.clone())?;
    if marker != PAGE_MARKER {
        return Err(FormatError::BadPageMarker {
            page,
            found: marker,
        });
    }
    let count = u32_le_at(data, 4).ok_or(header_truncated)? as usize;

    let table_truncated = FormatError::Truncated {
        section: Section::OffsetTable(page),
    };
    let table_end = count
        .checked_mul(4)
        .and_then(|len| len.checked_add(PAGE_HEADER_LEN))
        .ok_or_else(|| table_truncated.clone())?;
    if table_end > data.len() {
        return Err(table_truncated);
    }

    (0..count)
        .map(|i| i32_le_at(data, PAGE_HEADER_LEN + 4 * i).ok_or_else(|| table_truncated.clone()))
        .collect()
}

/// A record offset must point strictly inside the page.
fn record_start(offset: i32, len: usize) -> Result<usize, FormatError> {
    usize::try_from(offset)
        .ok()
        .filter(|&start| start < len)
        .ok_or(FormatError::OffsetOutOfRange {
            field: Field::Record,
            offset: offset as i64,
            len,
        })
}
