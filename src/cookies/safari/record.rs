//! Cookie record decoding.
//!
//! ## Record Layout (little-endian)
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | record size (informational) |
//! | 4 | 4 | unknown |
//! | 8 | 4 | flags |
//! | 12 | 4 | unknown |
//! | 16 | 4 | URL/domain offset |
//! | 20 | 4 | name offset |
//! | 24 | 4 | path offset |
//! | 28 | 4 | value offset |
//! | 32 | 8 | trailer |
//! | 40 | 8 | expiration (`f64`, Mac absolute time) |
//! | 48 | 8 | creation (`f64`, Mac absolute time) |
//!
//! String offsets are relative to the record start. Each string ends with a
//! single NUL byte.

use super::bytes::{array_at, cstr_at, f64_le_at, i32_le_at, u32_le_at};
use crate::base::cookieerror::{Field, FormatError, Section};
use crate::cookies::cookie::Cookie;
use crate::cookies::timeconv::mac_absolute_time;

/// Size of the fixed header at the start of every record.
pub const RECORD_HEADER_LEN: usize = 56;

/// Flag bit set on `Secure` cookies.
pub const FLAG_SECURE: u32 = 0x1;

/// Flag bit set on `HttpOnly` cookies.
pub const FLAG_HTTP_ONLY: u32 = 0x4;

/// Fixed-size header of a cookie record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordHeader {
    pub size: u32,
    pub unknown1: u32,
    pub flags: u32,
    pub unknown2: u32,
    pub url_offset: i32,
    pub name_offset: i32,
    pub path_offset: i32,
    pub value_offset: i32,
    pub trailer: [u8; 8],
    pub expiration: f64,
    pub creation: f64,
}

impl RecordHeader {
    /// Parse the header from the first `RECORD_HEADER_LEN` bytes of `data`.
    ///
    /// Returns `None` if `data` is shorter than a header.
    pub fn parse(data: &[u8]) -> Option<Self> {
        Some(Self {
            size: u32_le_at(data, 0)?,
            unknown1: u32_le_at(data, 4)?,
            flags: u32_le_at(data, 8)?,
            unknown2: u32_le_at(data, 12)?,
            url_offset: i32_le_at(data, 16)?,
            name_offset: i32_le_at(data, 20)?,
            path_offset: i32_le_at(data, 24)?,
            value_offset: i32_le_at(data, 28)?,
            trailer: array_at(data, 32)?,
            expiration: f64_le_at(data, 40)?,
            creation: f64_le_at(data, 48)?,
        })
    }

    pub fn secure(&self) -> bool {
        self.flags & FLAG_SECURE != 0
    }

    pub fn http_only(&self) -> bool {
        self.flags & FLAG_HTTP_ONLY != 0
    }
}

/// Decode the record starting at `start` within `page`.
///
/// The record's own size field is not used to bound reads; string offsets
/// are checked against the page buffer instead.
pub fn decode_record(page: &[u8], start: usize) -> Result<Cookie, FormatError> {
    let header = page
        .get(start..)
        .and_then(RecordHeader::parse)
        .ok_or(FormatError::Truncated {
            section: Section::RecordHeader,
        })?;

    let domain = record_string(page, start, header.url_offset, Field::Domain)?;
    let name = record_string(page, start, header.name_offset, Field::Name)?;
    let path = record_string(page, start, header.path_offset, Field::Path)?;
    let value = record_string(page, start, header.value_offset, Field::Value)?;

    let expires = mac_absolute_time(header.expiration, Field::Expiration)?;
    let creation = mac_absolute_time(header.creation, Field::Creation)?;

    tracing::trace!(
        start,
        size = header.size,
        flags = header.flags,
        domain = %domain,
        name = %name,
        "decoded cookie record"
    );

    Ok(Cookie {
        domain,
        name,
        path,
        value,
        expires: Some(expires),
        creation,
        secure: header.secure(),
        http_only: header.http_only(),
    })
}

/// Resolve a string field at `start + offset`.
fn record_string(
    page: &[u8],
    start: usize,
    offset: i32,
    field: Field,
) -> Result<String, FormatError> {
    let pos = start as i64 + offset as i64;
    if pos < 0 || pos as u64 >= page.len() as u64 {
        return Err(FormatError::OffsetOutOfRange {
            field,
            offset: offset as i64,
            len: page.len(),
        });
    }
    cstr_at(page, pos as usize, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::timeconv::MAC_EPOCH_OFFSET_SECS;

    /// Lay out a record: header followed by the four strings in order.
    fn record(flags: u32, strings: [&str; 4], expiration: f64, creation: f64) -> Vec<u8> {
        let mut body = Vec::new();
        let mut offsets = [0i32; 4];
        for (i, s) in strings.iter().enumerate() {
            offsets[i] = (RECORD_HEADER_LEN + body.len()) as i32;
            body.extend_from_slice(s.as_bytes());
            body.push(0);
        }

        let mut data = Vec::new();
        data.extend_from_slice(&((RECORD_HEADER_LEN + body.len()) as u32).to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&flags.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        for offset in offsets {
            data.extend_from_slice(&offset.to_le_bytes());
        }
        data.extend_from_slice(&[0u8; 8]);
        data.extend_from_slice(&expiration.to_le_bytes());
        data.extend_from_slice(&creation.to_le_bytes());
        assert_eq!(data.len(), RECORD_HEADER_LEN);
        data.extend_from_slice(&body);
        data
    }

    fn patch_i32(data: &mut [u8], at: usize, value: i32) {
        data[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn test_decode_strings_and_flags() {
        let data = record(0x5, ["example.com", "sid", "/", "abc123"], 0.0, 0.0);
        let cookie = decode_record(&data, 0).unwrap();
        assert_eq!(cookie.domain, "example.com");
        assert_eq!(cookie.name, "sid");
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.value, "abc123");
        assert!(cookie.secure);
        assert!(cookie.http_only);
    }

    #[test]
    fn test_flags_zero() {
        let data = record(0x0, ["a", "b", "c", "d"], 0.0, 0.0);
        let cookie = decode_record(&data, 0).unwrap();
        assert!(!cookie.secure);
        assert!(!cookie.http_only);
    }

    #[test]
    fn test_http_only_alone() {
        let data = record(FLAG_HTTP_ONLY, ["a", "b", "c", "d"], 0.0, 0.0);
        let cookie = decode_record(&data, 0).unwrap();
        assert!(!cookie.secure);
        assert!(cookie.http_only);
    }

    #[test]
    fn test_zero_expiration_is_not_special() {
        let data = record(0, ["a", "b", "c", "d"], 0.0, 10.0);
        let cookie = decode_record(&data, 0).unwrap();
        assert_eq!(
            cookie.expires.map(|t| t.unix_timestamp()),
            Some(MAC_EPOCH_OFFSET_SECS)
        );
        assert_eq!(cookie.creation.unix_timestamp(), MAC_EPOCH_OFFSET_SECS + 10);
    }

    #[test]
    fn test_record_not_at_page_start() {
        let mut page = vec![0xAA; 12];
        page.extend(record(1, ["host", "n", "/p", "v"], 0.0, 0.0));
        let cookie = decode_record(&page, 12).unwrap();
        assert_eq!(cookie.domain, "host");
        assert_eq!(cookie.path, "/p");
    }

    #[test]
    fn test_empty_strings() {
        let data = record(0, ["", "", "", ""], 0.0, 0.0);
        let cookie = decode_record(&data, 0).unwrap();
        assert!(cookie.domain.is_empty());
        assert!(cookie.value.is_empty());
    }

    #[test]
    fn test_short_header() {
        let data = record(0, ["a", "b", "c", "d"], 0.0, 0.0);
        let err = decode_record(&data[..RECORD_HEADER_LEN - 1], 0).unwrap_err();
        assert_eq!(
            err,
            FormatError::Truncated {
                section: Section::RecordHeader
            }
        );
    }

    #[test]
    fn test_offset_past_buffer() {
        let mut data = record(0, ["a", "b", "c", "d"], 0.0, 0.0);
        let len = data.len();
        patch_i32(&mut data, 20, len as i32);
        let err = decode_record(&data, 0).unwrap_err();
        assert_eq!(
            err,
            FormatError::OffsetOutOfRange {
                field: Field::Name,
                offset: len as i64,
                len,
            }
        );
    }

    #[test]
    fn test_negative_offset() {
        let mut data = record(0, ["a", "b", "c", "d"], 0.0, 0.0);
        patch_i32(&mut data, 28, -1);
        let err = decode_record(&data, 0).unwrap_err();
        assert!(matches!(
            err,
            FormatError::OffsetOutOfRange {
                field: Field::Value,
                offset: -1,
                ..
            }
        ));
    }

    #[test]
    fn test_unterminated_value() {
        let mut data = record(0, ["a", "b", "c", "d"], 0.0, 0.0);
        data.pop();
        let err = decode_record(&data, 0).unwrap_err();
        assert_eq!(
            err,
            FormatError::UnterminatedString {
                field: Field::Value
            }
        );
    }

    #[test]
    fn test_nan_timestamp() {
        let data = record(0, ["a", "b", "c", "d"], f64::NAN, 0.0);
        let err = decode_record(&data, 0).unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidTimestamp {
                field: Field::Expiration,
                ..
            }
        ));
    }

    #[test]
    fn test_header_parse_keeps_unknowns() {
        let mut data = record(0x1, ["a", "b", "c", "d"], 1.0, 2.0);
        data[4..8].copy_from_slice(&7u32.to_le_bytes());
        data[32..40].copy_from_slice(b"\x00\x00\x00\x00\x00\x00\x00\x01");
        let header = RecordHeader::parse(&data).unwrap();
        assert_eq!(header.unknown1, 7);
        assert_eq!(header.trailer[7], 1);
        assert_eq!(header.size as usize, data.len());
        assert_eq!(header.url_offset, RECORD_HEADER_LEN as i32);
        assert_eq!(header.expiration, 1.0);
        assert_eq!(header.creation, 2.0);
    }
}
