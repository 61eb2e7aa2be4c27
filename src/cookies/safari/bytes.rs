//! Bounds-checked reads from an in-memory page buffer.
//!
//! Offsets in the binary cookies format are plain integers into a flat
//! buffer; every read goes through `get` so a bad offset surfaces as `None`
//! or an error instead of a panic.

use crate::base::cookieerror::{Field, FormatError};

/// Copy `N` bytes starting at `pos`.
pub(crate) fn array_at<const N: usize>(data: &[u8], pos: usize) -> Option<[u8; N]> {
    let end = pos.checked_add(N)?;
    data.get(pos..end)?.try_into().ok()
}

/// Read a little-endian `u32` at `pos`.
pub(crate) fn u32_le_at(data: &[u8], pos: usize) -> Option<u32> {
    array_at(data, pos).map(u32::from_le_bytes)
}

/// Read a little-endian `i32` at `pos`.
pub(crate) fn i32_le_at(data: &[u8], pos: usize) -> Option<i32> {
    array_at(data, pos).map(i32::from_le_bytes)
}

/// Read a little-endian `f64` at `pos`.
pub(crate) fn f64_le_at(data: &[u8], pos: usize) -> Option<f64> {
    array_at(data, pos).map(f64::from_le_bytes)
}

/// Read the NUL-terminated string starting at `pos`, without the terminator.
///
/// The terminator must appear before the end of `data`.
pub(crate) fn cstr_at(data: &[u8], pos: usize, field: Field) -> Result<String, FormatError> {
    let tail = data.get(pos..).ok_or(FormatError::OffsetOutOfRange {
        field,
        offset: pos as i64,
        len: data.len(),
    })?;
    let end = tail
        .iter()
        .position(|&b| b == 0)
        .ok_or(FormatError::UnterminatedString { field })?;
    std::str::from_utf8(&tail[..end])
        .map(str::to_owned)
        .map_err(|_| FormatError::InvalidUtf8 { field })
}
