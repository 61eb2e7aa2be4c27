//! Epoch conversions for the timestamps stored by each browser.
//!
//! | Browser | Storage | Epoch |
//! |---------|---------|-------|
//! | Safari | `f64` seconds | 2001-01-01 00:00:00 UTC (Mac absolute time) |
//! | Chrome | `i64` microseconds | 1601-01-01 00:00:00 UTC (Windows FILETIME epoch) |
//! | Firefox | `i64` seconds / microseconds | 1970-01-01 00:00:00 UTC |

use crate::base::cookieerror::{CookieError, Field, FormatError};
use time::OffsetDateTime;

/// Seconds from the Unix epoch to 2001-01-01 00:00:00 UTC.
pub const MAC_EPOCH_OFFSET_SECS: i64 = 978_307_200;

/// Microseconds from 1601-01-01 00:00:00 UTC to the Unix epoch.
///
/// Reference: `base/time/time.h`
pub const CHROME_EPOCH_OFFSET_MICROS: i64 = 11_644_473_600_000_000;

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Convert Mac absolute time to `OffsetDateTime`.
///
/// The integer part counts whole seconds from 2001-01-01, the fractional
/// part becomes sub-second nanoseconds. Zero is a valid instant and is not
/// treated as "no timestamp".
pub fn mac_absolute_time(value: f64, field: Field) -> Result<OffsetDateTime, FormatError> {
    let invalid = || FormatError::InvalidTimestamp { field, value };
    if !value.is_finite() {
        return Err(invalid());
    }

    let seconds = value.trunc();
    let frac_nanos = ((value - seconds) * 1e9) as i128;

    let nanos = (seconds as i128)
        .checked_add(MAC_EPOCH_OFFSET_SECS as i128)
        .and_then(|s| s.checked_mul(NANOS_PER_SEC))
        .and_then(|n| n.checked_add(frac_nanos))
        .ok_or_else(invalid)?;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| invalid())
}

/// Convert a Chrome timestamp (microseconds since 1601) to `OffsetDateTime`.
///
/// Values not past the 1601→1970 offset are taken as Unix microseconds,
/// which is how older databases stored them.
pub fn chrome_time(micros: i64, column: &'static str) -> Result<OffsetDateTime, CookieError> {
    let unix_micros = if micros > CHROME_EPOCH_OFFSET_MICROS {
        micros - CHROME_EPOCH_OFFSET_MICROS
    } else {
        micros
    };
    OffsetDateTime::from_unix_timestamp_nanos(unix_micros as i128 * 1000).map_err(|_| {
        CookieError::InvalidTimestamp {
            column,
            value: micros,
        }
    })
}

/// Convert Unix seconds to `OffsetDateTime`.
pub fn unix_seconds(secs: i64, column: &'static str) -> Result<OffsetDateTime, CookieError> {
    OffsetDateTime::from_unix_timestamp(secs)
        .map_err(|_| CookieError::InvalidTimestamp { column, value: secs })
}

/// Convert Unix microseconds to `OffsetDateTime`, dropping the sub-second part.
pub fn unix_micros_whole_seconds(
    micros: i64,
    column: &'static str,
) -> Result<OffsetDateTime, CookieError> {
    OffsetDateTime::from_unix_timestamp(micros / 1_000_000).map_err(|_| {
        CookieError::InvalidTimestamp {
            column,
            value: micros,
        }
    })
}
