//! Chrome cookie database reader.
//!
//! Chrome keeps cookies in an SQLite database with a `cookies` table.
//! Timestamps are microseconds since 1601-01-01 00:00:00 UTC.
//!
//! ## Reference Files
//! - `net/extras/sqlite/sqlite_persistent_cookie_store.cc`
//! - `base/time/time.h`

use crate::base::cookieerror::CookieError;
use crate::cookies::browser::{Browser, BrowserCookieReader};
use crate::cookies::cookie::Cookie;
use crate::cookies::decrypt::{default_decryptor, ValueDecryptor};
use crate::cookies::sqlrow::{open_read_only, RowReader};
use crate::cookies::timeconv::chrome_time;
use std::path::Path;

/// Name of Chrome's cookie table.
pub const COOKIES_TABLE: &str = "cookies";

/// Columns read from the cookie table, in `SELECT` order.
pub const COOKIE_COLUMNS: &[&str] = &[
    "host_key",
    "name",
    "value",
    "path",
    "expires_utc",
    "is_secure",
    "is_httponly",
    "creation_utc",
    "encrypted_value",
];

/// Reader for Chrome's `Cookies` database.
pub struct ChromeCookieReader {
    decryptor: Box<dyn ValueDecryptor>,
}

impl Default for ChromeCookieReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeCookieReader {
    /// Create a reader using the platform's default decryptor.
    pub fn new() -> Self {
        Self {
            decryptor: default_decryptor(),
        }
    }

    /// Use `decryptor` for values stored in `encrypted_value`.
    pub fn with_decryptor(mut self, decryptor: impl ValueDecryptor + 'static) -> Self {
        self.decryptor = Box::new(decryptor);
        self
    }

    fn map_row(&self, row: &RowReader<'_, '_>) -> Result<Cookie, CookieError> {
        let domain = row.text(0, "host_key")?;
        let name = row.text(1, "name")?;
        let value = row.text(2, "value")?;
        let path = row.text(3, "path")?;
        let expires_utc = row.integer(4, "expires_utc")?;
        let is_secure = row.integer(5, "is_secure")?;
        let is_httponly = row.integer(6, "is_httponly")?;
        let creation_utc = row.integer(7, "creation_utc")?;
        let encrypted_value = row.bytes(8, "encrypted_value")?;

        // Zero means a session cookie
        let expires = match expires_utc {
            0 => None,
            micros => Some(chrome_time(micros, "expires_utc")?),
        };
        let creation = chrome_time(creation_utc, "creation_utc")?;

        let value = if encrypted_value.is_empty() {
            value
        } else {
            let plaintext = self.decryptor.decrypt(&encrypted_value).inspect_err(|e| {
                tracing::warn!(domain = %domain, name = %name, error = %e, "cookie decryption failed");
            })?;
            String::from_utf8(plaintext).map_err(|_| {
                CookieError::decryption_failed(format!(
                    "decrypted value of cookie {} on {} is not valid UTF-8",
                    name, domain
                ))
            })?
        };

        Ok(Cookie {
            domain,
            name,
            path,
            value,
            expires,
            creation,
            secure: is_secure == 1,
            http_only: is_httponly == 1,
        })
    }
}

impl BrowserCookieReader for ChromeCookieReader {
    fn browser(&self) -> Browser {
        Browser::Chrome
    }

    fn read_all_cookies(&self, path: &Path) -> Result<Vec<Cookie>, CookieError> {
        let conn = open_read_only(path)?;
        let sql = format!("SELECT {} FROM {}", COOKIE_COLUMNS.join(", "), COOKIES_TABLE);
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut cookies = Vec::new();
        while let Some(row) = rows.next()? {
            cookies.push(self.map_row(&RowReader::new(COOKIES_TABLE, row))?);
        }

        tracing::debug!(path = %path.display(), count = cookies.len(), "read chrome cookies");
        Ok(cookies)
    }
}
