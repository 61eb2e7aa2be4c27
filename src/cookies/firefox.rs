//! Firefox cookie database reader (`cookies.sqlite`, table `moz_cookies`).

use crate::base::cookieerror::CookieError;
use crate::cookies::browser::{Browser, BrowserCookieReader};
use crate::cookies::cookie::Cookie;
use crate::cookies::sqlrow::{open_read_only, RowReader};
use crate::cookies::timeconv::{unix_micros_whole_seconds, unix_seconds};
use std::path::Path;

pub const MOZ_COOKIES_TABLE: &str = "moz_cookies";

const SELECT_COOKIES: &str = "SELECT host, name, value, path, expiry, creationTime, isSecure, isHttpOnly \
     FROM moz_cookies";

/// Reader for Firefox's `cookies.sqlite`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirefoxCookieReader;

impl FirefoxCookieReader {
    pub fn new() -> Self {
        Self
    }
}

fn map_row(row: &RowReader<'_, '_>) -> Result<Cookie, CookieError> {
    let domain = row.text(0, "host")?;
    let name = row.text(1, "name")?;
    let value = row.text(2, "value")?;
    let path = row.text(3, "path")?;
    let expiry = row.integer(4, "expiry")?;
    let creation_time = row.integer(5, "creationTime")?;
    let is_secure = row.integer(6, "isSecure")?;
    let is_http_only = row.integer(7, "isHttpOnly")?;

    Ok(Cookie {
        domain,
        name,
        path,
        value,
        expires: Some(unix_seconds(expiry, "expiry")?),
        creation: unix_micros_whole_seconds(creation_time, "creationTime")?,
        secure: is_secure > 0,
        http_only: is_http_only > 0,
    })
}

impl BrowserCookieReader for FirefoxCookieReader {
    fn browser(&self) -> Browser {
        Browser::Firefox
    }

    fn read_all_cookies(&self, path: &Path) -> Result<Vec<Cookie>, CookieError> {
        let conn = open_read_only(path)?;
        let mut stmt = conn.prepare(SELECT_COOKIES)?;
        let mut rows = stmt.query([])?;

        let mut cookies = Vec::new();
        while let Some(row) = rows.next()? {
            cookies.push(map_row(&RowReader::new(MOZ_COOKIES_TABLE, row))?);
        }

        tracing::debug!(path = %path.display(), count = cookies.len(), "read firefox cookies");
        Ok(cookies)
    }
}
