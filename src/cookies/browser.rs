//! Browser selection and the common reader interface.
//!
//! ```rust,no_run
//! use browsercookies::cookies::browser::{reader_for, Browser};
//! use browsercookies::cookies::filter::CookieFilter;
//! use std::path::Path;
//!
//! let reader = reader_for("safari".parse::<Browser>()?);
//! let cookies = reader.read_cookies(
//!     Path::new("Cookies.binarycookies"),
//!     &CookieFilter::new().domain(".example.com"),
//! )?;
//! # Ok::<(), browsercookies::base::cookieerror::CookieError>(())
//! ```

use crate::base::cookieerror::CookieError;
use crate::cookies::chromedb::ChromeCookieReader;
use crate::cookies::cookie::Cookie;
use crate::cookies::filter::CookieFilter;
use crate::cookies::firefox::FirefoxCookieReader;
use crate::cookies::paths::{self, DefaultPathMap, OperatingSystem};
use crate::cookies::safari::SafariCookieReader;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported browsers for cookie extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
        }
    }

    /// Default cookie-store locations for this browser.
    pub fn cookie_paths(&self) -> DefaultPathMap {
        match self {
            Browser::Chrome => paths::CHROME_COOKIES,
            Browser::Firefox => paths::FIREFOX_COOKIES,
            Browser::Safari => paths::SAFARI_COOKIES,
        }
    }

    /// Default executable locations for this browser.
    pub fn install_paths(&self) -> DefaultPathMap {
        match self {
            Browser::Chrome => paths::CHROME_INSTALL,
            Browser::Firefox => paths::FIREFOX_INSTALL,
            Browser::Safari => paths::SAFARI_INSTALL,
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            "safari" => Ok(Browser::Safari),
            _ => Err(CookieError::UnsupportedBrowser(s.to_string())),
        }
    }
}

/// Read access to one browser's on-disk cookie store.
pub trait BrowserCookieReader {
    fn browser(&self) -> Browser;

    /// Read every cookie in the store at `path`.
    fn read_all_cookies(&self, path: &Path) -> Result<Vec<Cookie>, CookieError>;

    /// Read the cookies at `path` that pass `filter`.
    fn read_cookies(&self, path: &Path, filter: &CookieFilter) -> Result<Vec<Cookie>, CookieError> {
        self.read_all_cookies(path).map(|cookies| filter.apply(cookies))
    }

    fn default_install_path(&self, os: OperatingSystem) -> Result<&'static str, CookieError> {
        self.browser().install_paths().lookup(os)
    }

    fn default_cookie_file_path(&self, os: OperatingSystem) -> Result<&'static str, CookieError> {
        self.browser().cookie_paths().lookup(os)
    }
}

/// Construct the reader for `browser` with its default settings.
pub fn reader_for(browser: Browser) -> Box<dyn BrowserCookieReader> {
    match browser {
        Browser::Chrome => Box::new(ChromeCookieReader::new()),
        Browser::Firefox => Box::new(FirefoxCookieReader::new()),
        Browser::Safari => Box::new(SafariCookieReader::new()),
    }
}
