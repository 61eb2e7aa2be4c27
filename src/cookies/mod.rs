//! Browser cookie extraction.
//!
//! - **Safari**: proprietary `Cookies.binarycookies` container ([`safari`])
//! - **Chrome**: SQLite `Cookies` database ([`chromedb`])
//! - **Firefox**: SQLite `cookies.sqlite` database ([`firefox`])
//!
//! Every reader produces the same [`Cookie`](cookie::Cookie) and implements
//! [`BrowserCookieReader`](browser::BrowserCookieReader).
//!
//! # Reading a Safari cookie file
//!
//! ```rust,no_run
//! use browsercookies::cookies::browser::BrowserCookieReader;
//! use browsercookies::cookies::safari::SafariCookieReader;
//! use std::path::Path;
//!
//! let cookies = SafariCookieReader::new()
//!     .read_all_cookies(Path::new("Cookies.binarycookies"))?;
//! for cookie in &cookies {
//!     println!("{}={} ({})", cookie.name, cookie.value, cookie.domain);
//! }
//! # Ok::<(), browsercookies::base::cookieerror::CookieError>(())
//! ```
//!
//! # Supported Browsers
//!
//! | Browser | Store | Timestamps | Encrypted values |
//! |---------|-------|------------|------------------|
//! | Chrome | SQLite `cookies` | µs since 1601 | DPAPI (Windows) |
//! | Firefox | SQLite `moz_cookies` | Unix s / µs | - |
//! | Safari | binary pages | `f64` s since 2001 | - |

pub mod browser;
pub mod chromedb;
pub mod cookie;
pub mod decrypt;
pub mod export;
pub mod filter;
pub mod firefox;
pub mod paths;
pub mod safari;
pub mod sqlrow;
pub mod timeconv;
