//! # browsercookies
//!
//! Read cookies out of the on-disk stores of local browsers.
//!
//! ## Features
//!
//! - **Safari**: byte-exact decoder for the `Cookies.binarycookies` page format
//! - **Chrome / Firefox**: typed readers over their SQLite cookie databases
//! - **Filtering**: by domain, name and expiry
//! - **Export**: JSON and `cookie::Cookie` conversion
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use browsercookies::cookies::safari::parse_binary_cookies;
//!
//! let data = std::fs::read("Cookies.binarycookies")?;
//! let cookies = parse_binary_cookies(&data)?;
//! println!("Found {} cookies", cookies.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types and error context helpers
//! - [`cookies`] - Cookie model, browser readers and the binary decoder

pub mod base;
pub mod cookies;

pub use base::cookieerror::{CookieError, FormatError};
pub use cookies::browser::{reader_for, Browser, BrowserCookieReader};
pub use cookies::cookie::{find_cookie, Cookie};
pub use cookies::filter::CookieFilter;
