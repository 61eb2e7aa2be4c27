//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): crate-level error
//! - [`FormatError`](cookieerror::FormatError): binary cookies decode failures
//! - [`ColumnError`](cookieerror::ColumnError): cookie database row shape failures

pub mod context;
pub mod cookieerror;
