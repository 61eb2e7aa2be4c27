//! Cookie export - write decoded cookies to disk as JSON.

use crate::base::cookieerror::CookieError;
use crate::cookies::cookie::Cookie;
use std::fs;
use std::io;
use std::path::Path;

/// Serialize cookies as pretty-printed JSON.
pub fn to_json(cookies: &[Cookie]) -> Result<String, CookieError> {
    serde_json::to_string_pretty(cookies)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Save cookies to a JSON file.
///
/// # Example
/// ```ignore
/// export::save_cookies(&cookies, Path::new("/path/to/cookies.json"))?;
/// ```
pub fn save_cookies(cookies: &[Cookie], path: &Path) -> Result<(), CookieError> {
    let json = to_json(cookies)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), count = cookies.len(), "saved cookies");
    Ok(())
}

/// Load cookies previously written by [`save_cookies`].
pub fn load_cookies(path: &Path) -> Result<Vec<Cookie>, CookieError> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        let cookies = vec![Cookie {
            domain: ".example.com".to_string(),
            name: "sid".to_string(),
            path: "/".to_string(),
            value: "abc".to_string(),
            expires: None,
            creation: OffsetDateTime::from_unix_timestamp(978_307_200).unwrap(),
            secure: true,
            http_only: true,
        }];

        save_cookies(&cookies, &path).unwrap();
        assert_eq!(load_cookies(&path).unwrap(), cookies);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        fs::write(&path, "not json").unwrap();
        let err = load_cookies(&path).unwrap_err();
        assert!(matches!(err, CookieError::Io(e) if e.kind() == io::ErrorKind::InvalidData));
    }
}
