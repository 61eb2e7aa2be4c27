use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A cookie read from a browser's cookie store.
///
/// Produced identically by the Chrome, Firefox and Safari readers and never
/// mutated by them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub domain: String,
    pub name: String,
    pub path: String,
    pub value: String,
    /// `None` only when the store records no expiry (Chrome session cookies).
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub creation: OffsetDateTime,
    pub secure: bool,
    pub http_only: bool,
}

impl Cookie {
    /// Convert to a `cookie::Cookie` suitable for an HTTP client jar.
    pub fn to_http_cookie(&self) -> cookie::Cookie<'static> {
        let mut builder = cookie::Cookie::build((self.name.clone(), self.value.clone()))
            .domain(self.domain.clone())
            .path(self.path.clone())
            .secure(self.secure)
            .http_only(self.http_only);
        if let Some(expires) = self.expires {
            builder = builder.expires(expires);
        }
        builder.build()
    }

    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        match self.expires {
            Some(expiry) => expiry < current_time,
            None => false,
        }
    }
}

/// Return the first cookie whose domain and name both match exactly.
pub fn find_cookie<'a>(domain: &str, name: &str, cookies: &'a [Cookie]) -> Option<&'a Cookie> {
    cookies
        .iter()
        .find(|cookie| cookie.domain == domain && cookie.name == name)
}
