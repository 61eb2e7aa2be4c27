//! Cookie filtering by domain, name and expiry.

use crate::cookies::cookie::Cookie;
use time::OffsetDateTime;

/// Predicate applied to decoded cookies.
///
/// Unset criteria match everything.
///
/// ```
/// use browsercookies::cookies::filter::CookieFilter;
///
/// let filter = CookieFilter::new().domain("example.com").name("sid");
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieFilter {
    domain: Option<String>,
    name: Option<String>,
    expires_after: Option<OffsetDateTime>,
}

impl CookieFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only cookies whose domain equals `domain`.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Keep only cookies whose name equals `name`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Drop cookies that expire before `threshold`.
    ///
    /// Cookies without a recorded expiry are kept.
    pub fn expires_after(mut self, threshold: OffsetDateTime) -> Self {
        self.expires_after = Some(threshold);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_none() && self.name.is_none() && self.expires_after.is_none()
    }

    pub fn matches(&self, cookie: &Cookie) -> bool {
        if let Some(domain) = &self.domain {
            if cookie.domain != *domain {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if cookie.name != *name {
                return false;
            }
        }
        if let (Some(threshold), Some(expires)) = (self.expires_after, cookie.expires) {
            if expires < threshold {
                return false;
            }
        }
        true
    }

    /// Filter `cookies`, preserving order.
    pub fn apply(&self, cookies: Vec<Cookie>) -> Vec<Cookie> {
        if self.is_empty() {
            return cookies;
        }
        let before = cookies.len();
        let kept: Vec<Cookie> = cookies.into_iter().filter(|c| self.matches(c)).collect();
        tracing::debug!(before, after = kept.len(), "filtered cookies");
        kept
    }
}
