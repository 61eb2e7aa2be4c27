//! Default install and cookie-store locations per operating system.
//!
//! Relative entries are relative to the user's home directory. Resolving
//! them (home lookup, Firefox profile discovery) is left to the caller.

use crate::base::cookieerror::CookieError;
use std::fmt;
use std::str::FromStr;

/// Operating systems with known default paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
}

impl OperatingSystem {
    /// The operating system this crate was compiled for, if it has paths.
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "darwin",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingSystem {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "darwin" | "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            _ => Err(CookieError::UnsupportedPlatform(s.to_string())),
        }
    }
}

/// Immutable operating-system → path table.
#[derive(Debug, Clone, Copy)]
pub struct DefaultPathMap {
    entries: &'static [(OperatingSystem, &'static str)],
}

impl DefaultPathMap {
    pub const fn new(entries: &'static [(OperatingSystem, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, os: OperatingSystem) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry_os, _)| *entry_os == os)
            .map(|(_, path)| *path)
    }

    /// Like [`get`](Self::get), failing with `UnsupportedPlatform`.
    pub fn lookup(&self, os: OperatingSystem) -> Result<&'static str, CookieError> {
        self.get(os)
            .ok_or_else(|| CookieError::UnsupportedPlatform(os.to_string()))
    }
}

pub const CHROME_COOKIES: DefaultPathMap = DefaultPathMap::new(&[
    (
        OperatingSystem::Windows,
        r"AppData\Local\Google\Chrome\User Data\Default\Network\Cookies",
    ),
    (
        OperatingSystem::MacOs,
        "Library/Application Support/Google/Chrome/Default/Cookies",
    ),
    (OperatingSystem::Linux, ".config/google-chrome/Default/Cookies"),
]);

pub const CHROME_INSTALL: DefaultPathMap = DefaultPathMap::new(&[
    (
        OperatingSystem::Windows,
        r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    ),
    (
        OperatingSystem::MacOs,
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    ),
    (OperatingSystem::Linux, "/usr/bin/google-chrome"),
]);

/// Firefox profile roots; `cookies.sqlite` lives in a `*.default*` profile below.
pub const FIREFOX_COOKIES: DefaultPathMap = DefaultPathMap::new(&[
    (
        OperatingSystem::Windows,
        r"AppData\Roaming\Mozilla\Firefox\Profiles\",
    ),
    (
        OperatingSystem::MacOs,
        "Library/Application Support/Firefox/Profiles/",
    ),
    (OperatingSystem::Linux, ".mozilla/firefox/"),
]);

pub const FIREFOX_INSTALL: DefaultPathMap = DefaultPathMap::new(&[
    (
        OperatingSystem::Windows,
        r"C:\Program Files\Mozilla Firefox\firefox.exe",
    ),
    (
        OperatingSystem::MacOs,
        "/Applications/Firefox.app/Contents/MacOS/firefox",
    ),
    (OperatingSystem::Linux, "/usr/bin/firefox"),
]);

pub const SAFARI_COOKIES: DefaultPathMap = DefaultPathMap::new(&[(
    OperatingSystem::MacOs,
    "Library/Cookies/Cookies.binarycookies",
)]);

pub const SAFARI_INSTALL: DefaultPathMap = DefaultPathMap::new(&[(
    OperatingSystem::MacOs,
    "/Applications/Safari.app/Contents/MacOS/Safari",
)]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operating_system() {
        assert_eq!(
            "darwin".parse::<OperatingSystem>().unwrap(),
            OperatingSystem::MacOs
        );
        assert_eq!(
            "MacOS".parse::<OperatingSystem>().unwrap(),
            OperatingSystem::MacOs
        );
        assert_eq!(
            "linux".parse::<OperatingSystem>().unwrap(),
            OperatingSystem::Linux
        );
        assert!(matches!(
            "plan9".parse::<OperatingSystem>(),
            Err(CookieError::UnsupportedPlatform(name)) if name == "plan9"
        ));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            FIREFOX_COOKIES.lookup(OperatingSystem::Linux).unwrap(),
            ".mozilla/firefox/"
        );
        assert_eq!(
            SAFARI_COOKIES.get(OperatingSystem::MacOs),
            Some("Library/Cookies/Cookies.binarycookies")
        );
        assert!(SAFARI_COOKIES.get(OperatingSystem::Windows).is_none());
        assert!(matches!(
            SAFARI_INSTALL.lookup(OperatingSystem::Linux),
            Err(CookieError::UnsupportedPlatform(name)) if name == "linux"
        ));
    }

    #[test]
    fn test_every_table_covers_macos() {
        for table in [
            CHROME_COOKIES,
            CHROME_INSTALL,
            FIREFOX_COOKIES,
            FIREFOX_INSTALL,
            SAFARI_COOKIES,
            SAFARI_INSTALL,
        ] {
            assert!(table.get(OperatingSystem::MacOs).is_some());
        }
    }

    #[test]
    fn test_current_matches_target() {
        #[cfg(target_os = "linux")]
        assert_eq!(OperatingSystem::current(), Some(OperatingSystem::Linux));
        #[cfg(target_os = "macos")]
        assert_eq!(OperatingSystem::current(), Some(OperatingSystem::MacOs));
        #[cfg(target_os = "windows")]
        assert_eq!(OperatingSystem::current(), Some(OperatingSystem::Windows));
    }
}
