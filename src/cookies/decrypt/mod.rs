//! Platform-specific decryption of at-rest encrypted cookie values.
//!
//! Chrome may store a cookie's value in `encrypted_value` instead of
//! `value`. Readers hand those bytes to a [`ValueDecryptor`].
//!
//! ## Platform Support
//! - **Windows**: DPAPI via the `windows` crate
//! - **Other platforms**: no decryptor; encrypted values fail the read

#[cfg(target_os = "windows")]
pub mod windows;

use crate::base::cookieerror::CookieError;

/// Turns an encrypted cookie value into plaintext bytes.
pub trait ValueDecryptor: Send + Sync {
    fn decrypt(&self, encrypted: &[u8]) -> Result<Vec<u8>, CookieError>;
}

/// Decryptor for platforms without a supported key store.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDecryptor;

impl ValueDecryptor for UnavailableDecryptor {
    fn decrypt(&self, _encrypted: &[u8]) -> Result<Vec<u8>, CookieError> {
        Err(CookieError::DecryptionUnavailable(
            std::env::consts::OS.to_string(),
        ))
    }
}

/// The decryptor for the platform this crate was compiled for.
pub fn default_decryptor() -> Box<dyn ValueDecryptor> {
    #[cfg(target_os = "windows")]
    {
        Box::new(windows::DpapiDecryptor)
    }

    #[cfg(not(target_os = "windows"))]
    {
        Box::new(UnavailableDecryptor)
    }
}
