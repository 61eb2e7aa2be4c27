//! Windows DPAPI decryption for Chrome cookies.
//!
//! Chrome on Windows protected `encrypted_value` directly with
//! `CryptProtectData`, so the stored bytes go straight through
//! `CryptUnprotectData` for the current user.

use super::ValueDecryptor;
use crate::base::cookieerror::CookieError;
use windows::Win32::Foundation::{LocalFree, HLOCAL};
use windows::Win32::Security::Cryptography::{
    CryptUnprotectData, CRYPTPROTECT_UI_FORBIDDEN, CRYPT_INTEGER_BLOB,
};

/// DPAPI-backed decryptor for the current Windows user.
#[derive(Debug, Clone, Copy, Default)]
pub struct DpapiDecryptor;

impl ValueDecryptor for DpapiDecryptor {
    fn decrypt(&self, encrypted: &[u8]) -> Result<Vec<u8>, CookieError> {
        let blob_in = CRYPT_INTEGER_BLOB {
            cbData: encrypted.len() as u32,
            pbData: encrypted.as_ptr() as *mut u8,
        };
        let mut blob_out = CRYPT_INTEGER_BLOB::default();

        // SAFETY: blob_in borrows `encrypted` for the duration of the call and
        // DPAPI does not write through it. blob_out is allocated by DPAPI and
        // released with LocalFree once copied.
        unsafe {
            CryptUnprotectData(
                &blob_in,
                None,
                None,
                None,
                None,
                CRYPTPROTECT_UI_FORBIDDEN,
                &mut blob_out,
            )
            .map_err(|e| CookieError::decryption_failed(format!("DPAPI: {}", e)))?;

            let plaintext =
                std::slice::from_raw_parts(blob_out.pbData, blob_out.cbData as usize).to_vec();
            let _ = LocalFree(HLOCAL(blob_out.pbData as *mut _));

            Ok(plaintext)
        }
    }
}
