//! Random password generation.

use crate::constants;
use crate::core::error::CredentialError;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::error;
use zeroize::Zeroizing;

/// Generate `PASSWORD_LENGTH` bytes from the OS random source, encoded as
/// padded URL-safe base64.
pub fn generate_random_password() -> Result<String, CredentialError> {
    let mut bytes = Zeroizing::new(vec![0u8; constants::PASSWORD_LENGTH]);
    OsRng.try_fill_bytes(bytes.as_mut_slice()).map_err(|e| {
        error!("secure random source failed: {}", e);
        CredentialError::RandomSource(e)
    })?;
    Ok(URL_SAFE.encode(bytes.as_slice()))
}
