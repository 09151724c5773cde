//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;

/// Length of symmetric signing secrets in bytes
pub const SECRET_LEN: usize = 32;

/// Secret decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("Secret is not valid base64")]
    InvalidBase64,

    #[error("Secret must be exactly {expected} bytes (got {actual})")]
    WrongLength { expected: usize, actual: usize },
}

/// Generate a random 32-byte signing secret
pub fn random_secret() -> [u8; SECRET_LEN] {
    let mut secret = [0u8; SECRET_LEN];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Decode a base64 (standard alphabet) signing secret of exactly 32 bytes
pub fn secret_from_base64(encoded: &str) -> Result<[u8; SECRET_LEN], SecretError> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| SecretError::InvalidBase64)?;

    <[u8; SECRET_LEN]>::try_from(bytes.as_slice()).map_err(|_| SecretError::WrongLength {
        expected: SECRET_LEN,
        actual: bytes.len(),
    })
}
