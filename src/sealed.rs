//! Encrypted JSON payloads.
//!
//! The in-memory half of encrypted persistence: a value is serialized with
//! `serde_json` and the text encrypted, or the text decrypted and
//! deserialized. Cipher errors pass through untouched, so a caller can still
//! tell a wrong password apart from a malformed payload.

use serde::{Serialize, de::DeserializeOwned};
use zeroize::Zeroizing;

use crate::{KdfParams, decrypt_with, encrypt_with, error::SealError};

/// Serialize `value` to JSON and encrypt it with the default [`KdfParams`].
pub fn seal<T: Serialize + ?Sized>(value: &T, password: &str) -> Result<String, SealError> {
    seal_with(value, password, &KdfParams::default())
}

/// Decrypt `sealed` with the default [`KdfParams`] and deserialize the JSON inside.
pub fn unseal<T: DeserializeOwned>(sealed: &str, password: &str) -> Result<T, SealError> {
    unseal_with(sealed, password, &KdfParams::default())
}

pub fn seal_with<T: Serialize + ?Sized>(
    value: &T,
    password: &str,
    kdf: &KdfParams,
) -> Result<String, SealError> {
    let json = Zeroizing::new(serde_json::to_string(value)?);
    Ok(encrypt_with(&json, password, kdf)?)
}

/// # Errors
///
/// [`SealError::Cipher`] carries every decryption error as is, including
/// `DecryptionFailed`; [`SealError::Json`] means the plaintext decrypted but
/// is not a valid `T`.
pub fn unseal_with<T: DeserializeOwned>(
    sealed: &str,
    password: &str,
    kdf: &KdfParams,
) -> Result<T, SealError> {
    let json = Zeroizing::new(decrypt_with(sealed, password, kdf)?);
    Ok(serde_json::from_str(&json)?)
}
