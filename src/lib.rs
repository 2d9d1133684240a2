//! Password-based string encryption.
//!
//! A key and IV are derived from the password with PBKDF2-HMAC-SHA1 over a
//! fixed application salt, the UTF-8 bytes are encrypted with AES-256-CBC and
//! PKCS7 padding, and the result is carried as Base64 text.
//!
//! The IV comes from the password, so the same plaintext and password always
//! give the same ciphertext. Callers that need repeated plaintexts to be
//! indistinguishable have to add a random per-message IV on top.

pub mod crypto;
pub mod error;
pub mod sealed;

pub use crate::crypto::{KdfParams, derive_key_and_iv};
pub use crate::error::{
    CipherError, CipherFailure, KdfParamsError, KeyMaterialError, MissingInput, SealError,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use crypto::{BLOCK_SIZE_BITS, KEY_SIZE_BITS};
use log::debug;

pub type Result<T> = std::result::Result<T, CipherError>;

/// Encrypt `plaintext` with `password` using the default [`KdfParams`].
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    encrypt_with(plaintext, password, &KdfParams::default())
}

/// Decrypt Base64 `ciphertext` with `password` using the default [`KdfParams`].
pub fn decrypt(ciphertext: &str, password: &str) -> Result<String> {
    decrypt_with(ciphertext, password, &KdfParams::default())
}

/// Encrypt `plaintext` and return the Base64 ciphertext.
///
/// # Errors
///
/// Returns [`CipherError::InvalidArgument`] if `plaintext` or `password` is
/// empty or whitespace-only. No key derivation happens in that case.
pub fn encrypt_with(plaintext: &str, password: &str, kdf: &KdfParams) -> Result<String> {
    require(plaintext, MissingInput::Plaintext)?;
    require(password, MissingInput::Password)?;

    let material = derive_key_and_iv(password, KEY_SIZE_BITS, BLOCK_SIZE_BITS, kdf)?;
    let ciphertext = crypto::encrypt(&material, plaintext.as_bytes())?;
    drop(material);

    debug!(
        "encrypted {} bytes into {} bytes",
        plaintext.len(),
        ciphertext.len()
    );
    Ok(STANDARD.encode(ciphertext))
}

/// Decrypt a Base64 ciphertext produced by [`encrypt_with`] with the same
/// password and parameters.
///
/// # Errors
///
/// - [`CipherError::InvalidArgument`] if `ciphertext` or `password` is empty
///   or whitespace-only.
/// - [`CipherError::DecodingFailed`] if `ciphertext` is not Base64.
/// - [`CipherError::DecryptionFailed`] if the cipher rejects the data or the
///   result is not UTF-8. A wrong password and corrupted data are not told
///   apart.
pub fn decrypt_with(ciphertext: &str, password: &str, kdf: &KdfParams) -> Result<String> {
    require(ciphertext, MissingInput::Ciphertext)?;
    require(password, MissingInput::Password)?;

    let raw = STANDARD.decode(ciphertext)?;

    let material = derive_key_and_iv(password, KEY_SIZE_BITS, BLOCK_SIZE_BITS, kdf)?;
    let plaintext = crypto::decrypt(&material, &raw)?;
    drop(material);

    let plaintext = std::str::from_utf8(&plaintext)
        .map_err(CipherFailure::from)?
        .to_owned();
    debug!(
        "decrypted {} bytes into {} bytes",
        raw.len(),
        plaintext.len()
    );
    Ok(plaintext)
}

fn require(value: &str, missing: MissingInput) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CipherError::InvalidArgument(missing));
    }
    Ok(())
}
