//! Error types for the cipher and its collaborators.

use aes::cipher::{InvalidLength, block_padding::UnpadError};
use std::str::Utf8Error;
use thiserror::Error;

/// A required string input that was empty or whitespace-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    Plaintext,
    Ciphertext,
    Password,
}

impl MissingInput {
    fn describe(self) -> &'static str {
        match self {
            MissingInput::Plaintext => "the string to encrypt is required",
            MissingInput::Ciphertext => "the string to decrypt is required",
            MissingInput::Password => "a password is required",
        }
    }
}

/// Low-level reason a ciphertext was rejected.
///
/// Only ever surfaced as the `source()` of [`CipherError::DecryptionFailed`].
#[derive(Error, Debug, Clone, Copy)]
pub enum CipherFailure {
    #[error("block or padding validation failed")]
    Padding(#[from] UnpadError),

    #[error("decrypted bytes are not valid UTF-8")]
    Utf8(#[from] Utf8Error),
}

/// Key material that cannot drive the cipher.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterialError {
    #[error("key and block sizes must be whole bytes (got {bits} bits)")]
    PartialByte { bits: usize },

    #[error("key material does not match the cipher's key and block size")]
    Length(#[from] InvalidLength),
}

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid argument: {}", .0.describe())]
    InvalidArgument(MissingInput),

    #[error("ciphertext is not valid Base64: {0}")]
    DecodingFailed(#[from] base64::DecodeError),

    /// Wrong password, corrupted or truncated data. The message is the same
    /// for every cause.
    #[error("decryption failed: invalid password or corrupted data")]
    DecryptionFailed {
        #[source]
        source: CipherFailure,
    },

    /// Only reachable through the low-level `crypto` API with custom sizes.
    #[error(transparent)]
    KeyMaterial(#[from] KeyMaterialError),
}

impl CipherError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CipherError::InvalidArgument(_))
    }

    pub fn is_decoding_failed(&self) -> bool {
        matches!(self, CipherError::DecodingFailed(_))
    }

    pub fn is_decryption_failed(&self) -> bool {
        matches!(self, CipherError::DecryptionFailed { .. })
    }
}

impl From<CipherFailure> for CipherError {
    fn from(source: CipherFailure) -> Self {
        CipherError::DecryptionFailed { source }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdfParamsError {
    #[error("iteration count must be >= 1")]
    IterationsTooLow,

    #[error("salt must be at least {min} bytes (got {len})")]
    SaltTooShort { len: usize, min: usize },
}

/// Failure sealing or unsealing a serialized payload.
#[derive(Error, Debug)]
pub enum SealError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error("payload serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
