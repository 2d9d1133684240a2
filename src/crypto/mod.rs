//! Cryptographic primitives for password-based string encryption.
//!
//! Provides PBKDF2 key/IV derivation and the AES-256-CBC block transform.

pub mod aes_cbc;
pub mod kdf;

pub use aes_cbc::{decrypt, encrypt};
pub use kdf::{KdfParams, KeyMaterial, derive_key_and_iv};

/// Length of the AES-256 key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the IV, equal to the AES block size (16 bytes / 128 bits).
pub const IV_LEN: usize = 16;
/// Key size handed to the derivation, in bits.
pub const KEY_SIZE_BITS: usize = KEY_LEN * 8;
/// Block size handed to the derivation, in bits.
pub const BLOCK_SIZE_BITS: usize = IV_LEN * 8;
/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 1000;
/// Default application salt. Changing it makes every existing ciphertext unreadable.
pub const DEFAULT_SALT: &[u8] = b"ATELIERS";
/// Shortest salt accepted by [`KdfParams::new`].
pub const MIN_SALT_LEN: usize = 8;
