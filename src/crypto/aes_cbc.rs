use aes::Aes256;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use zeroize::Zeroizing;

use super::KeyMaterial;
use crate::error::{CipherError, CipherFailure, KeyMaterialError};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt plaintext as a single AES-256-CBC/PKCS7 operation
///
/// Fails with [`CipherError::KeyMaterial`] unless `material` holds a 32-byte
/// key and a 16-byte IV.
pub fn encrypt(material: &KeyMaterial, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    let cipher = Aes256CbcEnc::new_from_slices(material.key(), material.iv())
        .map_err(KeyMaterialError::from)?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt ciphertext and strip PKCS7 padding
///
/// A rejected ciphertext is a [`CipherError::DecryptionFailed`] carrying the
/// cipher's own `UnpadError`.
pub fn decrypt(
    material: &KeyMaterial,
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    let cipher = Aes256CbcDec::new_from_slices(material.key(), material.iv())
        .map_err(KeyMaterialError::from)?;

    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(CipherFailure::from)?;
    Ok(Zeroizing::new(plaintext))
}
