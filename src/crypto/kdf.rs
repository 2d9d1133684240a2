use log::trace;
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

use super::{DEFAULT_ITERATIONS, DEFAULT_SALT, MIN_SALT_LEN};
use crate::error::{KdfParamsError, KeyMaterialError};

/// Salt and iteration count fed into PBKDF2.
///
/// Ciphertexts can only be decrypted with the parameters that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParams {
    salt: Vec<u8>,
    iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT.to_vec(),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KdfParams {
    pub fn new(salt: impl Into<Vec<u8>>, iterations: u32) -> Result<Self, KdfParamsError> {
        let params = Self {
            salt: salt.into(),
            iterations,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn validate(&self) -> Result<(), KdfParamsError> {
        if self.iterations < 1 {
            return Err(KdfParamsError::IterationsTooLow);
        }
        if self.salt.len() < MIN_SALT_LEN {
            return Err(KdfParamsError::SaltTooShort {
                len: self.salt.len(),
                min: MIN_SALT_LEN,
            });
        }
        Ok(())
    }
}

/// Symmetric key and IV derived from a password. Both buffers are zeroed on drop.
pub struct KeyMaterial {
    key: Zeroizing<Vec<u8>>,
    iv: Zeroizing<Vec<u8>>,
}

impl KeyMaterial {
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

/// Derive a key of `key_size_bits` and an IV of `block_size_bits` from `password`.
///
/// Both are read from one PBKDF2-HMAC-SHA1 output stream, key bytes first and
/// IV bytes after them. Salt, iteration count and this draw order together
/// decide whether old ciphertexts stay readable.
///
/// Both sizes must be whole bytes; anything else is
/// [`KeyMaterialError::PartialByte`].
pub fn derive_key_and_iv(
    password: &str,
    key_size_bits: usize,
    block_size_bits: usize,
    params: &KdfParams,
) -> Result<KeyMaterial, KeyMaterialError> {
    for bits in [key_size_bits, block_size_bits] {
        if bits % 8 != 0 {
            return Err(KeyMaterialError::PartialByte { bits });
        }
    }

    let key_len = key_size_bits / 8;
    let iv_len = block_size_bits / 8;

    let mut stream = Zeroizing::new(vec![0u8; key_len + iv_len]);
    pbkdf2_hmac::<Sha1>(
        password.as_bytes(),
        &params.salt,
        params.iterations,
        &mut stream,
    );
    trace!(
        "derived {key_len}-byte key and {iv_len}-byte iv ({} iterations)",
        params.iterations
    );

    let (key, iv) = stream.split_at(key_len);
    Ok(KeyMaterial {
        key: Zeroizing::new(key.to_vec()),
        iv: Zeroizing::new(iv.to_vec()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{BLOCK_SIZE_BITS, IV_LEN, KEY_LEN, KEY_SIZE_BITS};

    #[test]
    fn kdf_is_deterministic() {
        let kdf = KdfParams::default();

        let m1 = derive_key_and_iv("password", KEY_SIZE_BITS, BLOCK_SIZE_BITS, &kdf).unwrap();
        let m2 = derive_key_and_iv("password", KEY_SIZE_BITS, BLOCK_SIZE_BITS, &kdf).unwrap();

        assert_eq!(m1.key(), m2.key());
        assert_eq!(m1.iv(), m2.iv());
    }

    #[test]
    fn kdf_sizes_follow_cipher_parameters() {
        let kdf = KdfParams::default();

        let m = derive_key_and_iv("pw", KEY_SIZE_BITS, BLOCK_SIZE_BITS, &kdf).unwrap();
        assert_eq!(m.key().len(), KEY_LEN);
        assert_eq!(m.iv().len(), IV_LEN);

        let m = derive_key_and_iv("pw", 128, 64, &kdf).unwrap();
        assert_eq!(m.key().len(), 16);
        assert_eq!(m.iv().len(), 8);
    }

    #[test]
    fn kdf_matches_known_pbkdf2_stream() {
        let m = derive_key_and_iv(
            "testPassword",
            KEY_SIZE_BITS,
            BLOCK_SIZE_BITS,
            &KdfParams::default(),
        )
        .unwrap();

        let mut stream = m.key().to_vec();
        stream.extend_from_slice(m.iv());
        let hex: String = stream.iter().map(|b| format!("{b:02x}")).collect();

        assert_eq!(
            hex,
            "2592af443cfc89135e5910732ba41124bc85e1dd61b917b68c183b2d5cdb5c34\
             9d4414ebad56c1647af11dcfc854b108"
        );
    }

    #[test]
    fn iv_continues_the_key_stream() {
        let kdf = KdfParams::default();
        let m = derive_key_and_iv("pw", KEY_SIZE_BITS, BLOCK_SIZE_BITS, &kdf).unwrap();

        let mut whole = [0u8; KEY_LEN + IV_LEN];
        pbkdf2_hmac::<Sha1>(b"pw", kdf.salt(), kdf.iterations(), &mut whole);

        assert_eq!(m.key(), &whole[..KEY_LEN]);
        assert_eq!(m.iv(), &whole[KEY_LEN..]);
    }

    #[test]
    fn partial_byte_sizes_are_rejected() {
        let kdf = KdfParams::default();

        assert_eq!(
            derive_key_and_iv("pw", 255, BLOCK_SIZE_BITS, &kdf).err(),
            Some(KeyMaterialError::PartialByte { bits: 255 })
        );
        assert_eq!(
            derive_key_and_iv("pw", KEY_SIZE_BITS, 129, &kdf).err(),
            Some(KeyMaterialError::PartialByte { bits: 129 })
        );
    }

    #[test]
    fn kdf_params_affect_output() {
        let kdf1 = KdfParams::new(*b"salt-one", 1000).unwrap();
        let kdf2 = KdfParams::new(*b"salt-two", 1000).unwrap();
        let kdf3 = KdfParams::new(*b"salt-one", 1001).unwrap();

        let k1 = derive_key_and_iv("pw", KEY_SIZE_BITS, BLOCK_SIZE_BITS, &kdf1).unwrap();
        let k2 = derive_key_and_iv("pw", KEY_SIZE_BITS, BLOCK_SIZE_BITS, &kdf2).unwrap();
        let k3 = derive_key_and_iv("pw", KEY_SIZE_BITS, BLOCK_SIZE_BITS, &kdf3).unwrap();

        assert_ne!(k1.key(), k2.key());
        assert_ne!(k1.key(), k3.key());
    }

    #[test]
    fn default_params_are_the_legacy_pair() {
        let kdf = KdfParams::default();
        assert_eq!(kdf.salt(), b"ATELIERS");
        assert_eq!(kdf.iterations(), 1000);
        assert!(kdf.validate().is_ok());
    }

    #[test]
    fn kdf_invalid_params_fail_gracefully() {
        assert_eq!(
            KdfParams::new(*b"ATELIERS", 0),
            Err(KdfParamsError::IterationsTooLow)
        );
        assert_eq!(
            KdfParams::new(*b"short", 1000),
            Err(KdfParamsError::SaltTooShort { len: 5, min: 8 })
        );
    }
}
