//! # Password Cipher
//! Authenticated encryption of text payloads with a password.
//!
//! The key is stretched with PBKDF2-HMAC-SHA256 from the password and a configured salt,
//! the payload is sealed with AES-256-GCM. The resulting blob is laid out as
//!
//! ```text
//! IV (12 bytes) || Tag (16 bytes) || Ciphertext (n bytes)
//! ```
//!
//! and travels as a standard base64 string.
//!
//! ```rust
//! use qrveil_cipher::{CipherConfig, PasswordCipher};
//!
//! let cipher = PasswordCipher::new(CipherConfig::with_salt("pepper"));
//! let blob = cipher.encrypt("secret-auth-token", "pw123");
//!
//! assert_eq!(cipher.decrypt(&blob, "pw123").unwrap(), "secret-auth-token");
//! assert!(cipher.decrypt(&blob, "wrong").is_err());
//! ```

use aes_gcm::aead::{AeadCore, AeadInPlace, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce, Tag};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use log::debug;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

mod config;
pub mod error;

pub use crate::config::{CipherConfig, DEFAULT_ROUNDS, DEFAULT_SALT};
pub use crate::error::CipherError;

pub const IV_LEN: usize = 12;
pub const TAG_LEN: usize = 16;
pub const KEY_LEN: usize = 32;
/// bytes a blob carries on top of the ciphertext
pub const BLOB_OVERHEAD: usize = IV_LEN + TAG_LEN;
/// largest plaintext AES-GCM seals under one nonce, 2^36 - 32 bytes
pub const MAX_PLAINTEXT_LEN: u64 = (1 << 36) - 32;

pub type Result<T> = std::result::Result<T, CipherError>;
pub type Key = [u8; KEY_LEN];

/// raw blob length for a plaintext of `plain_len` bytes, GCM does not pad
pub const fn encrypted_len(plain_len: usize) -> usize {
    plain_len + BLOB_OVERHEAD
}

/// base64 string length of the blob for a plaintext of `plain_len` bytes
pub const fn encoded_len(plain_len: usize) -> usize {
    encrypted_len(plain_len).div_ceil(3) * 4
}

/// AES-256-GCM sealing with a password derived key.
///
/// The cipher holds configuration only. Every call derives the key again and
/// wipes it before returning, so one instance can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct PasswordCipher {
    config: CipherConfig,
}

impl PasswordCipher {
    pub fn new(config: CipherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// encrypts `plaintext` and returns the base64 encoded blob
    pub fn encrypt(&self, plaintext: &str, password: &str) -> String {
        BASE64.encode(self.encrypt_data(plaintext.as_bytes(), password))
    }

    /// decodes a base64 blob and decrypts it back to the original text
    pub fn decrypt(&self, blob: &str, password: &str) -> Result<String> {
        let data = BASE64
            .decode(blob.trim().as_bytes())
            .map_err(|_| CipherError::Malformed)?;
        let plain = self.decrypt_data(&data, password)?;

        String::from_utf8(plain).map_err(|_| CipherError::Malformed)
    }

    /// Encrypts raw bytes into `IV || Tag || Ciphertext`.
    ///
    /// There is no error path. Panics when `data` exceeds [`MAX_PLAINTEXT_LEN`],
    /// far beyond anything a raster frame can carry.
    pub fn encrypt_data(&self, data: &[u8], password: &str) -> Vec<u8> {
        debug_assert!(data.len() as u64 <= MAX_PLAINTEXT_LEN);
        let mut key = self.derive_key(password);
        let cipher = Aes256Gcm::new(&key.into());
        key.zeroize();

        // a failing OS random source panics inside `OsRng`, nothing to recover from
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let mut blob = Vec::with_capacity(encrypted_len(data.len()));
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&[0u8; TAG_LEN]);
        blob.extend_from_slice(data);

        // GCM only refuses messages beyond MAX_PLAINTEXT_LEN
        let tag = cipher
            .encrypt_in_place_detached(&nonce, b"", &mut blob[BLOB_OVERHEAD..])
            .expect("payload exceeds the AES-GCM message limit");
        blob[IV_LEN..BLOB_OVERHEAD].copy_from_slice(&tag);

        debug!(
            "sealed {} bytes into a blob of {} bytes",
            data.len(),
            blob.len()
        );

        blob
    }

    /// decrypts a raw `IV || Tag || Ciphertext` blob
    pub fn decrypt_data(&self, blob: &[u8], password: &str) -> Result<Vec<u8>> {
        if blob.len() < BLOB_OVERHEAD {
            debug!("blob of {} bytes is too short", blob.len());
            return Err(CipherError::Malformed);
        }
        let (iv, rest) = blob.split_at(IV_LEN);
        let (tag, ciphertext) = rest.split_at(TAG_LEN);

        let mut key = self.derive_key(password);
        let cipher = Aes256Gcm::new(&key.into());
        key.zeroize();

        let mut plain = ciphertext.to_vec();
        cipher
            .decrypt_in_place_detached(Nonce::from_slice(iv), b"", &mut plain, Tag::from_slice(tag))
            .map_err(|_| CipherError::AuthenticationFailed)?;

        Ok(plain)
    }

    /// PBKDF2-HMAC-SHA256 over the password and the configured salt
    fn derive_key(&self, password: &str) -> Key {
        let mut key = [0u8; KEY_LEN];
        pbkdf2_hmac::<Sha256>(
            password.as_bytes(),
            self.config.salt(),
            self.config.rounds(),
            &mut key,
        );

        key
    }
}
