use log::debug;

use crate::{CipherConfig, CipherError, CodecOptions, PasswordCipher, QrveilError, RasterBuffer};

use super::unveil_raw::UnveilRawApi;
use super::Password;

pub fn prepare<'r>() -> UnveilApi<'r> {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi<'r> {
    raw: UnveilRawApi<'r>,
    password: Password,
    cipher_config: CipherConfig,
}

impl<'r> UnveilApi<'r> {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.raw = self.raw.with_options(options);
        self
    }

    /// This is the raster that contains the secret
    pub fn from_raster(mut self, raster: &'r RasterBuffer) -> Self {
        self.raw = self.raw.from_raster(raster);
        self
    }

    /// Number of blob bytes to read, only needed by the unframed variant
    pub fn with_length(mut self, length: usize) -> Self {
        self.raw = self.raw.with_length(length);
        self
    }

    /// Salt and rounds of the key derivation, the same hide used
    pub fn with_cipher_config(mut self, config: CipherConfig) -> Self {
        self.cipher_config = config;
        self
    }

    /// Set the password the secret was encrypted with
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Extracts and decrypts the secret message
    pub fn execute(self) -> Result<String, QrveilError> {
        let Some(password) = self.password.as_deref() else {
            return Err(QrveilError::MissingPassword);
        };

        // base64 is ASCII, anything else is as malformed as a broken blob
        let blob = String::from_utf8(self.raw.execute()?)
            .map_err(|_| QrveilError::DecryptionError(CipherError::Malformed))?;
        debug!("found a blob of {} bytes, decrypting", blob.len());

        Ok(PasswordCipher::new(self.cipher_config).decrypt(&blob, password)?)
    }
}
