use std::fmt::{self, Debug, Formatter};

use log::debug;

use crate::media::payload::legacy::{hide_unframed, unframed_capacity};
use crate::media::payload::{embed, frame_pixels};
use crate::{
    CipherConfig, CodecOptions, Layout, PasswordCipher, ProtocolVariant, QrveilError, RasterBuffer,
};

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default)]
pub struct HideApi {
    message: Option<String>,
    password: Password,
    cipher_config: CipherConfig,
    options: CodecOptions,
    raster: Option<RasterBuffer>,
}

impl Debug for HideApi {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let message = self
            .message
            .as_ref()
            .map(|m| "*".repeat(m.chars().count()));

        f.debug_struct("HideApi")
            .field("message", &message)
            .field("password", &self.password)
            .field("cipher_config", &self.cipher_config)
            .field("options", &self.options)
            .field("raster", &self.raster)
            .finish()
    }
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.options.layout = layout;
        self
    }

    pub fn with_variant(mut self, variant: ProtocolVariant) -> Self {
        self.options.variant = variant;
        self
    }

    /// Salt and rounds of the key derivation, unveil has to use the same
    pub fn with_cipher_config(mut self, config: CipherConfig) -> Self {
        self.cipher_config = config;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The carrier, handed back by [`HideApi::execute`] with the secret inside
    pub fn with_raster(mut self, raster: RasterBuffer) -> Self {
        self.raster = Some(raster);
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password, `None` makes [`HideApi::execute`] fail
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Encrypts the message and embeds the blob. The raster comes back untouched on error.
    pub fn execute(self) -> Result<RasterBuffer, QrveilError> {
        let Some(message) = self.message else {
            return Err(QrveilError::MissingMessage);
        };
        let Some(password) = self.password.as_deref() else {
            return Err(QrveilError::MissingPassword);
        };
        let Some(raster) = self.raster else {
            return Err(QrveilError::CarrierNotSet);
        };

        let blob = PasswordCipher::new(self.cipher_config).encrypt(&message, password);
        debug!("sealed message into a blob of {} bytes", blob.len());

        let layout = self.options.layout;
        match self.options.variant {
            ProtocolVariant::Framed => embed(raster, blob.as_bytes(), &layout),
            ProtocolVariant::Unframed => {
                if blob.len() > unframed_capacity(&raster, &layout) {
                    let start = layout.start_pixel(&raster) as u64;
                    return Err(QrveilError::ImageCapacityError {
                        needed_pixels: start + blob.len() as u64 * 8,
                        available_pixels: raster.pixel_count() as u64,
                    });
                }

                Ok(hide_unframed(raster, blob.as_bytes(), &layout))
            }
        }
    }

    /// Pixels the framed blob of `message` occupies behind the start pixel
    pub fn required_pixels(message: &str) -> u64 {
        frame_pixels(qrveil_cipher::encoded_len(message.len()))
    }
}
