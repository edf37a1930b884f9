//! # Qrveil Core API
//!
//! Hides a password encrypted secret in the least significant bits of an RGBA raster.
//!
//! - [`api::hide`] encrypts a message and embeds it into a raster
//! - [`api::unveil`] extracts and decrypts it again
//! - [`api::unveil_raw`] extracts the embedded blob without decrypting it
//!
//! The building blocks are public too: [`embed`] and [`extract`] for the
//! framed protocol, [`write_bits`] and [`read_bits`] for plain bit access.
//!
//! # Usage Examples
//!
//! ## Hide a message inside a raster
//!
//! ```rust
//! use qrveil_core::{CipherConfig, RasterBuffer};
//!
//! let raster = RasterBuffer::filled(64, 64, [255, 255, 255, 255]);
//! let config = CipherConfig::default().with_rounds(1_000);
//!
//! let secret = qrveil_core::api::hide::prepare()
//!     .with_message("secret-auth-token")
//!     .with_password("pw123")
//!     .with_cipher_config(config.clone())
//!     .with_raster(raster)
//!     .execute()
//!     .expect("Failed to hide message in raster");
//!
//! let message = qrveil_core::api::unveil::prepare()
//!     .from_raster(&secret)
//!     .using_password("pw123")
//!     .with_cipher_config(config)
//!     .execute()
//!     .expect("Failed to unveil message from raster");
//!
//! assert_eq!(message, "secret-auth-token");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::error::QrveilError;
pub use crate::media::image::{read_bits, write_bits, LsbCodec};
pub use crate::media::payload::{
    capacity, embed, embed_in_place, extract, frame_pixels, HEADER_LEN, MAX_FRAME_PAYLOAD,
};
pub use crate::media::{Channel, CodecOptions, Layout, ProtocolVariant, RasterBuffer, StartPixel};
pub use crate::result::Result;
pub use qrveil_cipher::{CipherConfig, CipherError, PasswordCipher};

#[cfg(test)]
pub(crate) mod test_utils {
    use rand::RngCore;

    use crate::media::RasterBuffer;

    /// 5x5 raster, pixel `i` holds `[4i, 4i + 1, 4i + 2, 4i + 3]`
    pub fn prepare_5x5_raster() -> RasterBuffer {
        let data = (0..100).collect();

        RasterBuffer::new(5, 5, data).expect("5x5 pixels take 100 bytes")
    }

    pub fn prepare_noise_raster(width: u32, height: u32) -> RasterBuffer {
        let mut data = vec![0; width as usize * height as usize * 4];
        rand::thread_rng().fill_bytes(&mut data);

        RasterBuffer::new(width, height, data).expect("buffer matches the dimensions")
    }
}
