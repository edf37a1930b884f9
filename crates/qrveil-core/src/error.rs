use thiserror::Error;

pub use qrveil_cipher::CipherError;

#[derive(Error, Debug)]
pub enum QrveilError {
    /// Represents a raster whose byte length does not match its dimensions
    #[error("Raster of {width}x{height} pixels cannot hold {len} bytes, 4 bytes per pixel are expected")]
    InvalidRaster { width: u32, height: u32, len: usize },

    /// Represents a channel offset outside of R, G, B and A
    #[error("Invalid color channel offset: {0}")]
    InvalidChannel(u8),

    /// Represents a payload that does not fit into the raster, detected before any pixel was touched
    #[error(
        "Capacity Error: The image is too small to hold this data. {needed_pixels} pixels are required, {available_pixels} are available"
    )]
    ImageCapacityError {
        needed_pixels: u64,
        available_pixels: u64,
    },

    /// Represents an unveil of no secret data, also covers frames with an implausible length header
    #[error("No hidden data found in this image")]
    NoSecretData,

    /// Represents an error when decrypting the data, a wrong password looks the same as tampered or non text data
    #[error("Wrong password or corrupted data")]
    DecryptionError(#[source] CipherError),

    #[error("No carrier raster set")]
    CarrierNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing password")]
    MissingPassword,

    #[error("API Error: Unframed payloads need an explicit length")]
    MissingLength,
}

impl From<CipherError> for QrveilError {
    fn from(e: CipherError) -> Self {
        QrveilError::DecryptionError(e)
    }
}
