use std::path::PathBuf;

use qrveil_core::{CipherError, QrveilError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Qrveil(#[from] QrveilError),

    /// Malformed and unauthentic blobs look the same on purpose
    #[error("Wrong password or corrupted data")]
    Decryption(#[from] CipherError),

    /// Represents an image file that could not be opened or decoded
    #[error("Image media is invalid: {}", .path.display())]
    InvalidImageMedia {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Represents a failure when encoding or writing the PNG file
    #[error("Image encoding error: {}", .path.display())]
    ImageEncodingError {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl CliError {
    /// exit code of the process, 1 for failed operations and 2 for unusable input
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Qrveil(QrveilError::NoSecretData)
            | CliError::Qrveil(QrveilError::DecryptionError(_))
            | CliError::Decryption(_) => 1,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decryption_failures_stay_generic() {
        let malformed = CliError::from(CipherError::Malformed);
        let unauthentic = CliError::from(QrveilError::from(CipherError::AuthenticationFailed));

        assert_eq!(malformed.to_string(), unauthentic.to_string());
        assert_eq!(malformed.exit_code(), 1);
    }

    #[test]
    fn capacity_errors_name_the_numbers() {
        let e = CliError::from(QrveilError::ImageCapacityError {
            needed_pixels: 600,
            available_pixels: 256,
        });

        assert!(e.to_string().contains("600 pixels are required"));
        assert_eq!(e.exit_code(), 2);
    }
}
