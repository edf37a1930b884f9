use log::debug;

use crate::media::payload::extract;
use crate::media::payload::legacy::unveil_unframed;
use crate::{CodecOptions, ProtocolVariant, QrveilError, RasterBuffer};

pub fn prepare<'r>() -> UnveilRawApi<'r> {
    UnveilRawApi::default()
}

/// Pulls the embedded bytes out of a raster without decrypting them.
#[derive(Default, Debug, Clone)]
pub struct UnveilRawApi<'r> {
    raster: Option<&'r RasterBuffer>,
    options: CodecOptions,
    length: Option<usize>,
}

impl<'r> UnveilRawApi<'r> {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the raster that contains the secret
    pub fn from_raster(mut self, raster: &'r RasterBuffer) -> Self {
        self.raster = Some(raster);
        self
    }

    /// Number of bytes to read, only needed by the unframed variant
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Extracts the embedded bytes
    pub fn execute(self) -> Result<Vec<u8>, QrveilError> {
        let Some(raster) = self.raster else {
            return Err(QrveilError::CarrierNotSet);
        };
        let layout = self.options.layout;

        let data = match self.options.variant {
            ProtocolVariant::Framed => extract(raster, &layout),
            ProtocolVariant::Unframed => {
                let Some(length) = self.length else {
                    return Err(QrveilError::MissingLength);
                };
                Some(unveil_unframed(raster, &layout, length)).filter(|data| !data.is_empty())
            }
        };
        debug!(
            "{:?} unveil in the {} channel found {} bytes",
            self.options.variant,
            layout.channel,
            data.as_ref().map_or(0, Vec::len)
        );

        data.ok_or(QrveilError::NoSecretData)
    }
}
