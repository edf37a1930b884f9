use std::fmt::{self, Debug, Formatter};

use image::RgbaImage;

use crate::error::QrveilError;
use crate::result::Result;

/// bytes per pixel, channel 0..=3
pub const CHANNELS: usize = 4;

/// A decoded RGBA raster, pixel `i` occupies the bytes `[4i, 4i + 4)`.
///
/// The raster owns its bytes. Embedding takes it by value and hands it back,
/// so a buffer is never shared between two writers.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as u64 * height as u64 * CHANNELS as u64;
        if data.len() as u64 != expected {
            return Err(QrveilError::InvalidRaster {
                width,
                height,
                len: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// a raster where every pixel has the same color
    pub fn filled(width: u32, height: u32, rgba: [u8; CHANNELS]) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgba.repeat(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// the RGBA values of the pixel at `index`, counted row by row
    pub fn pixel(&self, index: usize) -> Option<[u8; CHANNELS]> {
        let start = index.checked_mul(CHANNELS)?;
        let px = self.data.get(start..start + CHANNELS)?;

        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn into_image(self) -> Result<RgbaImage> {
        let (width, height, len) = (self.width, self.height, self.data.len());
        RgbaImage::from_raw(width, height, self.data)
            .ok_or(QrveilError::InvalidRaster { width, height, len })
    }
}

impl From<RgbaImage> for RasterBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            data: image.into_raw(),
        }
    }
}

impl Debug for RasterBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.data.len())
            .finish()
    }
}
