use std::fmt::{self, Display, Formatter};

use super::raster::RasterBuffer;
use crate::error::QrveilError;

/// The color channel whose least significant bit carries the payload, one bit per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// byte offset of the channel inside a pixel
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = QrveilError;

    fn try_from(offset: u8) -> Result<Self, Self::Error> {
        match offset {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            3 => Ok(Channel::Alpha),
            other => Err(QrveilError::InvalidChannel(other)),
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// Where the first payload bit goes. Not a secret, just an agreement between hide and unveil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPixel {
    /// first pixel of the second row, keeps row 0 untouched
    #[default]
    RowOne,
    /// a quarter into the pixel data, rounded up
    QuarterBuffer,
    /// an explicit pixel index
    Index(u32),
}

impl StartPixel {
    /// resolves the start against a concrete raster, the result may lie past its end
    pub fn resolve(self, raster: &RasterBuffer) -> usize {
        match self {
            StartPixel::RowOne => raster.width() as usize,
            StartPixel::QuarterBuffer => raster.pixel_count().div_ceil(4),
            StartPixel::Index(i) => i as usize,
        }
    }
}

/// Start pixel plus carrier channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub start: StartPixel,
    pub channel: Channel,
}

impl Default for Layout {
    /// the canonical layout: blue channel from row one on
    fn default() -> Self {
        Self {
            start: StartPixel::RowOne,
            channel: Channel::Blue,
        }
    }
}

impl Layout {
    pub fn new(start: StartPixel, channel: Channel) -> Self {
        Self { start, channel }
    }

    /// layout of the unframed format: alpha channel from a quarter of the buffer on
    pub fn legacy() -> Self {
        Self {
            start: StartPixel::QuarterBuffer,
            channel: Channel::Alpha,
        }
    }

    pub fn start_pixel(&self, raster: &RasterBuffer) -> usize {
        self.start.resolve(raster)
    }
}

/// The two payload formats. They are not interchangeable, unveil must use the variant hide used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProtocolVariant {
    /// 4 byte big endian length header in front of the payload
    #[default]
    Framed,
    /// raw payload bits without a header, the reader has to know the length
    Unframed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecOptions {
    pub variant: ProtocolVariant,
    pub layout: Layout,
}

impl CodecOptions {
    pub fn framed(layout: Layout) -> Self {
        Self {
            variant: ProtocolVariant::Framed,
            layout,
        }
    }

    pub fn unframed(layout: Layout) -> Self {
        Self {
            variant: ProtocolVariant::Unframed,
            layout,
        }
    }

    /// the unframed variant in its legacy layout
    pub fn legacy() -> Self {
        Self::unframed(Layout::legacy())
    }
}
