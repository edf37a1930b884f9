use std::iter::Skip;
use std::slice::ChunksExact;

use crate::media::codec_options::Channel;
use crate::media::raster::{RasterBuffer, CHANNELS};

/// stegano source over one color channel of a `RasterBuffer`, one byte per pixel
///
/// ## Example of usage
/// ```rust
/// use std::io::Read;
/// use qrveil_core::media::image::decoder::ChannelLane;
/// use qrveil_core::universal_decoder::UniversalDecoder;
/// use qrveil_core::{Channel, RasterBuffer};
///
/// // blue channel of every pixel carries a 1 bit
/// let raster = RasterBuffer::filled(8, 1, [0, 0, 1, 0]);
/// let mut secret = [0; 1];
///
/// UniversalDecoder::new(ChannelLane::new(&raster, 0, Channel::Blue))
///     .read_exact(&mut secret)
///     .expect("Cannot read 1 byte from decoder");
///
/// assert_eq!(secret, [0xff]);
/// ```
pub struct ChannelLane<'i> {
    pixels: Skip<ChunksExact<'i, u8>>,
    offset: usize,
}

impl<'i> ChannelLane<'i> {
    /// starts at `start_pixel`, a start past the end yields an empty lane
    pub fn new(input: &'i RasterBuffer, start_pixel: usize, channel: Channel) -> Self {
        Self {
            pixels: input.as_bytes().chunks_exact(CHANNELS).skip(start_pixel),
            offset: channel.offset(),
        }
    }
}

impl<'i> Iterator for ChannelLane<'i> {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pixels.next().map(|pixel| pixel[self.offset])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}
