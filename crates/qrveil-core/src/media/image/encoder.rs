use std::iter::Skip;
use std::slice::ChunksExactMut;

use crate::media::codec_options::Channel;
use crate::media::raster::{RasterBuffer, CHANNELS};

/// mutable stegano target over one color channel of a `RasterBuffer`
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use qrveil_core::media::image::encoder::ChannelLaneMut;
/// use qrveil_core::universal_encoder::UniversalEncoder;
/// use qrveil_core::{Channel, RasterBuffer};
///
/// let mut raster = RasterBuffer::filled(16, 1, [0xff; 4]);
/// {
///     let mut encoder = UniversalEncoder::new(ChannelLaneMut::new(&mut raster, 0, Channel::Red));
///     encoder.write_all(&[0x0f]).expect("Cannot write secret message");
/// }
/// assert_eq!(raster.pixel(0), Some([0xfe, 0xff, 0xff, 0xff]));
/// assert_eq!(raster.pixel(7), Some([0xff, 0xff, 0xff, 0xff]));
/// ```
pub struct ChannelLaneMut<'a> {
    pixels: Skip<ChunksExactMut<'a, u8>>,
    offset: usize,
}

impl<'a> ChannelLaneMut<'a> {
    /// starts at `start_pixel`, a start past the end yields an empty lane
    pub fn new(input: &'a mut RasterBuffer, start_pixel: usize, channel: Channel) -> Self {
        Self {
            pixels: input
                .as_bytes_mut()
                .chunks_exact_mut(CHANNELS)
                .skip(start_pixel),
            offset: channel.offset(),
        }
    }
}

impl<'a> Iterator for ChannelLaneMut<'a> {
    type Item = &'a mut u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset;
        self.pixels.next().map(|pixel| &mut pixel[offset])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}
