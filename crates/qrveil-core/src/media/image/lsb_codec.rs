use log::trace;

use super::decoder::ChannelLane;
use super::encoder::ChannelLaneMut;
use crate::media::codec_options::Channel;
use crate::media::raster::RasterBuffer;
use crate::universal_decoder::UniversalDecoder;
use crate::universal_encoder::UniversalEncoder;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB raster decoder that implements Read
    pub fn decoder(
        input: &RasterBuffer,
        start_pixel: usize,
        channel: Channel,
    ) -> UniversalDecoder<ChannelLane<'_>> {
        UniversalDecoder::new(ChannelLane::new(input, start_pixel, channel))
    }

    /// builds a LSB raster encoder that implements Write
    pub fn encoder(
        carrier: &mut RasterBuffer,
        start_pixel: usize,
        channel: Channel,
    ) -> UniversalEncoder<ChannelLaneMut<'_>> {
        UniversalEncoder::new(ChannelLaneMut::new(carrier, start_pixel, channel))
    }

    /// number of pixels from `start_pixel` to the end of the raster
    pub fn lane_len(raster: &RasterBuffer, start_pixel: usize) -> usize {
        raster.pixel_count().saturating_sub(start_pixel)
    }
}

/// Writes `bytes` into the least significant bit of `channel`, one bit per pixel from `start_pixel` on.
///
/// Stops silently at the end of the raster and returns the number of bits written.
pub fn write_bits(
    raster: &mut RasterBuffer,
    start_pixel: u32,
    channel: Channel,
    bytes: &[u8],
) -> usize {
    let written = LsbCodec::encoder(raster, start_pixel as usize, channel).hide_bits(bytes);
    trace!("wrote {written} bits into the {channel} channel from pixel {start_pixel} on");

    written
}

/// Reads `byte_count` bytes back, the mirror of [`write_bits`].
///
/// Nothing is validated here. Bits past the end of the raster read as 0,
/// so callers bound `byte_count` before asking.
pub fn read_bits(
    raster: &RasterBuffer,
    start_pixel: u32,
    channel: Channel,
    byte_count: u32,
) -> Vec<u8> {
    let mut buf = vec![0; byte_count as usize];
    let read = LsbCodec::decoder(raster, start_pixel as usize, channel).unveil_bits(&mut buf);
    trace!("read {read} bits from the {channel} channel from pixel {start_pixel} on");

    buf
}
