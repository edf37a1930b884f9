//! The unframed format of older carriers: payload bits without a length header.
//!
//! The reader has to know how many bytes to pull out, nothing in the raster tells.

use log::{debug, warn};

use crate::media::codec_options::Layout;
use crate::media::image::LsbCodec;
use crate::media::raster::RasterBuffer;

/// Largest payload in bytes the lane can carry without a header.
pub fn unframed_capacity(raster: &RasterBuffer, layout: &Layout) -> usize {
    LsbCodec::lane_len(raster, layout.start_pixel(raster)) / 8
}

/// Writes the raw payload bits, whatever does not fit is dropped.
pub fn hide_unframed(mut raster: RasterBuffer, payload: &[u8], layout: &Layout) -> RasterBuffer {
    let start = layout.start_pixel(&raster);
    let written = LsbCodec::encoder(&mut raster, start, layout.channel).hide_bits(payload);

    if written < payload.len() * 8 {
        warn!(
            "raster only took {written} of {} payload bits, the rest was dropped",
            payload.len() * 8
        );
    } else {
        debug!(
            "hid {} unframed bytes in the {} channel from pixel {start} on",
            payload.len(),
            layout.channel
        );
    }

    raster
}

/// Reads `byte_count` bytes back, capped at the whole bytes the lane holds.
pub fn unveil_unframed(raster: &RasterBuffer, layout: &Layout, byte_count: usize) -> Vec<u8> {
    let start = layout.start_pixel(raster);
    let len = byte_count.min(unframed_capacity(raster, layout));
    if len < byte_count {
        debug!("lane holds only {len} of the {byte_count} requested bytes");
    }

    let mut buf = vec![0; len];
    LsbCodec::decoder(raster, start, layout.channel).unveil_bits(&mut buf);

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::codec_options::{Channel, StartPixel};
    use crate::media::image::read_bits;
    use crate::test_utils::prepare_noise_raster;

    #[test]
    fn should_hide_and_unveil_in_the_legacy_layout() {
        let raster = prepare_noise_raster(20, 20);
        let payload = b"legacy payload";

        let raster = hide_unframed(raster, payload, &Layout::legacy());

        assert_eq!(unveil_unframed(&raster, &Layout::legacy(), payload.len()), payload);
    }

    #[test]
    fn should_start_a_quarter_into_the_alpha_lane() {
        let raster = RasterBuffer::filled(8, 8, [0xff; 4]);
        let raster = hide_unframed(raster, &[0], &Layout::legacy());

        // 64 pixels, a quarter is 16
        assert_eq!(read_bits(&raster, 16, Channel::Alpha, 1), [0]);
        assert_eq!(raster.pixel(15), Some([0xff; 4]));
        assert_eq!(raster.pixel(16), Some([0xff, 0xff, 0xff, 0xfe]));
        assert_eq!(raster.pixel(24), Some([0xff; 4]));
    }

    #[test]
    fn should_drop_what_does_not_fit() {
        // 16 pixels from pixel 0 on, room for exactly 2 bytes
        let layout = Layout::new(StartPixel::Index(0), Channel::Red);
        let raster = hide_unframed(prepare_noise_raster(4, 4), b"abc", &layout);

        assert_eq!(unframed_capacity(&raster, &layout), 2);
        assert_eq!(unveil_unframed(&raster, &layout, 3), b"ab");
    }

    #[test]
    fn should_not_write_a_length_header() {
        let layout = Layout::new(StartPixel::Index(0), Channel::Blue);
        let raster = hide_unframed(prepare_noise_raster(8, 8), b"hi", &layout);

        assert_eq!(read_bits(&raster, 0, Channel::Blue, 2), b"hi");
    }
}
