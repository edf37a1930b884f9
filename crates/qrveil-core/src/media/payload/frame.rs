use byteorder::{BigEndian, ByteOrder};
use log::{debug, warn};
use std::io::Read;

use crate::error::QrveilError;
use crate::media::codec_options::Layout;
use crate::media::image::LsbCodec;
use crate::media::raster::RasterBuffer;
use crate::result::Result;

/// size of the big endian length header in front of every payload
pub const HEADER_LEN: usize = 4;
/// largest payload `extract` accepts, longer headers are treated as noise
pub const MAX_FRAME_PAYLOAD: usize = 100_000;

const BITS_PER_BYTE: u64 = 8;

/// pixels a frame with `payload_len` bytes occupies, one pixel per bit
pub fn frame_pixels(payload_len: usize) -> u64 {
    (HEADER_LEN as u64 + payload_len as u64) * BITS_PER_BYTE
}

/// Largest payload in bytes that still fits behind the header with the given layout.
pub fn capacity(raster: &RasterBuffer, layout: &Layout) -> usize {
    let lane = LsbCodec::lane_len(raster, layout.start_pixel(raster)) as u64;
    let bytes = (lane / BITS_PER_BYTE).saturating_sub(HEADER_LEN as u64);

    bytes.min(u32::MAX as u64) as usize
}

/// Hides `payload` behind a length header, takes the raster and hands it back.
///
/// Fails with [`QrveilError::ImageCapacityError`] before any pixel is touched.
pub fn embed(mut raster: RasterBuffer, payload: &[u8], layout: &Layout) -> Result<RasterBuffer> {
    embed_in_place(&mut raster, payload, layout)?;

    Ok(raster)
}

/// Same as [`embed`] for a raster the caller keeps exclusive access to.
pub fn embed_in_place(raster: &mut RasterBuffer, payload: &[u8], layout: &Layout) -> Result<()> {
    let start = layout.start_pixel(raster);
    let needed_pixels = (start as u64).saturating_add(frame_pixels(payload.len()));
    let available_pixels = raster.pixel_count() as u64;

    if payload.len() as u64 > u32::MAX as u64 || needed_pixels > available_pixels {
        debug!(
            "frame of {} bytes needs {needed_pixels} pixels, raster has {available_pixels}",
            HEADER_LEN + payload.len()
        );
        return Err(QrveilError::ImageCapacityError {
            needed_pixels,
            available_pixels,
        });
    }
    if payload.len() > MAX_FRAME_PAYLOAD {
        warn!(
            "payload of {} bytes exceeds {MAX_FRAME_PAYLOAD} bytes, extract will not accept it",
            payload.len()
        );
    }

    let mut frame = vec![0; HEADER_LEN + payload.len()];
    BigEndian::write_u32(&mut frame[..HEADER_LEN], payload.len() as u32);
    frame[HEADER_LEN..].copy_from_slice(payload);

    let written = LsbCodec::encoder(raster, start, layout.channel).hide_bits(&frame);
    debug_assert_eq!(written as u64, frame_pixels(payload.len()));
    debug!(
        "embedded {} payload bytes into the {} channel from pixel {start} on",
        payload.len(),
        layout.channel
    );

    Ok(())
}

/// Reads the length header and the payload behind it.
///
/// Returns `None` for a zero length, a length above [`MAX_FRAME_PAYLOAD`] or a
/// length the rest of the raster cannot hold. The bounds are checked before
/// anything is allocated.
pub fn extract(raster: &RasterBuffer, layout: &Layout) -> Option<Vec<u8>> {
    let start = layout.start_pixel(raster);
    let available_pixels = raster.pixel_count() as u64;

    if (start as u64).saturating_add(frame_pixels(0)) > available_pixels {
        debug!("no room for a length header from pixel {start} on");
        return None;
    }

    let mut decoder = LsbCodec::decoder(raster, start, layout.channel);
    let mut header = [0; HEADER_LEN];
    decoder.read_exact(&mut header).ok()?;

    let len = BigEndian::read_u32(&header) as usize;
    if len == 0
        || len > MAX_FRAME_PAYLOAD
        || start as u64 + frame_pixels(len) > available_pixels
    {
        debug!("implausible frame length {len}");
        return None;
    }

    let mut payload = vec![0; len];
    decoder.read_exact(&mut payload).ok()?;
    debug!("extracted {len} payload bytes from the {} channel", layout.channel);

    Some(payload)
}
