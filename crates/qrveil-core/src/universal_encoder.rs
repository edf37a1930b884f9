use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::{Result, Write};

use crate::media::HideBit;

/// generic stegano encoder, hides one bit per carrier byte, most significant bit first
pub struct UniversalEncoder<I> {
    carrier: I,
    bits_written: usize,
}

impl<'a, I> UniversalEncoder<I>
where
    I: Iterator<Item = &'a mut u8>,
{
    pub fn new(carrier: I) -> Self {
        Self {
            carrier,
            bits_written: 0,
        }
    }

    /// Hides as many bits of `buf` as there are carriers left and returns that number.
    ///
    /// When the carrier runs dry the rest of `buf` is dropped silently, even in the middle of a byte.
    pub fn hide_bits(&mut self, buf: &[u8]) -> usize {
        let mut bits = BitReader::endian(buf, BigEndian);
        let mut bits_written = 0;
        while let Ok(bit) = bits.read_bit() {
            let Some(carrier) = self.carrier.next() else {
                break;
            };
            carrier.hide_bit(bit);
            bits_written += 1;
        }
        self.bits_written += bits_written;

        bits_written
    }

    /// total number of bits hidden so far
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }
}

impl<'a, I> Write for UniversalEncoder<I>
where
    I: Iterator<Item = &'a mut u8>,
{
    /// reports only whole bytes, a trailing partial byte still got its leading bits hidden
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(self.hide_bits(buf) >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn should_hide_most_significant_bit_first() {
        let mut carrier = [0u8; 8];
        let written = UniversalEncoder::new(carrier.iter_mut()).hide_bits(&[0b1000_0001]);

        assert_eq!(written, 8);
        assert_eq!(carrier, [1, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn should_leave_the_upper_bits_alone() {
        let mut carrier = [0xf0u8, 0xf1, 0x0e, 0x0f, 0xaa, 0x55, 0x00, 0xff];
        UniversalEncoder::new(carrier.iter_mut()).hide_bits(&[0b0101_0101]);

        assert_eq!(carrier, [0xf0, 0xf1, 0x0e, 0x0f, 0xaa, 0x55, 0x00, 0xff]);
    }

    #[test]
    fn should_truncate_silently_when_the_carrier_runs_dry() {
        let mut carrier = [0u8; 12];
        let mut encoder = UniversalEncoder::new(carrier.iter_mut());

        assert_eq!(encoder.hide_bits(&[0xff, 0xff]), 12);
        assert_eq!(encoder.hide_bits(&[0xff]), 0);
        assert_eq!(encoder.bits_written(), 12);
        assert_eq!(carrier, [1; 12]);
    }

    #[test]
    fn should_fail_write_all_when_the_carrier_is_too_small() {
        let mut carrier = [0u8; 15];
        let err = UniversalEncoder::new(carrier.iter_mut())
            .write_all(&[0xff, 0xff])
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::WriteZero);
    }

    #[test]
    fn should_continue_where_the_last_write_ended() {
        let mut carrier = [0u8; 16];
        {
            let mut encoder = UniversalEncoder::new(carrier.iter_mut());
            encoder.write_all(&[0xff]).unwrap();
            encoder.write_all(&[0x01]).unwrap();
        }

        assert_eq!(carrier[..8], [1; 8]);
        assert_eq!(carrier[8..], [0, 0, 0, 0, 0, 0, 0, 1]);
    }
}
