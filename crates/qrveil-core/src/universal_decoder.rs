use std::io::{Read, Result};

use crate::media::UnveilBit;

/// generic stegano decoder, collects one bit per carrier byte, most significant bit first
pub struct UniversalDecoder<I> {
    carrier: I,
}

impl<I> UniversalDecoder<I>
where
    I: Iterator<Item = u8>,
{
    pub fn new(carrier: I) -> Self {
        Self { carrier }
    }

    /// Fills `buf` bit by bit and returns the number of bits read.
    ///
    /// When the carrier runs dry the remaining bits of `buf` are set to 0.
    pub fn unveil_bits(&mut self, buf: &mut [u8]) -> usize {
        let wanted = buf.len() << 3;
        let mut bits_read = 0;
        for carrier in self.carrier.by_ref().take(wanted) {
            let byte = &mut buf[bits_read >> 3];
            let mask = 0x80 >> (bits_read & 7);
            if carrier.unveil_bit() {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
            bits_read += 1;
        }
        if bits_read < wanted {
            let partial = bits_read >> 3;
            // clear the tail of a partially read byte and everything after it
            if bits_read & 7 != 0 {
                buf[partial] &= !(0xffu8 >> (bits_read & 7));
                buf[partial + 1..].fill(0);
            } else {
                buf[partial..].fill(0);
            }
        }

        bits_read
    }
}

impl<I> Read for UniversalDecoder<I>
where
    I: Iterator<Item = u8>,
{
    /// reports only whole bytes
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.unveil_bits(buf) >> 3)
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn should_collect_most_significant_bit_first() {
        let carrier = [1u8, 0, 0, 0, 0, 0, 0, 1, 0xfe, 0xff];
        let mut buf = [0u8; 1];
        let read = UniversalDecoder::new(carrier.into_iter()).unveil_bits(&mut buf);

        assert_eq!(read, 8);
        assert_eq!(buf, [0b1000_0001]);
    }

    #[test]
    fn should_overwrite_stale_buffer_content() {
        let carrier = [0u8; 8];
        let mut buf = [0xffu8];
        UniversalDecoder::new(carrier.into_iter()).unveil_bits(&mut buf);

        assert_eq!(buf, [0]);
    }

    #[test]
    fn should_zero_the_bits_past_the_carrier_end() {
        let carrier = [1u8; 12];
        let mut buf = [0xaau8; 3];
        let read = UniversalDecoder::new(carrier.into_iter()).unveil_bits(&mut buf);

        assert_eq!(read, 12);
        assert_eq!(buf, [0xff, 0xf0, 0x00]);
    }

    #[test]
    fn should_fail_read_exact_when_the_carrier_is_too_small() {
        let carrier = [1u8; 15];
        let mut buf = [0u8; 2];
        let err = UniversalDecoder::new(carrier.into_iter())
            .read_exact(&mut buf)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn should_continue_where_the_last_read_ended() {
        let carrier = [[1u8; 8], [0, 0, 0, 0, 0, 0, 1, 0]].concat();
        let mut decoder = UniversalDecoder::new(carrier.into_iter());
        let mut first = [0u8];
        let mut second = [0u8];

        decoder.read_exact(&mut first).unwrap();
        decoder.read_exact(&mut second).unwrap();

        assert_eq!((first[0], second[0]), (0xff, 0x02));
    }
}
