/// stores one bit in the least significant bit of a carrier
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

/// reads the bit back from the least significant bit of a carrier
pub trait UnveilBit {
    fn unveil_bit(self) -> bool;
}

impl HideBit for &mut u8 {
    #[inline(always)]
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

impl UnveilBit for u8 {
    #[inline(always)]
    fn unveil_bit(self) -> bool {
        self & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_bit_only_touches_the_lowest_bit() {
        let mut color: u8 = 0b1010_1010;
        color.hide_bit(true);
        assert_eq!(color, 0b1010_1011);
        color.hide_bit(false);
        assert_eq!(color, 0b1010_1010);

        let mut white = u8::MAX;
        white.hide_bit(false);
        assert_eq!(white, 0xfe);
    }

    #[test]
    fn unveil_bit_reads_the_lowest_bit() {
        assert!(0x01u8.unveil_bit());
        assert!(!0xfeu8.unveil_bit());
    }
}
