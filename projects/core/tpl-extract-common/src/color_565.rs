use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the RGB565 texel format and the endpoints of compressed blocks.
///
/// Channels are widened to 8 bits by scaling (`value * 255 / max`, integer division)
/// rather than by bit replication. Both map the field extremes to 0 and 255, but they
/// disagree on some intermediate values; scaling is what TPL decoders are expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from a big-endian byte pair, as stored in TPL files.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_be_bytes(bytes))
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub const fn red(&self) -> u8 {
        scale_5_bit((self.value >> 11) & 0x1F)
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub const fn green(&self) -> u8 {
        scale_6_bit((self.value >> 5) & 0x3F)
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub const fn blue(&self) -> u8 {
        scale_5_bit(self.value & 0x1F)
    }

    /// Compares the raw 16-bit values of two [`Color565`] values
    #[inline]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use tpl_extract_common::color_565::Color565;
    ///
    /// let rgba8888 = Color565::from_raw(0xF800).to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }
}

/// Widens a 5-bit channel (0..=31) to 8 bits.
#[inline]
pub const fn scale_5_bit(value: u16) -> u8 {
    ((value as u32 * 255) / 31) as u8
}

/// Widens a 6-bit channel (0..=63) to 8 bits.
#[inline]
pub const fn scale_6_bit(value: u16) -> u8 {
    ((value as u32 * 255) / 63) as u8
}

/// Widens a 4-bit channel (0..=15) to 8 bits.
#[inline]
pub const fn scale_4_bit(value: u8) -> u8 {
    (value & 0xF) * 17
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0xF800, 255, 0, 0)]
    #[case(0x07E0, 0, 255, 0)]
    #[case(0x001F, 0, 0, 255)]
    #[case(0xFFFF, 255, 255, 255)]
    #[case(0x0000, 0, 0, 0)]
    fn expands_primary_colours(#[case] raw: u16, #[case] r: u8, #[case] g: u8, #[case] b: u8) {
        let color = Color565::from_raw(raw);
        assert_eq!(color.to_color_8888(), Color8888::new(r, g, b, 255));
    }

    #[test]
    fn uses_integer_scaling_not_bit_replication() {
        // 4 * 255 / 31 = 32, whereas (4 << 3) | (4 >> 2) = 33.
        let color = Color565::from_raw(4 << 11);
        assert_eq!(color.red(), 32);
    }

    #[test]
    fn five_bit_scaling_is_monotonic() {
        let mut previous = 0;
        for value in 0..32u16 {
            let scaled = scale_5_bit(value);
            assert!(scaled >= previous);
            previous = scaled;
        }
        assert_eq!(scale_5_bit(0), 0);
        assert_eq!(scale_5_bit(31), 255);
    }

    #[test]
    fn six_bit_scaling_is_monotonic() {
        let mut previous = 0;
        for value in 0..64u16 {
            let scaled = scale_6_bit(value);
            assert!(scaled >= previous);
            previous = scaled;
        }
        assert_eq!(scale_6_bit(0), 0);
        assert_eq!(scale_6_bit(63), 255);
    }

    #[test]
    fn four_bit_scaling_multiplies_by_17() {
        for value in 0..16u8 {
            assert_eq!(scale_4_bit(value), value * 17);
        }
    }

    #[test]
    fn reads_big_endian_bytes() {
        assert_eq!(Color565::from_be_bytes([0xF8, 0x00]).raw_value(), 0xF800);
    }

    #[test]
    fn greater_than_compares_raw_values() {
        let a = Color565::from_raw(0x0801);
        let b = Color565::from_raw(0x0800);
        assert!(a.greater_than(&b));
        assert!(!b.greater_than(&a));
        assert!(!a.greater_than(&a));
    }
}
