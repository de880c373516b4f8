//! Greyscale formats: I4, I8, IA4 and IA8.
//!
//! Each function unpacks sample number `sample` (tile-local, row-major) from the bytes
//! of one tile.

use tpl_extract_common::color_565::scale_4_bit;
use tpl_extract_common::color_8888::Color8888;

/// I4: two samples per byte, high nibble first; intensity = nibble * 17, opaque.
#[inline(always)]
pub fn unpack_i4(tile: &[u8], sample: usize) -> Color8888 {
    let byte = tile[sample / 2];
    let nibble = if sample % 2 == 0 { byte >> 4 } else { byte & 0xF };
    Color8888::from_intensity(scale_4_bit(nibble), 255)
}

/// I8: one byte of intensity per sample, opaque.
#[inline(always)]
pub fn unpack_i8(tile: &[u8], sample: usize) -> Color8888 {
    Color8888::from_intensity(tile[sample], 255)
}

/// IA4: high nibble alpha, low nibble intensity, both scaled by 17.
#[inline(always)]
pub fn unpack_ia4(tile: &[u8], sample: usize) -> Color8888 {
    let byte = tile[sample];
    Color8888::from_intensity(scale_4_bit(byte & 0xF), scale_4_bit(byte >> 4))
}

/// IA8: two bytes per sample; first (high) byte alpha, second (low) byte intensity.
#[inline(always)]
pub fn unpack_ia8(tile: &[u8], sample: usize) -> Color8888 {
    let offset = sample * 2;
    Color8888::from_intensity(tile[offset + 1], tile[offset])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i4_reads_high_nibble_first() {
        let tile = [0xF0, 0x1E];

        assert_eq!(unpack_i4(&tile, 0), Color8888::new(255, 255, 255, 255));
        assert_eq!(unpack_i4(&tile, 1), Color8888::new(0, 0, 0, 255));
        assert_eq!(unpack_i4(&tile, 2), Color8888::new(17, 17, 17, 255));
        assert_eq!(unpack_i4(&tile, 3), Color8888::new(238, 238, 238, 255));
    }

    #[test]
    fn i4_scales_every_nibble_by_17() {
        for nibble in 0..16u8 {
            let tile = [nibble << 4 | nibble];
            let expected = Color8888::from_intensity(nibble * 17, 255);
            assert_eq!(unpack_i4(&tile, 0), expected);
            assert_eq!(unpack_i4(&tile, 1), expected);
        }
    }

    #[test]
    fn i8_passes_every_byte_through() {
        for value in 0..=255u8 {
            let pixel = unpack_i8(&[value], 0);
            assert_eq!(pixel, Color8888::new(value, value, value, 255));
        }
    }

    #[test]
    fn ia4_splits_alpha_and_intensity() {
        for value in 0..=255u8 {
            let pixel = unpack_ia4(&[value], 0);
            let intensity = (value & 0xF) * 17;
            assert_eq!(pixel, Color8888::new(intensity, intensity, intensity, (value >> 4) * 17));
        }
    }

    #[test]
    fn ia8_reads_alpha_then_intensity() {
        let tile = [0x00, 0x00, 0x80, 0x40];

        assert_eq!(unpack_ia8(&tile, 1), Color8888::new(0x40, 0x40, 0x40, 0x80));
        assert_eq!(unpack_ia8(&tile, 0), Color8888::TRANSPARENT);
    }
}
