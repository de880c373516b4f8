//! Colour formats: RGB565, RGB5A3 and RGBA32.

use tpl_extract_common::color_565::{scale_4_bit, scale_5_bit, Color565};
use tpl_extract_common::color_8888::Color8888;

#[inline(always)]
fn read_u16_be(tile: &[u8], sample: usize) -> u16 {
    let offset = sample * 2;
    u16::from_be_bytes([tile[offset], tile[offset + 1]])
}

/// RGB565: one big-endian 16-bit sample per pixel, opaque.
#[inline(always)]
pub fn unpack_rgb565(tile: &[u8], sample: usize) -> Color8888 {
    Color565::from_raw(read_u16_be(tile, sample)).to_color_8888()
}

/// RGB5A3: one big-endian 16-bit sample per pixel.
///
/// The top bit selects the layout:
/// - `0`: ARGB4444 in bits 14..0 (`0AAA RRRR GGGG BBBB`), every channel scaled by 17.
/// - `1`: RGB555 (`1RRR RRGG GGGB BBBB`), channels scaled by `255 / 31`, alpha 255.
#[inline(always)]
pub fn unpack_rgb5a3(tile: &[u8], sample: usize) -> Color8888 {
    decode_rgb5a3(read_u16_be(tile, sample))
}

/// Converts one raw RGB5A3 value to RGBA8888. See [`unpack_rgb5a3`].
#[inline(always)]
pub const fn decode_rgb5a3(value: u16) -> Color8888 {
    if value & 0x8000 == 0 {
        Color8888::new(
            scale_4_bit((value >> 8) as u8),
            scale_4_bit((value >> 4) as u8),
            scale_4_bit(value as u8),
            scale_4_bit((value >> 12) as u8),
        )
    } else {
        Color8888::new(
            scale_5_bit((value >> 10) & 0x1F),
            scale_5_bit((value >> 5) & 0x1F),
            scale_5_bit(value & 0x1F),
            255,
        )
    }
}

/// RGBA32: four consecutive bytes per pixel read directly as R, G, B, A.
#[inline(always)]
pub fn unpack_rgba32(tile: &[u8], sample: usize) -> Color8888 {
    let offset = sample * 4;
    Color8888::new(
        tile[offset],
        tile[offset + 1],
        tile[offset + 2],
        tile[offset + 3],
    )
}
