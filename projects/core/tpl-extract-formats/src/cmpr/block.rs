//! Decoding of a single 8-byte CMPR sub-block; BC1 (DXT1) stored big-endian.
//!
//! Layout of a sub-block:
//!
//! ```text
//! 0..2  c0       RGB565, big-endian
//! 2..4  c1       RGB565, big-endian
//! 4..8  indices  one byte per row, 2 bits per texel, leftmost texel in bits 7..6
//! ```

use tpl_extract_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Size of one 4x4 sub-block in bytes.
pub const CMPR_BLOCK_SIZE: usize = 8;

/// Builds the 4-entry colour table of a sub-block from its two endpoints.
///
/// - `c0 > c1` (raw 16-bit comparison): `[c0, c1, (2*c0 + c1) / 3, (c0 + 2*c1) / 3]`, all opaque.
/// - otherwise: `[c0, c1, (c0 + c1) / 2, transparent black]`.
///
/// Interpolation is per channel, on the 8-bit expanded endpoints, with integer division.
#[inline]
pub fn cmpr_palette(c0: Color565, c1: Color565) -> [Color8888; 4] {
    let e0 = c0.to_color_8888();
    let e1 = c1.to_color_8888();
    let (r0, g0, b0) = (e0.r as u32, e0.g as u32, e0.b as u32);
    let (r1, g1, b1) = (e1.r as u32, e1.g as u32, e1.b as u32);

    if c0.greater_than(&c1) {
        // Four-color block
        [
            e0,
            e1,
            Color8888::new(
                ((2 * r0 + r1) / 3) as u8,
                ((2 * g0 + g1) / 3) as u8,
                ((2 * b0 + b1) / 3) as u8,
                255,
            ),
            Color8888::new(
                ((r0 + 2 * r1) / 3) as u8,
                ((g0 + 2 * g1) / 3) as u8,
                ((b0 + 2 * b1) / 3) as u8,
                255,
            ),
        ]
    } else {
        // Three-color block, 1 bit alpha.
        [
            e0,
            e1,
            Color8888::new(
                ((r0 + r1) / 2) as u8,
                ((g0 + g1) / 2) as u8,
                ((b0 + b1) / 2) as u8,
                255,
            ),
            Color8888::TRANSPARENT,
        ]
    }
}

/// Decodes a CMPR sub-block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: The 8 bytes of the sub-block
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels
///
/// # Example
///
/// ```
/// use tpl_extract_formats::cmpr::decode_cmpr_block;
/// use tpl_extract_common::color_8888::Color8888;
///
/// // Solid red: c0 == c1 == 0xF800, all indices 0.
/// let block = [0xF8, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00];
/// let decoded = decode_cmpr_block(&block);
/// assert_eq!(decoded.get_pixel(2, 3), Color8888::new(255, 0, 0, 255));
/// ```
#[inline]
pub fn decode_cmpr_block(src: &[u8; CMPR_BLOCK_SIZE]) -> Decoded4x4Block {
    let c0 = Color565::from_be_bytes([src[0], src[1]]);
    let c1 = Color565::from_be_bytes([src[2], src[3]]);
    let palette = cmpr_palette(c0, c1);

    let mut result = Decoded4x4Block::new(Color8888::TRANSPARENT);
    for (y, &row) in src[4..8].iter().enumerate() {
        for x in 0..4 {
            let shift = 6 - 2 * x;
            let index = (row >> shift) & 0x3;
            result.set_pixel(x, y, palette[index as usize]);
        }
    }

    result
}

/// Wraps [`decode_cmpr_block`] for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than [`CMPR_BLOCK_SIZE`].
#[inline]
pub fn decode_cmpr_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; CMPR_BLOCK_SIZE] = src.get(..CMPR_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_cmpr_block(block))
}
