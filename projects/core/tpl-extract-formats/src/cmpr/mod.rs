//! CMPR: block-compressed texels grouped into 8x8 macro-tiles.
//!
//! Each macro-tile holds four 8-byte sub-blocks in the order top-left, top-right,
//! bottom-left, bottom-right. Only whole macro-tiles are decoded: an image of
//! `height` x `width` pixels covers `height / 8` x `width / 8` of them (truncating),
//! and any remainder rows or columns stay transparent.

mod block;

pub use block::*;

use crate::error::{DecodeError, DecodeResult};
use crate::pixel_format::PixelFormat;
use crate::tile_walker::TileWalker;
use tpl_extract_common::rgba_image::RgbaImage;

/// Pixel offset `(x, y)` of each sub-block within its macro-tile, in storage order.
const SUB_BLOCK_OFFSETS: [(u32, u32); 4] = [(0, 0), (4, 0), (0, 4), (4, 4)];

/// Decodes a CMPR texel buffer into an RGBA8888 raster.
///
/// # Parameters
///
/// - `data`: The raw texel buffer; trailing bytes past the last whole macro-tile are ignored
/// - `height`, `width`: Dimensions of the image in pixels
///
/// # Errors
///
/// [`DecodeError::BufferTooSmall`] if `data` does not hold every whole macro-tile.
pub fn decode_cmpr(data: &[u8], height: u32, width: u32) -> DecodeResult<RgbaImage> {
    let format = PixelFormat::CompressedBlock;
    let required = format.required_len(height, width);
    if data.len() < required {
        return Err(DecodeError::BufferTooSmall {
            format,
            required,
            actual: data.len(),
        });
    }

    let shape = format.tile_shape();
    let mut image = RgbaImage::new(width, height);
    let macro_tiles = TileWalker::with_tile_counts(width / shape.width, height / shape.height, shape);

    for (tile, tile_data) in macro_tiles.zip(data.chunks_exact(format.bytes_per_tile())) {
        let (left, top) = tile.pixel_position(0, 0);

        for (sub_index, &(sub_x, sub_y)) in SUB_BLOCK_OFFSETS.iter().enumerate() {
            // `tile_data` is a whole macro-tile, so every sub-block is in range.
            let start = sub_index * CMPR_BLOCK_SIZE;
            let sub_block: [u8; CMPR_BLOCK_SIZE] = core::array::from_fn(|i| tile_data[start + i]);
            let decoded = decode_cmpr_block(&sub_block);

            for row in 0..4 {
                for col in 0..4 {
                    let x = left + sub_x + col;
                    let y = top + sub_y + row;
                    image.put_pixel_clipped(x, y, decoded.get_pixel(col as usize, row as usize));
                }
            }
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use tpl_extract_common::color_8888::Color8888;

    const RED: [u8; 8] = [0xF8, 0x00, 0xF8, 0x00, 0, 0, 0, 0];
    const GREEN: [u8; 8] = [0x07, 0xE0, 0x07, 0xE0, 0, 0, 0, 0];
    const BLUE: [u8; 8] = [0x00, 0x1F, 0x00, 0x1F, 0, 0, 0, 0];
    const WHITE: [u8; 8] = [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0];

    fn macro_tile(sub_blocks: [[u8; 8]; 4]) -> Vec<u8> {
        sub_blocks.concat()
    }

    #[test]
    fn places_sub_blocks_in_quadrant_order() {
        let data = macro_tile([RED, GREEN, BLUE, WHITE]);
        let image = decode_cmpr(&data, 8, 8).unwrap();

        assert_eq!(image.get_pixel(0, 0), Some(Color8888::new(255, 0, 0, 255)));
        assert_eq!(image.get_pixel(7, 0), Some(Color8888::new(0, 255, 0, 255)));
        assert_eq!(image.get_pixel(0, 7), Some(Color8888::new(0, 0, 255, 255)));
        assert_eq!(image.get_pixel(7, 7), Some(Color8888::new(255, 255, 255, 255)));
        assert_eq!(image.get_pixel(3, 4), Some(Color8888::new(0, 0, 255, 255)));
        assert_eq!(image.get_pixel(4, 3), Some(Color8888::new(0, 255, 0, 255)));
    }

    #[test]
    fn macro_tiles_are_row_major() {
        // 16x8 image => two macro-tiles side by side.
        let mut data = macro_tile([RED; 4]);
        data.extend(macro_tile([BLUE; 4]));

        let image = decode_cmpr(&data, 8, 16).unwrap();
        assert_eq!(image.get_pixel(7, 7), Some(Color8888::new(255, 0, 0, 255)));
        assert_eq!(image.get_pixel(8, 0), Some(Color8888::new(0, 0, 255, 255)));
    }

    #[test]
    fn remainder_rows_and_columns_stay_transparent() {
        let data = macro_tile([RED; 4]);
        let image = decode_cmpr(&data, 12, 10).unwrap();

        assert_eq!(image.width(), 10);
        assert_eq!(image.height(), 12);
        assert_eq!(image.get_pixel(7, 7), Some(Color8888::new(255, 0, 0, 255)));
        assert_eq!(image.get_pixel(8, 0), Some(Color8888::TRANSPARENT));
        assert_eq!(image.get_pixel(0, 8), Some(Color8888::TRANSPARENT));
        assert_eq!(image.get_pixel(9, 11), Some(Color8888::TRANSPARENT));
    }

    #[test]
    fn every_sub_block_of_every_macro_tile_is_decoded() {
        // Opaque white in every sub-block: c0 > c1, all indices 0.
        let white = [0xFF, 0xFF, 0x00, 0x00, 0, 0, 0, 0];
        let data = white.repeat(16);

        let image = decode_cmpr(&data, 16, 16).unwrap();
        assert!(image
            .pixels()
            .iter()
            .all(|p| *p == Color8888::new(255, 255, 255, 255)));
    }

    #[test]
    fn images_smaller_than_a_macro_tile_decode_to_transparent() {
        let image = decode_cmpr(&[], 4, 4).unwrap();
        assert!(image.pixels().iter().all(|p| *p == Color8888::TRANSPARENT));
    }

    #[test]
    fn rejects_buffer_one_byte_short() {
        let data = macro_tile([RED; 4]);
        assert_eq!(
            decode_cmpr(&data[..31], 8, 8),
            Err(DecodeError::BufferTooSmall {
                format: PixelFormat::CompressedBlock,
                required: 32,
                actual: 31,
            })
        );
    }
}
