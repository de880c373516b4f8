//! Decoders for the tiled, non-compressed formats.
//!
//! Every format here is fully described by a [`TileShape`](crate::pixel_format::TileShape), a sample size and a function
//! turning one sample into a [`Color8888`]. The tiles are walked with a [`TileWalker`]; each
//! tile occupies exactly `tile width * tile height * bits per pixel / 8` bytes, and samples
//! inside a tile are stored left-to-right, top-to-bottom.

mod color;
mod intensity;

pub use color::*;
pub use intensity::*;

use crate::error::{DecodeError, DecodeResult};
use crate::pixel_format::PixelFormat;
use crate::tile_walker::TileWalker;
use tpl_extract_common::color_8888::Color8888;
use tpl_extract_common::rgba_image::RgbaImage;

/// A tiled format with one sample per pixel and no colour table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum LinearFormat {
    I4,
    I8,
    IA4,
    IA8,
    RGB565,
    RGB5A3,
    RGBA32,
}

impl LinearFormat {
    /// Returns the [`LinearFormat`] for `format`, or [`None`] for palette and block formats.
    pub const fn from_pixel_format(format: PixelFormat) -> Option<Self> {
        Some(match format {
            PixelFormat::I4 => Self::I4,
            PixelFormat::I8 => Self::I8,
            PixelFormat::IA4 => Self::IA4,
            PixelFormat::IA8 => Self::IA8,
            PixelFormat::RGB565 => Self::RGB565,
            PixelFormat::RGB5A3 => Self::RGB5A3,
            PixelFormat::RGBA32 => Self::RGBA32,
            PixelFormat::C4
            | PixelFormat::C8
            | PixelFormat::C14X2
            | PixelFormat::CompressedBlock => return None,
        })
    }

    /// The [`PixelFormat`] this format corresponds to.
    pub const fn pixel_format(self) -> PixelFormat {
        match self {
            Self::I4 => PixelFormat::I4,
            Self::I8 => PixelFormat::I8,
            Self::IA4 => PixelFormat::IA4,
            Self::IA8 => PixelFormat::IA8,
            Self::RGB565 => PixelFormat::RGB565,
            Self::RGB5A3 => PixelFormat::RGB5A3,
            Self::RGBA32 => PixelFormat::RGBA32,
        }
    }
}

/// Decodes a tiled texel buffer of a [`LinearFormat`] into an RGBA8888 raster.
///
/// # Parameters
///
/// - `format`: Format of the texels in `data`
/// - `data`: The raw texel buffer; may be longer than required, trailing bytes are ignored
/// - `height`, `width`: Dimensions of the image in pixels
///
/// # Errors
///
/// [`DecodeError::BufferTooSmall`] if `data` does not hold every tile covering the image.
/// The check happens before any tile is decoded.
pub fn decode_linear(
    format: LinearFormat,
    data: &[u8],
    height: u32,
    width: u32,
) -> DecodeResult<RgbaImage> {
    let pixel_format = format.pixel_format();
    let required = pixel_format.required_len(height, width);
    if data.len() < required {
        return Err(DecodeError::BufferTooSmall {
            format: pixel_format,
            required,
            actual: data.len(),
        });
    }

    // Match once here so each decode loop is specialised for its unpack function.
    let image = match format {
        LinearFormat::I4 => decode_tiled(pixel_format, data, height, width, unpack_i4),
        LinearFormat::I8 => decode_tiled(pixel_format, data, height, width, unpack_i8),
        LinearFormat::IA4 => decode_tiled(pixel_format, data, height, width, unpack_ia4),
        LinearFormat::IA8 => decode_tiled(pixel_format, data, height, width, unpack_ia8),
        LinearFormat::RGB565 => decode_tiled(pixel_format, data, height, width, unpack_rgb565),
        LinearFormat::RGB5A3 => decode_tiled(pixel_format, data, height, width, unpack_rgb5a3),
        LinearFormat::RGBA32 => decode_tiled(pixel_format, data, height, width, unpack_rgba32),
    };

    Ok(image)
}

/// Walks the tiles of `format` over `data` and writes every in-bounds sample into a new image.
///
/// `data` must already be validated to hold [`PixelFormat::required_len`] bytes.
#[inline(always)]
fn decode_tiled<F>(format: PixelFormat, data: &[u8], height: u32, width: u32, unpack: F) -> RgbaImage
where
    F: Fn(&[u8], usize) -> Color8888,
{
    let shape = format.tile_shape();
    let mut image = RgbaImage::new(width, height);

    let tiles = TileWalker::new(height, width, shape);
    for (tile, tile_data) in tiles.zip(data.chunks_exact(format.bytes_per_tile())) {
        for local_y in 0..shape.height {
            for local_x in 0..shape.width {
                let (x, y) = tile.pixel_position(local_x, local_y);
                if x >= width || y >= height {
                    continue;
                }

                let sample = (local_y * shape.width + local_x) as usize;
                image.put_pixel_clipped(x, y, unpack(tile_data, sample));
            }
        }
    }

    image
}
