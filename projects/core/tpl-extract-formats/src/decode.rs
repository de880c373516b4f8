//! Format dispatch: one entry point for every [`PixelFormat`].

use crate::cmpr::decode_cmpr;
use crate::error::{DecodeError, DecodeResult};
use crate::linear::{decode_linear, LinearFormat};
use crate::pixel_format::PixelFormat;
use tpl_extract_common::rgba_image::RgbaImage;

/// Decodes the texel buffer of one image into an RGBA8888 raster.
///
/// # Parameters
///
/// - `format`: Pixel format declared by the image header
/// - `data`: Texel bytes of the image; may be longer than required
/// - `height`, `width`: Dimensions of the image in pixels
///
/// # Returns
///
/// A raster of exactly `height` x `width` pixels.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedPaletteFormat`] for `C4`, `C8` and `C14X2`, regardless of `data`.
/// - [`DecodeError::BufferTooSmall`] if `data` is shorter than [`PixelFormat::required_len`].
///
/// # Examples
///
/// ```
/// use tpl_extract_formats::{decode_texels, DecodeError, PixelFormat};
///
/// let image = decode_texels(PixelFormat::I8, &[0x80; 32], 4, 8).unwrap();
/// assert_eq!(image.get_pixel(5, 2).unwrap().to_array(), [0x80, 0x80, 0x80, 0xFF]);
///
/// assert_eq!(
///     decode_texels(PixelFormat::C8, &[0; 32], 4, 8),
///     Err(DecodeError::UnsupportedPaletteFormat(PixelFormat::C8))
/// );
/// ```
pub fn decode_texels(
    format: PixelFormat,
    data: &[u8],
    height: u32,
    width: u32,
) -> DecodeResult<RgbaImage> {
    if format.is_palette() {
        return Err(DecodeError::UnsupportedPaletteFormat(format));
    }

    match LinearFormat::from_pixel_format(format) {
        Some(linear) => decode_linear(linear, data, height, width),
        None => decode_cmpr(data, height, width),
    }
}
