//! Decoders for the tiled GPU pixel formats found in TPL texture containers.
//!
//! Every decoder takes a raw texel buffer plus the image dimensions and produces a
//! [`RgbaImage`] of exactly that size. The entry point is [`decode_texels`], which
//! dispatches on [`PixelFormat`]:
//!
//! - [`linear`]: I4, I8, IA4, IA8, RGB565, RGB5A3 and RGBA32.
//! - [`cmpr`]: the block-compressed format.
//! - `C4`, `C8` and `C14X2` always fail with [`DecodeError::UnsupportedPaletteFormat`].
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod cmpr;
pub mod decode;
pub mod error;
pub mod linear;
pub mod pixel_format;
pub mod tile_walker;

#[cfg(test)]
pub mod test_prelude;

pub use decode::decode_texels;
pub use error::{DecodeError, DecodeResult};
pub use pixel_format::{PixelFormat, TileShape, UnknownPixelFormatName};
pub use tpl_extract_common::{color_8888::Color8888, rgba_image::RgbaImage};
