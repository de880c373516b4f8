//! Shared types for the TPL texture decoders.
//!
//! - [`color_565::Color565`]: a packed 16-bit RGB565 sample.
//! - [`color_8888::Color8888`]: one normalized RGBA8888 pixel.
//! - [`decoded_4x4_block::Decoded4x4Block`]: a decoded 4x4 sub-block of a compressed texture.
//! - [`rgba_image::RgbaImage`]: the dense RGBA8888 raster every decoder produces.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod color_565;
pub mod color_8888;
pub mod decoded_4x4_block;
pub mod rgba_image;
