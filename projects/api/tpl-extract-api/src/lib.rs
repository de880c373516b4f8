//! Extract RGBA images from TPL texture containers.
//!
//! Parses the container with `tpl-extract-tpl`, slices out each image's texel bytes and
//! decodes them with `tpl-extract-formats`. Failures are isolated per image: a container
//! whose header or image table cannot be read fails as a whole, while a bad image only
//! fails its own entry.
//!
//! # Example
//!
//! ```
//! use tpl_extract_api::{extract_images, ExtractResult};
//!
//! fn count_decoded(container: &[u8]) -> ExtractResult<usize> {
//!     let images = extract_images(container)?;
//!     Ok(images.iter().filter(|image| image.result.is_ok()).count())
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod api;
pub mod error;

#[cfg(feature = "file-io")]
pub mod file_io;

pub use api::{extract_image, extract_images, raw_extents, ExtractedImage, RawExtent};
pub use error::{ExtractError, ExtractResult};

#[cfg(feature = "file-io")]
pub use file_io::{extract_file, with_file_contents, FileOperationError, FileOperationResult};

// Types that appear in this crate's signatures.
pub use tpl_extract_common::{color_8888::Color8888, rgba_image::RgbaImage};
pub use tpl_extract_formats::{DecodeError, PixelFormat};
pub use tpl_extract_tpl::{ContainerError, ImageDescriptor, SamplerParams};
