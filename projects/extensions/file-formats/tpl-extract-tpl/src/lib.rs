//! Reading of TPL texture containers.
//!
//! A container is a 12-byte header, a table of `(image header offset, palette header offset)`
//! pairs and one image header per entry. This crate locates every image and the byte range
//! of its texel data; decoding those bytes is left to `tpl-extract-formats`.
//!
//! ```
//! use tpl_extract_tpl::{likely_tpl, parse_tpl};
//!
//! let data = [0x00, 0x20, 0xAF, 0x30, 0, 0, 0, 0, 0, 0, 0, 0x0C];
//! assert!(likely_tpl(&data));
//!
//! let file = parse_tpl(&data).unwrap();
//! assert!(file.descriptors.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod byte_cursor;
pub mod error;

/// TPL header, image table and extent parsing.
pub mod tpl;

#[cfg(test)]
pub mod test_prelude;

pub use error::{ContainerError, ContainerResult};
pub use tpl::*;
