//! Common test imports and utilities for decoder tests
#![allow(unused_imports)]

extern crate alloc;

pub use alloc::{format, string::String, string::ToString, vec, vec::Vec};

pub use rstest::rstest;

pub use crate::pixel_format::PixelFormat;
pub use tpl_extract_common::color_8888::Color8888;

/// Deterministic non-uniform filler for texel buffers of the given length.
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(37) ^ (i >> 3)) as u8).collect()
}
