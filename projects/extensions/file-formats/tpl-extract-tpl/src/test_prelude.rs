//! Common test imports and utilities for TPL container tests
//!
//! Provides [`TplBuilder`] for assembling synthetic big-endian containers.
#![allow(unused_imports, missing_docs)]

extern crate alloc;

pub use alloc::{format, string::String, vec, vec::Vec};

pub use rstest::rstest;

pub use crate::tpl::constants::*;
pub use crate::tpl::parse_tpl::SamplerParams;
pub use tpl_extract_formats::PixelFormat;

use endian_writer::{BigEndianWriter, EndianWriter};

/// One image to place in a synthetic container.
#[derive(Debug, Clone)]
pub struct TestImage {
    pub format_code: u32,
    pub height: u16,
    pub width: u16,
    pub data: Vec<u8>,
    pub sampler: SamplerParams,
    pub palette_header_offset: u32,
}

impl TestImage {
    /// An image of `format` with exactly [`PixelFormat::required_len`] bytes of patterned data.
    pub fn new(format: PixelFormat, height: u16, width: u16) -> Self {
        let len = format.required_len(height as u32, width as u32);
        Self::with_format_code(format.raw(), height, width, len)
    }

    /// An image with an arbitrary format code and `data_len` bytes of patterned data.
    pub fn with_format_code(format_code: u32, height: u16, width: u16, data_len: usize) -> Self {
        Self {
            format_code,
            height,
            width,
            data: (0..data_len).map(|i| (i * 7 + 3) as u8).collect(),
            sampler: SamplerParams {
                wrap_s: 0,
                wrap_t: 0,
                min_filter: 1,
                mag_filter: 1,
                lod_bias: 0.0,
                edge_lod_enable: 0,
                min_lod: 0,
                max_lod: 0,
            },
            palette_header_offset: 0,
        }
    }

    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    pub fn with_sampler(mut self, sampler: SamplerParams) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn with_palette_header_offset(mut self, offset: u32) -> Self {
        self.palette_header_offset = offset;
        self
    }
}

/// Builds a container laid out as: header, image table, image headers, texel data
/// (images in table order, data offsets ascending).
#[derive(Debug, Clone)]
pub struct TplBuilder {
    magic: u32,
    images: Vec<TestImage>,
}

impl Default for TplBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TplBuilder {
    pub fn new() -> Self {
        Self {
            magic: TPL_MAGIC,
            images: Vec::new(),
        }
    }

    pub fn with_magic(mut self, magic: u32) -> Self {
        self.magic = magic;
        self
    }

    pub fn with_image(mut self, image: TestImage) -> Self {
        self.images.push(image);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let count = self.images.len();
        let table_offset = TPL_HEADER_SIZE;
        let headers_offset = table_offset + count * IMAGE_TABLE_ENTRY_SIZE;
        let data_offset = headers_offset + count * IMAGE_HEADER_SIZE;
        let total = data_offset + self.images.iter().map(|i| i.data.len()).sum::<usize>();

        let mut out = vec![0u8; total];
        // SAFETY: `out` holds at least the 12-byte header.
        unsafe {
            let mut writer = BigEndianWriter::new(out.as_mut_ptr());
            writer.write_u32_at(self.magic, 0);
            writer.write_u32_at(count as u32, 4);
            writer.write_u32_at(table_offset as u32, 8);
        }

        let mut next_data = data_offset;
        for (index, image) in self.images.iter().enumerate() {
            let entry = table_offset + index * IMAGE_TABLE_ENTRY_SIZE;
            let header = headers_offset + index * IMAGE_HEADER_SIZE;

            // SAFETY: `out` is sized to hold every table entry and image header.
            unsafe {
                let mut writer = BigEndianWriter::new(out.as_mut_ptr());
                writer.write_u32_at(header as u32, entry as isize);
                writer.write_u32_at(image.palette_header_offset, entry as isize + 4);

                writer.write_u32_at(image.format_code, header as isize + 4);
                writer.write_u32_at(next_data as u32, header as isize + 8);
                writer.write_u32_at(image.sampler.wrap_s, header as isize + 12);
                writer.write_u32_at(image.sampler.wrap_t, header as isize + 16);
                writer.write_u32_at(image.sampler.min_filter, header as isize + 20);
                writer.write_u32_at(image.sampler.mag_filter, header as isize + 24);
                writer.write_u32_at(image.sampler.lod_bias.to_bits(), header as isize + 28);
            }
            out[header..header + 2].copy_from_slice(&image.height.to_be_bytes());
            out[header + 2..header + 4].copy_from_slice(&image.width.to_be_bytes());
            out[header + 32] = image.sampler.edge_lod_enable;
            out[header + 33] = image.sampler.min_lod;
            out[header + 34] = image.sampler.max_lod;

            out[next_data..next_data + image.data.len()].copy_from_slice(&image.data);
            next_data += image.data.len();
        }

        out
    }
}
