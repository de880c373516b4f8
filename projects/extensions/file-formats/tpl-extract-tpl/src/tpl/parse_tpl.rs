use super::constants::*;
use crate::byte_cursor::ByteCursor;
use crate::error::{ContainerError, ContainerResult};
use alloc::vec::Vec;
use endian_writer::{BigEndianReader, EndianReader};
use tpl_extract_formats::PixelFormat;

/// Which of the two recognised magics a container starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// `0x0020AF30`
    Standard,
    /// `0x54504C78` (`TPLx`)
    Extended,
}

impl ContainerKind {
    /// Maps a magic value to its [`ContainerKind`], or [`None`] if it is not recognised.
    pub const fn from_magic(magic: u32) -> Option<Self> {
        match magic {
            TPL_MAGIC => Some(Self::Standard),
            TPLX_MAGIC => Some(Self::Extended),
            _ => None,
        }
    }

    /// Short display name of the container flavour.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "TPL",
            Self::Extended => "TPLx",
        }
    }
}

/// The 12-byte container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TplHeader {
    /// Magic as read from offset 0.
    pub magic: u32,
    /// Container flavour identified by [`TplHeader::magic`].
    pub kind: ContainerKind,
    /// Number of image table entries.
    pub image_count: u32,
    /// Absolute file offset of the image table.
    pub image_table_offset: u32,
}

/// Texture sampling state stored in every image header.
///
/// Carried through unchanged; decoding does not interpret it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub struct SamplerParams {
    pub wrap_s: u32,
    pub wrap_t: u32,
    pub min_filter: u32,
    pub mag_filter: u32,
    pub lod_bias: f32,
    pub edge_lod_enable: u8,
    pub min_lod: u8,
    pub max_lod: u8,
}

/// One image as declared by its image header.
///
/// The format code and dimensions are kept as read. They are validated per image by
/// [`ImageDescriptor::pixel_format`] and [`ImageDescriptor::validate_dimensions`], so one
/// bad header does not prevent locating the others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDescriptor {
    /// Zero-based position in the image table.
    pub index: usize,
    /// Declared height in pixels; zero is rejected at extraction time.
    pub height: u16,
    /// Declared width in pixels; zero is rejected at extraction time.
    pub width: u16,
    /// Raw `format` field.
    pub format_code: u32,
    /// Absolute file offset of the texel data.
    pub data_offset: u32,
    /// Offset of the image header this descriptor was read from.
    pub image_header_offset: u32,
    /// Recorded but never followed; palette formats are not decoded.
    pub palette_header_offset: Option<u32>,
    /// Sampling state, carried through unchanged.
    pub sampler: SamplerParams,
}

impl ImageDescriptor {
    /// The declared [`PixelFormat`].
    ///
    /// # Errors
    ///
    /// [`ContainerError::UnknownPixelFormat`] if the format code is not recognised.
    pub fn pixel_format(&self) -> ContainerResult<PixelFormat> {
        PixelFormat::from_raw(self.format_code)
            .ok_or(ContainerError::UnknownPixelFormat(self.format_code))
    }

    /// Fails with [`ContainerError::InvalidDimensions`] if height or width is zero.
    pub fn validate_dimensions(&self) -> ContainerResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(ContainerError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Name of the declared format, or `"UnknownFormat"` for an unrecognised code.
    pub fn format_name(&self) -> &'static str {
        match PixelFormat::from_raw(self.format_code) {
            Some(format) => format.name(),
            None => "UnknownFormat",
        }
    }
}

/// A parsed container: header plus one descriptor per image table entry, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct TplFile {
    /// The container header.
    pub header: TplHeader,
    /// One descriptor per image table entry.
    pub descriptors: Vec<ImageDescriptor>,
}

/// Reads the 12-byte container header.
///
/// # Errors
///
/// - [`ContainerError::TruncatedRead`] if `data` is shorter than the header.
/// - [`ContainerError::InvalidMagic`] if the magic is not recognised.
pub fn parse_tpl_header(data: &[u8]) -> ContainerResult<TplHeader> {
    if data.len() < TPL_HEADER_SIZE {
        return Err(ContainerError::TruncatedRead {
            offset: 0,
            required: TPL_HEADER_SIZE,
            available: data.len(),
        });
    }

    // SAFETY: We checked data.len() >= TPL_HEADER_SIZE (12), so every field below is in bounds
    let (magic, image_count, image_table_offset) = unsafe {
        let mut reader = BigEndianReader::new(data.as_ptr());
        (
            reader.read_u32_at(0),
            reader.read_u32_at(IMAGE_COUNT_OFFSET as isize),
            reader.read_u32_at(IMAGE_TABLE_OFFSET_OFFSET as isize),
        )
    };

    let kind = ContainerKind::from_magic(magic).ok_or(ContainerError::InvalidMagic(magic))?;
    Ok(TplHeader {
        magic,
        kind,
        image_count,
        image_table_offset,
    })
}

/// Parses the container header, the image table and every image header.
///
/// # Returns
///
/// A [`TplFile`] with exactly `image_count` descriptors, in table order.
///
/// # Errors
///
/// - [`ContainerError::InvalidMagic`] if the magic is not recognised.
/// - [`ContainerError::TruncatedRead`] if the header, a table entry or an image header
///   extends past the end of `data`.
///
/// Format codes and dimensions are not checked here; see [`ImageDescriptor`].
pub fn parse_tpl(data: &[u8]) -> ContainerResult<TplFile> {
    let header = parse_tpl_header(data)?;
    let table_offset = header.image_table_offset as usize;

    // The count comes from the file; don't trust it for the allocation size.
    let max_entries = data.len().saturating_sub(table_offset) / IMAGE_TABLE_ENTRY_SIZE;
    let mut descriptors = Vec::with_capacity((header.image_count as usize).min(max_entries));

    let mut table = ByteCursor::at(data, table_offset);
    for index in 0..header.image_count as usize {
        let image_header_offset = table.read_u32()?;
        let palette_header_offset = table.read_u32()?;

        let mut descriptor = parse_image_header(data, image_header_offset)?;
        descriptor.index = index;
        descriptor.palette_header_offset = (palette_header_offset != 0).then_some(palette_header_offset);
        descriptors.push(descriptor);
    }

    Ok(TplFile {
        header,
        descriptors,
    })
}

/// Reads the image header at `offset`. `index` and `palette_header_offset` are left for the caller.
fn parse_image_header(data: &[u8], offset: u32) -> ContainerResult<ImageDescriptor> {
    let mut cursor = ByteCursor::at(data, offset as usize);
    if cursor.remaining() < IMAGE_HEADER_SIZE {
        return Err(ContainerError::TruncatedRead {
            offset: offset as usize,
            required: IMAGE_HEADER_SIZE,
            available: cursor.remaining(),
        });
    }

    let height = cursor.read_u16()?;
    let width = cursor.read_u16()?;
    let format_code = cursor.read_u32()?;
    let data_offset = cursor.read_u32()?;
    let sampler = SamplerParams {
        wrap_s: cursor.read_u32()?,
        wrap_t: cursor.read_u32()?,
        min_filter: cursor.read_u32()?,
        mag_filter: cursor.read_u32()?,
        lod_bias: cursor.read_f32()?,
        edge_lod_enable: cursor.read_u8()?,
        min_lod: cursor.read_u8()?,
        max_lod: cursor.read_u8()?,
    };
    cursor.skip(1)?;

    Ok(ImageDescriptor {
        index: 0,
        height,
        width,
        format_code,
        data_offset,
        image_header_offset: offset,
        palette_header_offset: None,
        sampler,
    })
}
