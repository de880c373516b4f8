//! Container bytes to decoded images.

use crate::error::{ExtractError, ExtractResult};
use alloc::vec::Vec;
use tpl_extract_common::rgba_image::RgbaImage;
use tpl_extract_formats::decode_texels;
use tpl_extract_tpl::{parse_tpl, texel_bytes, ImageDescriptor};
use tracing::{debug, warn};

/// Outcome of decoding one image of a container.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedImage {
    /// Zero-based position in the image table.
    pub index: usize,
    /// The image header as read from the container.
    pub descriptor: ImageDescriptor,
    /// The decoded raster, or why this image could not be decoded.
    pub result: ExtractResult<RgbaImage>,
}

/// The undecoded texel bytes of one image.
#[derive(Debug, Clone, PartialEq)]
pub struct RawExtent<'a> {
    /// Zero-based position in the image table.
    pub index: usize,
    /// The image header as read from the container.
    pub descriptor: ImageDescriptor,
    /// The texel bytes, or why they could not be located.
    pub data: ExtractResult<&'a [u8]>,
}

/// Parses a container and decodes every image in it.
///
/// # Parameters
///
/// - `data`: The whole container file
///
/// # Returns
///
/// One [`ExtractedImage`] per image table entry, in table order. Images that fail to
/// decode carry their error in [`ExtractedImage::result`]; they do not stop the others.
///
/// # Errors
///
/// Fails as a whole only if the container header, image table or an image header cannot
/// be read (see [`ExtractError::is_container_fatal`]).
pub fn extract_images(data: &[u8]) -> ExtractResult<Vec<ExtractedImage>> {
    let file = parse_tpl(data)?;
    debug!(
        kind = file.header.kind.name(),
        image_count = file.header.image_count,
        image_table_offset = file.header.image_table_offset,
        "Parsed TPL header"
    );

    let images = file
        .descriptors
        .iter()
        .map(|descriptor| {
            let result = extract_image(data, &file.descriptors, descriptor.index);
            if let Err(error) = &result {
                warn!(index = descriptor.index, format = descriptor.format_name(), %error, "Failed to extract image");
            }

            ExtractedImage {
                index: descriptor.index,
                descriptor: *descriptor,
                result,
            }
        })
        .collect();

    Ok(images)
}

/// Decodes a single image of an already parsed container.
///
/// # Parameters
///
/// - `data`: The whole container file the descriptors were parsed from
/// - `descriptors`: Every descriptor of the container, in table order (needed to find where
///   the image's data ends)
/// - `index`: Zero-based index of the image to decode
///
/// # Errors
///
/// - [`ExtractError::ImageIndexOutOfRange`] if `index` is not in `descriptors`.
/// - [`ExtractError::Container`] for an unknown format, zero dimensions or a malformed extent.
/// - [`ExtractError::Decode`] for palette formats or a texel buffer that is too small.
pub fn extract_image(
    data: &[u8],
    descriptors: &[ImageDescriptor],
    index: usize,
) -> ExtractResult<RgbaImage> {
    let descriptor = descriptors
        .get(index)
        .ok_or(ExtractError::ImageIndexOutOfRange {
            index,
            count: descriptors.len(),
        })?;

    describe(descriptor);
    let format = descriptor.pixel_format()?;
    descriptor.validate_dimensions()?;
    let texels = texel_bytes(data, descriptors, index)?;

    Ok(decode_texels(
        format,
        texels,
        descriptor.height as u32,
        descriptor.width as u32,
    )?)
}

/// Parses a container and locates the texel bytes of every image without decoding them.
///
/// # Errors
///
/// Same container-level failures as [`extract_images`]. A malformed extent only fails its own entry.
pub fn raw_extents(data: &[u8]) -> ExtractResult<Vec<RawExtent<'_>>> {
    let file = parse_tpl(data)?;

    Ok(file
        .descriptors
        .iter()
        .map(|descriptor| RawExtent {
            index: descriptor.index,
            descriptor: *descriptor,
            data: texel_bytes(data, &file.descriptors, descriptor.index).map_err(ExtractError::from),
        })
        .collect())
}

fn describe(descriptor: &ImageDescriptor) {
    debug!(
        index = descriptor.index,
        height = descriptor.height,
        width = descriptor.width,
        format = descriptor.format_name(),
        data_offset = descriptor.data_offset,
        "Decoding image"
    );

    if let Some(palette_offset) = descriptor.palette_header_offset {
        debug!(
            index = descriptor.index,
            palette_offset, "Palette header recorded but not followed"
        );
    }
}
