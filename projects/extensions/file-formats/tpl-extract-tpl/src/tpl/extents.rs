//! Texel byte ranges.
//!
//! The data of image `i` runs from its own data offset to the data offset of image `i + 1`,
//! or to the end of the file for the last image. This relies on table order matching
//! ascending data offsets; ranges that come out reversed or past the end of the file are
//! reported as [`ContainerError::MalformedExtent`] instead of being sliced.

use super::parse_tpl::ImageDescriptor;
use crate::error::{ContainerError, ContainerResult};
use alloc::vec::Vec;
use core::ops::Range;

/// Resolves the texel byte range of `descriptors[index]` within a file of `file_len` bytes.
///
/// # Errors
///
/// [`ContainerError::MalformedExtent`] if the range starts after it ends, or ends past `file_len`.
///
/// # Panics
///
/// If `index` is out of bounds for `descriptors`.
pub fn resolve_extent(
    descriptors: &[ImageDescriptor],
    index: usize,
    file_len: usize,
) -> ContainerResult<Range<usize>> {
    let start = descriptors[index].data_offset as usize;
    let end = match descriptors.get(index + 1) {
        Some(next) => next.data_offset as usize,
        None => file_len,
    };

    if start > end || end > file_len {
        return Err(ContainerError::MalformedExtent { index, start, end });
    }
    Ok(start..end)
}

/// Resolves the texel byte range of every descriptor, in table order.
///
/// A malformed range only affects its own entry.
pub fn resolve_extents(
    descriptors: &[ImageDescriptor],
    file_len: usize,
) -> Vec<ContainerResult<Range<usize>>> {
    (0..descriptors.len())
        .map(|index| resolve_extent(descriptors, index, file_len))
        .collect()
}

/// Returns the texel bytes of `descriptors[index]` within `data`.
///
/// # Errors
///
/// See [`resolve_extent`].
pub fn texel_bytes<'a>(
    data: &'a [u8],
    descriptors: &[ImageDescriptor],
    index: usize,
) -> ContainerResult<&'a [u8]> {
    let range = resolve_extent(descriptors, index, data.len())?;
    Ok(&data[range])
}
