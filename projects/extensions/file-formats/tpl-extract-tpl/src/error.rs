//! Error types for container parsing.

use thiserror::Error;

/// Result type for container operations
pub type ContainerResult<T> = Result<T, ContainerError>;

/// Errors raised while reading a TPL container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The first four bytes are neither the standard nor the extended magic.
    #[error("Invalid TPL magic: {0:#010x}")]
    InvalidMagic(u32),

    /// A fixed-size field extends past the end of the data.
    #[error("Truncated read at offset {offset:#x}: needed {required} bytes, {available} available")]
    TruncatedRead {
        /// Offset the read started at.
        offset: usize,
        /// Bytes the field needs.
        required: usize,
        /// Bytes remaining from `offset` to the end of the data.
        available: usize,
    },

    /// The image header declares a format code outside the known set.
    #[error("Unknown pixel format code: {0:#x}")]
    UnknownPixelFormat(u32),

    /// The image header declares a zero height or width.
    #[error("Invalid image dimensions: {height}x{width} (height x width)")]
    InvalidDimensions {
        /// Declared height.
        height: u16,
        /// Declared width.
        width: u16,
    },

    /// The texel range of an image is reversed or lies outside the file.
    #[error("Malformed extent for image {index}: {start:#x}..{end:#x}")]
    MalformedExtent {
        /// Zero-based position of the image in the table.
        index: usize,
        /// Start of the range (the image's data offset).
        start: usize,
        /// End of the range (next image's data offset, or the file length).
        end: usize,
    },
}
