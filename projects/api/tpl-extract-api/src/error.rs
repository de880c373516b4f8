//! Error types for extraction.

use thiserror::Error;
use tpl_extract_formats::DecodeError;
use tpl_extract_tpl::ContainerError;

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur while extracting images from a container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Reading the container or locating an image failed
    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    /// Decoding the texels of an image failed
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The requested image is not in the image table
    #[error("Image index {index} out of range; container has {count} images")]
    ImageIndexOutOfRange { index: usize, count: usize },
}

impl ExtractError {
    /// Whether this error stops processing of the whole container.
    ///
    /// True for an unrecognised magic and for reads past the end of the header, image
    /// table or an image header. Everything else only affects a single image.
    pub fn is_container_fatal(&self) -> bool {
        matches!(
            self,
            Self::Container(ContainerError::InvalidMagic(_) | ContainerError::TruncatedRead { .. })
        )
    }

    /// Whether the image uses a format that is never decoded (palette formats).
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::Decode(DecodeError::UnsupportedPaletteFormat(_)))
    }
}
