//! Error types for texel decoding.

use crate::pixel_format::PixelFormat;
use thiserror::Error;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a single image's texel buffer.
///
/// None of these are transient; retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The texel buffer is shorter than the format's tile arithmetic requires
    #[error("{format} texel buffer too small: required {required} bytes, got {actual} bytes")]
    BufferTooSmall {
        /// Format the buffer was decoded as.
        format: PixelFormat,
        /// Bytes needed to cover every tile.
        required: usize,
        /// Bytes available.
        actual: usize,
    },

    /// Indexed-colour formats need a colour table which is not decoded
    #[error("{0} is an indexed-colour format; palette formats are not supported")]
    UnsupportedPaletteFormat(PixelFormat),
}
