//! The closed set of pixel formats a TPL image may declare.

use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// Width and height of the rectangular group of texels stored contiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileShape {
    /// Tile width in pixels.
    pub width: u32,
    /// Tile height in pixels.
    pub height: u32,
}

impl TileShape {
    /// Creates a new [`TileShape`].
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of texels inside one tile.
    #[inline]
    pub const fn texel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Pixel format of a single texture, as stored in the `format` field of its image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum PixelFormat {
    /// 4-bit intensity, 8x8 tiles.
    I4 = 0x00,
    /// 8-bit intensity, 8x4 tiles.
    I8 = 0x01,
    /// 4-bit alpha + 4-bit intensity, 8x4 tiles.
    IA4 = 0x02,
    /// 8-bit alpha + 8-bit intensity, 4x4 tiles.
    IA8 = 0x03,
    /// 16-bit RGB565, 4x4 tiles.
    RGB565 = 0x04,
    /// 16-bit RGB555 or ARGB4444 (selected per texel), 4x4 tiles.
    RGB5A3 = 0x05,
    /// 32-bit RGBA, 4x4 tiles.
    RGBA32 = 0x06,
    /// 4-bit palette index. Needs an external palette.
    C4 = 0x08,
    /// 8-bit palette index. Needs an external palette.
    C8 = 0x09,
    /// 14-bit palette index in 16 bits. Needs an external palette.
    C14X2 = 0x0A,
    /// 4x4 block compression, grouped into 8x8 macro-tiles. a.k.a. CMPR.
    CompressedBlock = 0x0E,
}

impl PixelFormat {
    /// Maps the raw `format` field of an image header to a [`PixelFormat`].
    ///
    /// # Returns
    ///
    /// [`None`] if the value is not a recognised format code.
    pub const fn from_raw(value: u32) -> Option<Self> {
        Some(match value {
            0x00 => Self::I4,
            0x01 => Self::I8,
            0x02 => Self::IA4,
            0x03 => Self::IA8,
            0x04 => Self::RGB565,
            0x05 => Self::RGB5A3,
            0x06 => Self::RGBA32,
            0x08 => Self::C4,
            0x09 => Self::C8,
            0x0A => Self::C14X2,
            0x0E => Self::CompressedBlock,
            _ => return None,
        })
    }

    /// The raw format code stored in image headers.
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// The conventional short name of the format.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I4 => "I4",
            Self::I8 => "I8",
            Self::IA4 => "IA4",
            Self::IA8 => "IA8",
            Self::RGB565 => "RGB565",
            Self::RGB5A3 => "RGB5A3",
            Self::RGBA32 => "RGBA32",
            Self::C4 => "C4",
            Self::C8 => "C8",
            Self::C14X2 => "C14X2",
            Self::CompressedBlock => "CMPR",
        }
    }

    /// Whether texels are indices into a colour table rather than colours.
    #[inline]
    pub const fn is_palette(self) -> bool {
        matches!(self, Self::C4 | Self::C8 | Self::C14X2)
    }

    /// Storage cost of one texel, in bits.
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::I4 | Self::C4 | Self::CompressedBlock => 4,
            Self::I8 | Self::IA4 | Self::C8 => 8,
            Self::IA8 | Self::RGB565 | Self::RGB5A3 | Self::C14X2 => 16,
            Self::RGBA32 => 32,
        }
    }

    /// The tile the texels are grouped into.
    ///
    /// For [`PixelFormat::CompressedBlock`] this is the 8x8 macro-tile made of four 4x4 sub-blocks.
    pub const fn tile_shape(self) -> TileShape {
        match self {
            Self::I4 | Self::C4 | Self::CompressedBlock => TileShape::new(8, 8),
            Self::I8 | Self::IA4 | Self::C8 => TileShape::new(8, 4),
            Self::IA8 | Self::RGB565 | Self::RGB5A3 | Self::RGBA32 | Self::C14X2 => {
                TileShape::new(4, 4)
            }
        }
    }

    /// Number of bytes one tile occupies in the texel stream.
    #[inline]
    pub const fn bytes_per_tile(self) -> usize {
        self.tile_shape().texel_count() * self.bits_per_pixel() as usize / 8
    }

    /// Minimum texel buffer length needed to decode an image of `height` x `width` pixels.
    ///
    /// Tiled formats round both dimensions up to whole tiles. The block-compressed format
    /// only stores whole 8x8 macro-tiles, so its dimensions are rounded down instead; any
    /// remainder rows and columns are never decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use tpl_extract_formats::pixel_format::PixelFormat;
    ///
    /// // Height 9, width 12 in I8 (8x4 tiles): 2 tiles wide, 3 tiles high, 32 bytes each.
    /// assert_eq!(PixelFormat::I8.required_len(9, 12), 2 * 3 * 32);
    /// // Height 12, width 20 in CMPR: 1 row of 2 whole macro-tiles, 32 bytes each.
    /// assert_eq!(PixelFormat::CompressedBlock.required_len(12, 20), 2 * 32);
    /// ```
    pub fn required_len(self, height: u32, width: u32) -> usize {
        let shape = self.tile_shape();
        let (tiles_x, tiles_y) = match self {
            Self::CompressedBlock => (width / shape.width, height / shape.height),
            _ => (
                width.div_ceil(shape.width),
                height.div_ceil(shape.height),
            ),
        };

        (tiles_x as usize)
            .saturating_mul(tiles_y as usize)
            .saturating_mul(self.bytes_per_tile())
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a known [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown pixel format name")]
pub struct UnknownPixelFormatName;

impl FromStr for PixelFormat {
    type Err = UnknownPixelFormatName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownPixelFormatName)
    }
}
