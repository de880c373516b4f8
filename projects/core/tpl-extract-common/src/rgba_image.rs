//! Dense RGBA8888 raster produced by every texture decoder.

use crate::color_8888::Color8888;
use alloc::vec;
use alloc::vec::Vec;

/// A `height` x `width` grid of [`Color8888`] pixels stored row-major,
/// top-to-bottom and left-to-right.
///
/// A freshly created image is fully transparent black; decoders only overwrite
/// the pixels their source data covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    pixels: Vec<Color8888>,
}

impl RgbaImage {
    /// Creates an image of the given dimensions with every pixel set to [`Color8888::TRANSPARENT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tpl_extract_common::color_8888::Color8888;
    /// use tpl_extract_common::rgba_image::RgbaImage;
    ///
    /// let image = RgbaImage::new(3, 2);
    /// assert_eq!(image.pixels().len(), 6);
    /// assert!(image.pixels().iter().all(|p| *p == Color8888::TRANSPARENT));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color8888::TRANSPARENT; width as usize * height as usize],
        }
    }

    /// Width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Color8888] {
        &self.pixels
    }

    /// Returns the pixel at column `x`, row `y`, or [`None`] if outside the image.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color8888> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index_of(x, y)])
    }

    /// Writes `pixel` at column `x`, row `y`.
    ///
    /// Coordinates outside the image are ignored; this is the clipping applied to
    /// tiles and blocks that overhang the right or bottom edge.
    ///
    /// # Returns
    ///
    /// `true` if the pixel was written.
    #[inline]
    pub fn put_pixel_clipped(&mut self, x: u32, y: u32, pixel: Color8888) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = self.index_of(x, y);
        self.pixels[index] = pixel;
        true
    }

    /// Returns the image as tightly packed `RGBA` bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|pixel| pixel.to_array()).collect()
    }

    /// Consumes the image and returns the tightly packed `RGBA` bytes, row-major.
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        self.to_rgba_bytes()
    }

    #[inline(always)]
    fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
