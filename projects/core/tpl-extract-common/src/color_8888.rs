/// Represents a single RGBA8888 pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Fully transparent black; the value of every pixel no texel has been written to.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// Each parameter represents the intensity of its corresponding colour channel (0–255).
    ///
    /// # Examples
    ///
    /// ```
    /// use tpl_extract_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a grey pixel where red, green and blue all carry `intensity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tpl_extract_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::from_intensity(0x80, 255);
    /// assert_eq!(pixel, Color8888::new(0x80, 0x80, 0x80, 255));
    /// ```
    #[inline]
    pub const fn from_intensity(intensity: u8, alpha: u8) -> Self {
        Self::new(intensity, intensity, intensity, alpha)
    }

    /// Returns the pixel as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color8888 {
    #[inline]
    fn from(value: [u8; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}
