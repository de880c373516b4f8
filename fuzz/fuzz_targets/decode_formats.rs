#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use tpl_extract_formats::{decode_texels, DecodeError, PixelFormat};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct DecodeInput {
    pub format_code: u8,
    pub height: u8,
    pub width: u8,
    pub data: Vec<u8>,
}

// Any (format, dimensions, bytes) must either decode to exactly height x width pixels
// or fail with an error; never panic or read past the buffer.
fuzz_target!(|input: DecodeInput| {
    let Some(format) = PixelFormat::from_raw(input.format_code as u32) else {
        return;
    };
    let (height, width) = (input.height as u32, input.width as u32);

    match decode_texels(format, &input.data, height, width) {
        Ok(image) => {
            assert!(!format.is_palette());
            assert!(input.data.len() >= format.required_len(height, width));
            assert_eq!(image.pixels().len(), (height * width) as usize);
        }
        Err(DecodeError::UnsupportedPaletteFormat(f)) => {
            assert!(f.is_palette());
        }
        Err(DecodeError::BufferTooSmall { required, actual, .. }) => {
            assert!(actual < required);
        }
    }
});
