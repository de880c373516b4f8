#![no_main]

// Checks the CMPR sub-block decoder against the palette rules it must follow.

use libfuzzer_sys::{arbitrary, fuzz_target};
use tpl_extract_formats::cmpr::{cmpr_palette, decode_cmpr_block};
use tpl_extract_formats::Color8888;
use tpl_extract_common::color_565::Color565;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct CmprBlock {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: CmprBlock| {
    let bytes = &block.bytes;
    let c0 = Color565::from_be_bytes([bytes[0], bytes[1]]);
    let c1 = Color565::from_be_bytes([bytes[2], bytes[3]]);
    let palette = cmpr_palette(c0, c1);
    let decoded = decode_cmpr_block(bytes);

    if c0.raw_value() > c1.raw_value() {
        assert!(palette.iter().all(|c| c.a == 255));
    } else {
        assert_eq!(palette[3], Color8888::TRANSPARENT);
    }

    for y in 0..4 {
        let row = bytes[4 + y];
        for x in 0..4 {
            let index = (row >> (6 - 2 * x)) & 0x3;
            assert_eq!(decoded.get_pixel(x, y), palette[index as usize]);
        }
    }
});
