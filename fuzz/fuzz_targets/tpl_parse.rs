#![no_main]

// Arbitrary bytes through the container parser, extent resolver and full extraction.
// None of these may panic; every failure must come back as an error value.

use libfuzzer_sys::fuzz_target;
use tpl_extract_tpl::{likely_tpl, parse_tpl, resolve_extents};

fuzz_target!(|data: &[u8]| {
    let Ok(file) = parse_tpl(data) else {
        return;
    };

    // A successfully parsed container always starts with a recognised magic.
    assert!(likely_tpl(data));
    assert_eq!(file.descriptors.len(), file.header.image_count as usize);

    for extent in resolve_extents(&file.descriptors, data.len()).into_iter().flatten() {
        assert!(extent.end <= data.len());
    }

    // Keep dimensions small enough that decoding stays fast.
    let small = file
        .descriptors
        .iter()
        .all(|d| (d.height as usize) * (d.width as usize) <= 1 << 16);
    if small {
        if let Ok(images) = tpl_extract_api::extract_images(data) {
            for image in images {
                if let Ok(raster) = image.result {
                    assert_eq!(raster.width(), image.descriptor.width as u32);
                    assert_eq!(raster.height(), image.descriptor.height as u32);
                }
            }
        }
    }
});
