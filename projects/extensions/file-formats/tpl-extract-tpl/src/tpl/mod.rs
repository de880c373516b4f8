/// Magic values and fixed structure sizes.
pub mod constants;

/// Resolve the texel byte range of each image.
pub mod extents;

/// Determine if a file is a TPL container.
pub mod likely_tpl;

/// Parse the header, image table and image headers.
pub mod parse_tpl;

pub use extents::*;
pub use likely_tpl::*;
pub use parse_tpl::*;
