//! TPL format constants and definitions

/// Magic of a standard TPL container.
pub const TPL_MAGIC: u32 = 0x0020_AF30;

/// Magic of an extended (`TPLx`) container.
pub const TPLX_MAGIC: u32 = 0x5450_4C78;

/// Size of the container header: magic, image count, image table offset.
pub const TPL_HEADER_SIZE: usize = 12;

/// Size of one image table entry: image header offset, palette header offset.
pub const IMAGE_TABLE_ENTRY_SIZE: usize = 8;

/// Size of one image header, including the trailing pad byte.
pub const IMAGE_HEADER_SIZE: usize = 36;

pub(crate) const IMAGE_COUNT_OFFSET: usize = 0x04;
pub(crate) const IMAGE_TABLE_OFFSET_OFFSET: usize = 0x08;
