use super::constants::*;

/// Determines if the given data likely represents a TPL container.
/// This is done by checking for one of the two known magics at offset 0 and the header size.
/// For full validation of the header and image table, use [`parse_tpl`].
///
/// [`parse_tpl`]: crate::tpl::parse_tpl::parse_tpl
#[inline(always)]
pub fn likely_tpl(data: &[u8]) -> bool {
    data.len() >= TPL_HEADER_SIZE
        && matches!(
            u32::from_be_bytes([data[0], data[1], data[2], data[3]]),
            TPL_MAGIC | TPLX_MAGIC
        )
}
