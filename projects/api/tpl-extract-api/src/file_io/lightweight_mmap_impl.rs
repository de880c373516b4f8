//! File I/O implementation using lightweight-mmap.

use crate::api::{extract_images, ExtractedImage};
use crate::file_io::FileOperationResult;
use alloc::vec::Vec;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Memory-maps the file at `path` and passes its contents to `f`.
///
/// An empty file is passed as an empty slice without being mapped.
pub fn with_file_contents<R>(path: &Path, f: impl FnOnce(&[u8]) -> R) -> FileOperationResult<R> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return Ok(f(&[]));
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    Ok(f(mapping.as_slice()))
}

/// Extracts every image of the container file at `path`.
///
/// See [`extract_images`] for how failures are reported.
pub fn extract_file(path: &Path) -> FileOperationResult<Vec<ExtractedImage>> {
    let images = with_file_contents(path, extract_images)??;
    Ok(images)
}
