//! Bounds-checked big-endian reads over an in-memory buffer.
//!
//! Every read checks the remaining length first and fails with
//! [`ContainerError::TruncatedRead`] instead of reading past the end.

use crate::error::{ContainerError, ContainerResult};
use endian_writer::{BigEndianReader, EndianReader};

/// A read position over a borrowed byte slice. All multi-byte values are big-endian.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at offset 0 of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Creates a cursor at `offset`. The offset itself is not validated until the next read.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            position: offset,
        }
    }

    /// Current read offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the read offset to `offset`.
    #[inline]
    pub fn seek(&mut self, offset: usize) {
        self.position = offset;
    }

    /// Bytes left between the read offset and the end of the data.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Returns the next `len` bytes and advances past them.
    pub fn read_bytes(&mut self, len: usize) -> ContainerResult<&'a [u8]> {
        self.ensure(len)?;
        let bytes = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    /// Advances past `len` bytes, which must exist.
    pub fn skip(&mut self, len: usize) -> ContainerResult<()> {
        self.read_bytes(len).map(|_| ())
    }

    /// Reads one byte.
    pub fn read_u8(&mut self) -> ContainerResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> ContainerResult<u16> {
        self.read_array().map(u16::from_be_bytes)
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32(&mut self) -> ContainerResult<u32> {
        self.ensure(4)?;

        // SAFETY: ensure() checked that 4 bytes are available at `position`.
        let value = unsafe {
            let mut reader = BigEndianReader::new(self.data.as_ptr().add(self.position));
            reader.read_u32_at(0)
        };
        self.position += 4;
        Ok(value)
    }

    /// Reads a big-endian IEEE 754 `f32`.
    pub fn read_f32(&mut self) -> ContainerResult<f32> {
        self.read_u32().map(f32::from_bits)
    }

    fn read_array<const N: usize>(&mut self) -> ContainerResult<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    fn ensure(&self, required: usize) -> ContainerResult<()> {
        let available = self.remaining();
        if available < required {
            return Err(ContainerError::TruncatedRead {
                offset: self.position,
                required,
                available,
            });
        }
        Ok(())
    }
}
