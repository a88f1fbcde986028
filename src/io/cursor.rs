//! Positioned, endianness-aware reads over a [`RangeReader`].

use bytes::Bytes;

use super::range_reader::RangeReader;
use crate::error::IoError;
use crate::format::tiff::ByteOrder;

/// A logical read position plus a decoding mode over a byte source.
///
/// JPEG markers are big-endian, so a cursor starts out big-endian and is
/// switched once, after the TIFF byte order marker has been read. The
/// position is tracked here rather than in the source, which makes saving
/// and restoring it infallible.
#[derive(Debug)]
pub struct ByteCursor<R> {
    reader: R,
    position: u64,
    byte_order: ByteOrder,
}

impl<R> ByteCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
            byte_order: ByteOrder::BigEndian,
        }
    }

    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }
}

impl<R: RangeReader> ByteCursor<R> {
    pub fn size(&self) -> u64 {
        self.reader.size()
    }

    pub fn identifier(&self) -> &str {
        self.reader.identifier()
    }

    /// Move to an absolute offset. Seeking exactly to the end is allowed.
    pub fn seek(&mut self, offset: u64) -> Result<(), IoError> {
        let size = self.reader.size();
        if offset > size {
            return Err(IoError::SeekOutOfBounds { offset, size });
        }
        self.position = offset;
        Ok(())
    }

    /// Advance past `len` bytes without reading them.
    pub fn skip(&mut self, len: u64) -> Result<(), IoError> {
        let target = self.position.saturating_add(len);
        self.seek(target)
    }

    /// Step back `len` bytes.
    pub fn rewind(&mut self, len: u64) -> Result<(), IoError> {
        let target = self
            .position
            .checked_sub(len)
            .ok_or(IoError::SeekOutOfBounds {
                offset: 0,
                size: self.reader.size(),
            })?;
        self.seek(target)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, IoError> {
        let bytes = self.reader.read_exact_at(self.position, len)?;
        self.position += len as u64;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], IoError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes);
        Ok(out)
    }

    pub fn read_u16(&mut self) -> Result<u16, IoError> {
        let bytes = self.read_array::<2>()?;
        Ok(self.byte_order.read_u16(&bytes))
    }

    pub fn read_u32(&mut self) -> Result<u32, IoError> {
        let bytes = self.read_array::<4>()?;
        Ok(self.byte_order.read_u32(&bytes))
    }

    /// Run `f` and put the cursor back where it was, whether `f` succeeded
    /// or not.
    pub fn with_saved_position<T, E>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E> {
        let saved = self.position;
        let result = f(self);
        self.position = saved;
        result
    }
}
