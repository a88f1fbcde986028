use bytes::Bytes;

use crate::error::IoError;

/// Trait for reading byte ranges from a finite, random-access source.
///
/// The decoder never streams through a source sequentially; every read names
/// an absolute offset. This keeps cursor bookkeeping out of the
/// implementations, which only need to serve ranges and report a size.
pub trait RangeReader {
    /// Read exactly `len` bytes starting at `offset`.
    ///
    /// Returns an error if the range is out of bounds or if the read fails.
    fn read_exact_at(&mut self, offset: u64, len: usize) -> Result<Bytes, IoError>;

    /// Get the total size of the source in bytes.
    fn size(&self) -> u64;

    /// Get an identifier for this source (for logging).
    fn identifier(&self) -> &str;
}

impl<R: RangeReader + ?Sized> RangeReader for Box<R> {
    fn read_exact_at(&mut self, offset: u64, len: usize) -> Result<Bytes, IoError> {
        (**self).read_exact_at(offset, len)
    }

    fn size(&self) -> u64 {
        (**self).size()
    }

    fn identifier(&self) -> &str {
        (**self).identifier()
    }
}

/// Check that `len` bytes at `offset` fit inside a source of `size` bytes.
pub(crate) fn check_range(offset: u64, len: usize, size: u64) -> Result<(), IoError> {
    let fits = offset
        .checked_add(len as u64)
        .map(|end| end <= size)
        .unwrap_or(false);
    if fits {
        Ok(())
    } else {
        Err(IoError::RangeOutOfBounds {
            offset,
            requested: len as u64,
            size,
        })
    }
}

// =============================================================================
// Endian Helper Functions
// =============================================================================
//
// EXIF blocks can be either little-endian or big-endian, determined by the
// TIFF header's byte order marker. The cursor decodes every multi-byte field
// through these.

/// Read a little-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read a big-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Read a little-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a big-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
