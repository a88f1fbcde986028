//! TIFF header parsing.
//!
//! The TIFF block embedded in an EXIF APP1 segment starts with a classic
//! 8-byte TIFF header. Every offset inside the block is relative to the
//! first byte of this header.
//!
//! # TIFF Header Structure
//!
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 2-3: Version (42 = 0x002A, not validated)
//! Bytes 4-7: Offset to first IFD, relative to byte 0
//! ```

use tracing::debug;

use crate::error::{ExifError, MalformedInput};
use crate::io::{read_u16_be, read_u16_le, read_u32_be, read_u32_le, ByteCursor, RangeReader};

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

/// Size of the TIFF header in bytes
pub const TIFF_HEADER_SIZE: usize = 8;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of a TIFF block.
///
/// TIFF blocks declare their byte order in the first two bytes of the header.
/// All multi-byte values in the block must be read respecting this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Map a TIFF byte order marker to a byte order.
    ///
    /// Both valid markers are byte-palindromes, so the marker can be read in
    /// either order before the block's own byte order is known.
    pub fn from_marker(marker: u16) -> Result<Self, MalformedInput> {
        match marker {
            BYTE_ORDER_LITTLE_ENDIAN => Ok(ByteOrder::LittleEndian),
            BYTE_ORDER_BIG_ENDIAN => Ok(ByteOrder::BigEndian),
            other => Err(MalformedInput::UnknownByteOrder(other)),
        }
    }

    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "little-endian (II)",
            ByteOrder::BigEndian => "big-endian (MM)",
        }
    }
}

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed TIFF header of an EXIF block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the block
    pub byte_order: ByteOrder,

    /// Absolute stream position of the byte order marker. Every offset in
    /// the block is relative to this.
    pub header_offset: u64,

    /// Offset to IFD0, relative to `header_offset`
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Read the header at the cursor's current position.
    ///
    /// Switches the cursor to the block's byte order and leaves it just past
    /// the 8-byte header.
    ///
    /// # Errors
    /// - `MalformedInput::UnknownByteOrder` if the marker is not II or MM
    /// - `IoError` if the source ends inside the header
    pub fn read<R: RangeReader>(cursor: &mut ByteCursor<R>) -> Result<Self, ExifError> {
        let header_offset = cursor.position();

        let byte_order = ByteOrder::from_marker(cursor.read_u16()?)?;
        cursor.set_byte_order(byte_order);

        // Version 42; not checked
        cursor.skip(2)?;

        let first_ifd_offset = cursor.read_u32()?;

        debug!(
            byte_order = byte_order.name(),
            header_offset, first_ifd_offset, "Decoded TIFF header"
        );

        Ok(TiffHeader {
            byte_order,
            header_offset,
            first_ifd_offset,
        })
    }

    /// Absolute stream position of a header-relative offset.
    #[inline]
    pub fn absolute(&self, relative: u32) -> u64 {
        self.header_offset + relative as u64
    }

    /// Absolute stream position of IFD0.
    #[inline]
    pub fn first_ifd_position(&self) -> u64 {
        self.absolute(self.first_ifd_offset)
    }
}

// =============================================================================
// Tests
// =============================================================================
