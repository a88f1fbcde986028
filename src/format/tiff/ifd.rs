//! Image File Directory traversal.
//!
//! # IFD Structure
//!
//! ```text
//! Bytes 0-1:   Entry count N
//! Bytes 2-13:  Entry 0
//! ...
//! 12 bytes per entry:
//!   Bytes 0-1:  Tag ID
//!   Bytes 2-3:  Format code
//!   Bytes 4-7:  Component count
//!   Bytes 8-11: Value, or offset to the value relative to the TIFF header
//! ```
//!
//! The 4-byte next-IFD offset that follows the entries is not read.

use tracing::{debug, trace};

use super::parser::TiffHeader;
use super::tags::{FieldType, TAG_EXIF_IFD_POINTER, TAG_GPS_IFD_POINTER};
use super::values::{resolve_value, TagValue};
use crate::error::{ExifError, IoError};
use crate::io::{ByteCursor, RangeReader};

/// Size of one IFD entry in bytes
pub const IFD_ENTRY_SIZE: u64 = 12;

// =============================================================================
// TagEntry
// =============================================================================

/// One raw 12-byte directory entry, decoded under the block's byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: u16,
    /// Raw format code; may be outside the known [`FieldType`] table
    pub format: u16,
    pub count: u32,
    /// Inline value or header-relative offset
    pub value_offset: u32,
}

impl TagEntry {
    pub fn read<R: RangeReader>(cursor: &mut ByteCursor<R>) -> Result<Self, IoError> {
        Ok(TagEntry {
            tag: cursor.read_u16()?,
            format: cursor.read_u16()?,
            count: cursor.read_u32()?,
            value_offset: cursor.read_u32()?,
        })
    }

    pub fn field_type(&self) -> Option<FieldType> {
        FieldType::from_u16(self.format)
    }

    /// Total value size in bytes: count times component size.
    #[inline]
    pub fn value_size(&self) -> u64 {
        self.count as u64 * FieldType::component_size(self.format) as u64
    }
}

// =============================================================================
// Sub-IFD Pointers
// =============================================================================

/// Absolute stream positions of the sub-directories referenced from a
/// directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubIfdPointers {
    pub exif: Option<u64>,
    pub gps: Option<u64>,
}

impl SubIfdPointers {
    fn record(&mut self, entry: &TagEntry, header: &TiffHeader) {
        let slot = match entry.tag {
            TAG_EXIF_IFD_POINTER => &mut self.exif,
            TAG_GPS_IFD_POINTER => &mut self.gps,
            _ => return,
        };
        let position = header.absolute(entry.value_offset);
        debug!(tag = entry.tag, position, "Recorded sub-IFD pointer");
        *slot = Some(position);
    }

    /// Recorded positions in walk order: Exif first, then GPS.
    pub fn iter(&self) -> impl Iterator<Item = u64> {
        self.exif.into_iter().chain(self.gps)
    }
}

// =============================================================================
// IfdWalker
// =============================================================================

/// Step-wise reader over the entries of one directory.
///
/// The walker does not own the cursor; each step borrows it. Between steps
/// the cursor always sits at the start of the next unread entry.
#[derive(Debug, Clone)]
pub struct IfdWalker {
    entry_count: u16,
    next_index: u16,
    pointers: SubIfdPointers,
}

impl IfdWalker {
    /// Read the entry count of the directory at the cursor.
    pub fn start<R: RangeReader>(cursor: &mut ByteCursor<R>) -> Result<Self, ExifError> {
        let position = cursor.position();
        let entry_count = cursor.read_u16()?;
        debug!(position, entry_count, "Walking IFD");
        Ok(IfdWalker {
            entry_count,
            next_index: 0,
            pointers: SubIfdPointers::default(),
        })
    }

    pub fn entry_count(&self) -> u16 {
        self.entry_count
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_index >= self.entry_count
    }

    pub fn pointers(&self) -> SubIfdPointers {
        self.pointers
    }

    /// Read and resolve the next entry, or `None` once all `N` are consumed.
    pub fn next_tag<R: RangeReader>(
        &mut self,
        cursor: &mut ByteCursor<R>,
        header: &TiffHeader,
    ) -> Result<Option<(u16, TagValue)>, ExifError> {
        if self.is_exhausted() {
            return Ok(None);
        }

        let entry = TagEntry::read(cursor)?;
        let value = resolve_value(cursor, &entry, header)?;
        self.next_index += 1;

        trace!(
            tag = entry.tag,
            format = entry.format,
            count = entry.count,
            "Resolved tag"
        );

        self.pointers.record(&entry, header);

        Ok(Some((entry.tag, value)))
    }
}

// =============================================================================
// Tests
// =============================================================================
