//! Tag value resolution.
//!
//! A value is either stored inline in the 4-byte value field of its IFD
//! entry, or (when it needs more than 4 bytes) somewhere else in the TIFF
//! block, at an offset given by that same field.
//!
//! # Resolution Policy
//!
//! | computed size | format / tag               | value                          |
//! |---------------|----------------------------|--------------------------------|
//! | `<= 4`        | UNDEFINED, ASCII, tag 0    | the 4 raw bytes of the field   |
//! | `<= 4`        | anything else              | the field as a `u32`           |
//! | `> 4`         | ASCII                      | bytes at offset, padding trimmed |
//! | `> 4`         | anything else              | bytes at offset                |

use std::fmt;

use bytes::Bytes;
use tracing::trace;

use super::ifd::TagEntry;
use super::parser::TiffHeader;
use super::tags::FieldType;
use crate::error::{ExifError, IoError};
use crate::io::{ByteCursor, RangeReader};

// =============================================================================
// TagValue
// =============================================================================

/// Decoded value of one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// Inline value field read as an integer under the block's byte order
    Integer(u32),
    /// Raw bytes, either the inline field or an offset-indirect blob
    Bytes(Bytes),
    /// Offset-indirect ASCII with trailing whitespace and NUL removed
    Text(String),
}

impl TagValue {
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            TagValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TagValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Integer(value) => write!(f, "{}", value),
            TagValue::Bytes(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            TagValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for TagValue {
    fn from(value: u32) -> Self {
        TagValue::Integer(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Whether an inline value keeps its raw byte representation.
#[inline]
fn keeps_raw_bytes(entry: &TagEntry) -> bool {
    entry.format == FieldType::Undefined as u16
        || entry.format == FieldType::Ascii as u16
        || entry.tag == 0x0000
}

/// Remove trailing ASCII whitespace and NUL padding.
fn trim_ascii_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x00))
        .map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Resolve the value of an entry that has just been read.
///
/// The cursor must sit immediately after the entry's 12 bytes; it is left
/// there on return, including when an offset-indirect read fails.
pub fn resolve_value<R: RangeReader>(
    cursor: &mut ByteCursor<R>,
    entry: &TagEntry,
    header: &TiffHeader,
) -> Result<TagValue, ExifError> {
    let size = entry.value_size();

    if size <= FieldType::INLINE_THRESHOLD {
        if keeps_raw_bytes(entry) {
            // The field was already consumed as a u32; step back over it
            cursor.rewind(4)?;
            let raw = cursor.read_bytes(4)?;
            return Ok(TagValue::Bytes(raw));
        }
        return Ok(TagValue::Integer(entry.value_offset));
    }

    let target = header.absolute(entry.value_offset);
    trace!(tag = entry.tag, size, target, "Reading offset-indirect value");

    let bytes = cursor.with_saved_position(|cursor| -> Result<Bytes, ExifError> {
        cursor.seek(target)?;
        let len = usize::try_from(size).map_err(|_| IoError::RangeOutOfBounds {
            offset: target,
            requested: size,
            size: cursor.size(),
        })?;
        Ok(cursor.read_bytes(len)?)
    })?;

    if entry.format == FieldType::Ascii as u16 {
        let text = String::from_utf8_lossy(trim_ascii_padding(&bytes)).into_owned();
        return Ok(TagValue::Text(text));
    }

    Ok(TagValue::Bytes(bytes))
}

// =============================================================================
// Tests
// =============================================================================
