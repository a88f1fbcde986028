//! TIFF structures embedded in an EXIF APP1 segment.
//!
//! # Key Concepts
//!
//! - **Byte order**: the block declares its endianness (II = little-endian,
//!   MM = big-endian) in its first two bytes. All multi-byte values after
//!   that are read respecting this order.
//!
//! - **Relative offsets**: every offset stored in the block counts from the
//!   first byte of the TIFF header, not from the start of the JPEG stream.
//!
//! - **Inline vs offset values**: values of up to 4 bytes are stored inline
//!   in the IFD entry, larger values are stored at an offset pointed to by
//!   the entry.

mod ifd;
mod parser;
mod tags;
mod values;

pub use ifd::{IfdWalker, SubIfdPointers, TagEntry, IFD_ENTRY_SIZE};
pub use parser::{ByteOrder, TiffHeader, TIFF_HEADER_SIZE};
pub use tags::{
    tag_name, FieldType, TAG_ARTIST, TAG_COPYRIGHT, TAG_DATE_TIME, TAG_EXIF_IFD_POINTER,
    TAG_GPS_IFD_POINTER, TAG_IMAGE_DESCRIPTION, TAG_IMAGE_MAKE, TAG_IMAGE_MODEL,
    TAG_ORIENTATION, TAG_RESOLUTION_UNIT, TAG_SOFTWARE, TAG_X_RESOLUTION,
    TAG_YCBCR_POSITIONING, TAG_Y_RESOLUTION,
};
pub use values::{resolve_value, TagValue};
