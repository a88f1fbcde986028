//! # jpeg-exif
//!
//! A streaming EXIF decoder for JPEG files.
//!
//! The decoder locates the APP1 segment of a JPEG stream, reads the embedded
//! TIFF header and walks the primary image directory (IFD0), producing
//! `(tag id, value)` pairs one at a time. Nothing is read ahead: a caller that
//! stops after the first tag leaves the rest of the directory untouched.
//!
//! ## Architecture
//!
//! - [`io`] - byte sources ([`RangeReader`]) and the endianness-aware [`ByteCursor`]
//! - [`source`] - the accepted input kinds ([`ExifSource`])
//! - [`mod@format`] - JPEG marker scanning and TIFF header / IFD parsing
//! - [`reader`] - the decoding pipeline ([`ExifReader`], [`ExifTags`])
//! - [`debug`] - hex dump for diagnostics
//! - [`config`] - CLI configuration for the `jpeg-exif` binary
//!
//! ## Example
//!
//! ```rust,no_run
//! use jpeg_exif::{read_exif, TagValue, TAG_IMAGE_MAKE};
//!
//! let mut tags = read_exif("Canon_40D.jpg", &[TAG_IMAGE_MAKE])?;
//! if let Some(tag) = tags.next() {
//!     let (id, value) = tag?;
//!     assert_eq!(id, TAG_IMAGE_MAKE);
//!     assert_eq!(value, TagValue::Text("Canon".into()));
//! }
//! # Ok::<(), jpeg_exif::ExifError>(())
//! ```
//!
//! Sub-directories (Exif, GPS) are referenced from IFD0 but not walked unless
//! [`ExifReader::follow_sub_ifds`] is enabled.

pub mod config;
pub mod debug;
pub mod error;
pub mod format;
pub mod io;
pub mod reader;
pub mod source;

// Re-export commonly used types
pub use debug::hex_dump;
pub use error::{ErrorKind, ExifError, IoError, MalformedInput};
pub use format::tiff::{
    tag_name, ByteOrder, FieldType, IfdWalker, SubIfdPointers, TagEntry, TagValue, TiffHeader,
    TAG_ARTIST, TAG_COPYRIGHT, TAG_DATE_TIME, TAG_EXIF_IFD_POINTER, TAG_GPS_IFD_POINTER,
    TAG_IMAGE_DESCRIPTION, TAG_IMAGE_MAKE, TAG_IMAGE_MODEL, TAG_ORIENTATION,
    TAG_RESOLUTION_UNIT, TAG_SOFTWARE, TAG_X_RESOLUTION, TAG_YCBCR_POSITIONING,
    TAG_Y_RESOLUTION,
};
pub use io::{ByteCursor, MemoryReader, RangeReader, SeekReader};
pub use reader::{read_exif, ExifReader, ExifTags};
pub use source::ExifSource;
