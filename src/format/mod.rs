//! Container parsers for EXIF metadata.
//!
//! - [`jpeg`] locates the APP1 segment and validates the `Exif\0\0` signature
//! - [`tiff`] decodes the TIFF header and walks its directories

pub mod jpeg;
pub mod tiff;

pub use jpeg::scan_to_tiff_header;
