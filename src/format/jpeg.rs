//! JPEG segment scanning.
//!
//! EXIF metadata lives in the APP1 segment, which cameras write right after
//! SOI, or after a JFIF APP0 segment when one is present.
//!
//! # Expected Layout
//!
//! ```text
//! FFD8                      SOI
//! [FFE0 LLLL <LLLL-2 bytes>] optional APP0, length includes itself
//! FFE1 LLLL                 APP1 marker and length (ignored)
//! "Exif" 00 00              signature and padding
//! <TIFF header ...>
//! ```

use tracing::debug;

use crate::error::{ExifError, MalformedInput};
use crate::io::{ByteCursor, RangeReader};

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker
pub const SOI: u16 = 0xFFD8;

/// Application segment 0 (JFIF) marker
pub const APP0: u16 = 0xFFE0;

/// Application segment 1 (EXIF) marker
pub const APP1: u16 = 0xFFE1;

/// Signature at the start of the APP1 payload
pub const EXIF_SIGNATURE: [u8; 4] = *b"Exif";

/// Padding bytes following the signature
const EXIF_PADDING: u64 = 2;

// =============================================================================
// Marker Scanning
// =============================================================================

/// Walk from the start of the stream to the first byte of the TIFF header.
///
/// Seeks the cursor to offset 0 first. JPEG markers are big-endian, so the
/// cursor must not have been switched to a TIFF byte order yet.
///
/// # Errors
/// - `MalformedInput::MissingSoi` if the stream does not start with SOI
/// - `MalformedInput::MissingApp1` if APP1 does not follow SOI (or APP0)
/// - `MalformedInput::MissingExifHeader` if APP1 is not an EXIF segment
/// - `IoError` if the stream ends early
pub fn scan_to_tiff_header<R: RangeReader>(cursor: &mut ByteCursor<R>) -> Result<(), ExifError> {
    cursor.seek(0)?;

    let soi = cursor.read_u16()?;
    if soi != SOI {
        return Err(MalformedInput::MissingSoi(soi).into());
    }

    let mut marker = cursor.read_u16()?;
    if marker == APP0 {
        // Length includes its own 2 bytes
        let length = cursor.read_u16()?;
        let payload = u64::from(length).saturating_sub(2);
        debug!(length, "Skipping APP0 segment");
        cursor.skip(payload)?;
        marker = cursor.read_u16()?;
    }

    if marker != APP1 {
        return Err(MalformedInput::MissingApp1(marker).into());
    }

    // APP1 length is not needed
    cursor.skip(2)?;

    let signature = cursor.read_array::<4>()?;
    if signature != EXIF_SIGNATURE {
        return Err(MalformedInput::MissingExifHeader(signature).into());
    }
    cursor.skip(EXIF_PADDING)?;

    debug!(
        tiff_header_offset = cursor.position(),
        "Found EXIF APP1 segment"
    );
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
