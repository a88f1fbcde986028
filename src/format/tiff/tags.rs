//! TIFF field type and EXIF tag definitions.
//!
//! This module defines the vocabulary for EXIF parsing:
//! - Field types that determine how many bytes a value occupies
//! - Tag IDs for the fields commonly found in IFD0

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF field types that determine how values are encoded.
///
/// The size of one component decides whether a value fits in the 4-byte
/// value field of an IFD entry or has to be fetched from an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer
    Byte = 1,

    /// 8-bit ASCII character, NUL-terminated
    Ascii = 2,

    /// Unsigned 16-bit integer
    Short = 3,

    /// Unsigned 32-bit integer
    Long = 4,

    /// Two LONGs: numerator and denominator
    Rational = 5,

    /// Signed 8-bit integer
    SByte = 6,

    /// Opaque bytes
    Undefined = 7,

    /// Signed 16-bit integer
    SShort = 8,

    /// Signed 32-bit integer
    SLong = 9,

    /// Two SLONGs: numerator and denominator
    SRational = 10,

    /// IEEE single precision float
    Float = 11,

    /// IEEE double precision float
    Double = 12,
}

impl FieldType {
    /// Size of a single component of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> u32 {
        match self {
            FieldType::Byte | FieldType::Ascii | FieldType::SByte | FieldType::Undefined => 1,
            FieldType::Short | FieldType::SShort => 2,
            FieldType::Long | FieldType::SLong | FieldType::Float => 4,
            FieldType::Rational | FieldType::SRational | FieldType::Double => 8,
        }
    }

    /// Create a FieldType from its numeric code.
    ///
    /// Returns `None` for unknown codes.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            2 => Some(FieldType::Ascii),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            5 => Some(FieldType::Rational),
            6 => Some(FieldType::SByte),
            7 => Some(FieldType::Undefined),
            8 => Some(FieldType::SShort),
            9 => Some(FieldType::SLong),
            10 => Some(FieldType::SRational),
            11 => Some(FieldType::Float),
            12 => Some(FieldType::Double),
            _ => None,
        }
    }

    /// Bytes per component for a raw format code.
    ///
    /// Unknown codes count as zero bytes, so their entries always take the
    /// inline path.
    #[inline]
    pub fn component_size(code: u16) -> u32 {
        Self::from_u16(code).map_or(0, Self::size_in_bytes)
    }

    /// Maximum bytes that can be stored inline in an IFD entry.
    pub const INLINE_THRESHOLD: u64 = 4;
}

// =============================================================================
// EXIF Tags
// =============================================================================

/// Camera manufacturer
pub const TAG_IMAGE_MAKE: u16 = 0x010F;

/// Camera model
pub const TAG_IMAGE_MODEL: u16 = 0x0110;

/// Image description
pub const TAG_IMAGE_DESCRIPTION: u16 = 0x010E;

/// Orientation of the stored image relative to the viewer
pub const TAG_ORIENTATION: u16 = 0x0112;

pub const TAG_X_RESOLUTION: u16 = 0x011A;

pub const TAG_Y_RESOLUTION: u16 = 0x011B;

/// Unit of X/Y resolution (2 = inch, 3 = centimeter)
pub const TAG_RESOLUTION_UNIT: u16 = 0x0128;

/// Firmware or software that wrote the image
pub const TAG_SOFTWARE: u16 = 0x0131;

/// Last modification time, "YYYY:MM:DD HH:MM:SS"
pub const TAG_DATE_TIME: u16 = 0x0132;

pub const TAG_ARTIST: u16 = 0x013B;

pub const TAG_YCBCR_POSITIONING: u16 = 0x0213;

pub const TAG_COPYRIGHT: u16 = 0x8298;

/// Offset of the Exif sub-IFD, relative to the TIFF header
pub const TAG_EXIF_IFD_POINTER: u16 = 0x8769;

/// Offset of the GPS sub-IFD, relative to the TIFF header
pub const TAG_GPS_IFD_POINTER: u16 = 0x8825;

/// Human-readable name for a well-known tag id.
pub fn tag_name(tag: u16) -> Option<&'static str> {
    let name = match tag {
        TAG_IMAGE_DESCRIPTION => "ImageDescription",
        TAG_IMAGE_MAKE => "Make",
        TAG_IMAGE_MODEL => "Model",
        TAG_ORIENTATION => "Orientation",
        TAG_X_RESOLUTION => "XResolution",
        TAG_Y_RESOLUTION => "YResolution",
        TAG_RESOLUTION_UNIT => "ResolutionUnit",
        TAG_SOFTWARE => "Software",
        TAG_DATE_TIME => "DateTime",
        TAG_ARTIST => "Artist",
        TAG_YCBCR_POSITIONING => "YCbCrPositioning",
        TAG_COPYRIGHT => "Copyright",
        TAG_EXIF_IFD_POINTER => "ExifIfdPointer",
        TAG_GPS_IFD_POINTER => "GpsIfdPointer",
        _ => return None,
    };
    Some(name)
}

// =============================================================================
// Tests
// =============================================================================
