use thiserror::Error;

/// I/O errors that can occur when reading from a byte source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    /// Requested range exceeds source bounds
    #[error("Range out of bounds: requested {requested} bytes at offset {offset}, size is {size}")]
    RangeOutOfBounds {
        offset: u64,
        requested: u64,
        size: u64,
    },

    /// Seek target lies past the end of the source
    #[error("Seek out of bounds: offset {offset}, size is {size}")]
    SeekOutOfBounds { offset: u64, size: u64 },

    /// The underlying handle failed mid-read
    #[error("Read error ({kind:?}): {message}")]
    Read {
        kind: std::io::ErrorKind,
        message: String,
    },

    /// A filesystem path could not be opened
    #[error("Could not open {path}: {message}")]
    Open { path: String, message: String },
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        IoError::Read {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Structural problems in the JPEG container or the embedded TIFF header
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    /// Stream does not start with the SOI marker (0xFFD8)
    #[error("Invalid JPEG provided: expected SOI marker 0xFFD8, got 0x{0:04X}")]
    MissingSoi(u16),

    /// The segment after SOI (and an optional APP0) is not APP1
    #[error("Could not find APP1 marker: got 0x{0:04X}")]
    MissingApp1(u16),

    /// APP1 payload does not start with "Exif"
    #[error("Could not find the Exif header: got {0:02X?}")]
    MissingExifHeader([u8; 4]),

    /// TIFF byte order marker is neither II nor MM
    #[error("Unrecognized TIFF byte order marker: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    UnknownByteOrder(u16),
}

/// Errors returned by the EXIF decoder
#[derive(Debug, Clone, Error)]
pub enum ExifError {
    /// Input is not a recognized byte source
    #[error("{0}")]
    InvalidArgument(String),

    /// JPEG/TIFF structure is malformed
    #[error("Malformed input: {0}")]
    Malformed(#[from] MalformedInput),

    /// Reading or seeking the source failed
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

/// Coarse error category, for callers that only branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    MalformedInput,
    IoFailure,
}

impl ExifError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExifError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ExifError::Malformed(_) => ErrorKind::MalformedInput,
            ExifError::Io(_) => ErrorKind::IoFailure,
        }
    }
}

impl From<std::io::Error> for ExifError {
    fn from(err: std::io::Error) -> Self {
        ExifError::Io(err.into())
    }
}
