//! Byte sources accepted by the decoder.
//!
//! Callers hand the decoder an [`ExifSource`]: a filesystem path, an already
//! open `Read + Seek` handle, or an in-memory buffer. The decoder itself
//! only ever sees the [`RangeReader`] produced by [`ExifSource::open`].
//!
//! For dynamically typed callers (bindings, plugin hosts),
//! [`ExifSource::from_any`] classifies an arbitrary value and rejects
//! anything that is not a known source type.

use std::any::Any;
use std::fmt;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

use crate::error::{ExifError, IoError};
use crate::io::{MemoryReader, RangeReader, ReadSeek, SeekReader};

/// Parameter name reported in [`ExifError::InvalidArgument`].
const SOURCE_PARAM: &str = "image";

/// A byte source to decode EXIF metadata from.
pub enum ExifSource {
    /// Path to a file, opened read-only when decoding starts
    Path(PathBuf),
    /// Open handle; reads are absolute from its start
    Handle(Box<dyn ReadSeek + Send>),
    /// In-memory bytes
    Memory(Bytes),
}

impl ExifSource {
    pub fn handle<R: ReadSeek + Send + 'static>(handle: R) -> Self {
        ExifSource::Handle(Box::new(handle))
    }

    /// Classify a dynamically typed value as a byte source.
    ///
    /// Accepts `ExifSource`, `PathBuf`, `String`, `&'static str`,
    /// `&'static Path`, `File`, `Cursor<Vec<u8>>`, `Vec<u8>`, `Bytes` and
    /// `&'static [u8]`.
    ///
    /// # Errors
    /// `InvalidArgument` naming the received type for anything else.
    pub fn from_any<T: Any>(value: T) -> Result<Self, ExifError> {
        let value: Box<dyn Any> = Box::new(value);

        let value = match value.downcast::<ExifSource>() {
            Ok(source) => return Ok(*source),
            Err(value) => value,
        };
        let value = match value.downcast::<PathBuf>() {
            Ok(path) => return Ok(ExifSource::Path(*path)),
            Err(value) => value,
        };
        let value = match value.downcast::<String>() {
            Ok(path) => return Ok(ExifSource::Path(PathBuf::from(*path))),
            Err(value) => value,
        };
        let value = match value.downcast::<&'static str>() {
            Ok(path) => return Ok(ExifSource::Path(PathBuf::from(*path))),
            Err(value) => value,
        };
        let value = match value.downcast::<&'static Path>() {
            Ok(path) => return Ok(ExifSource::Path(path.to_path_buf())),
            Err(value) => value,
        };
        let value = match value.downcast::<File>() {
            Ok(file) => return Ok(ExifSource::Handle(file)),
            Err(value) => value,
        };
        let value = match value.downcast::<Cursor<Vec<u8>>>() {
            Ok(cursor) => return Ok(ExifSource::Handle(cursor)),
            Err(value) => value,
        };
        let value = match value.downcast::<Vec<u8>>() {
            Ok(data) => return Ok(ExifSource::Memory(Bytes::from(*data))),
            Err(value) => value,
        };
        let value = match value.downcast::<Bytes>() {
            Ok(data) => return Ok(ExifSource::Memory(*data)),
            Err(value) => value,
        };
        if let Ok(data) = value.downcast::<&'static [u8]>() {
            return Ok(ExifSource::Memory(Bytes::from_static(*data)));
        }

        Err(ExifError::InvalidArgument(format!(
            "{} must be of type resource|string|file-info, {} given.",
            SOURCE_PARAM,
            std::any::type_name::<T>()
        )))
    }

    /// Open the source for random-access reads.
    pub fn open(self) -> Result<Box<dyn RangeReader + Send>, ExifError> {
        let reader: Box<dyn RangeReader + Send> = match self {
            ExifSource::Path(path) => {
                let file = File::open(&path).map_err(|err| IoError::Open {
                    path: path.display().to_string(),
                    message: err.to_string(),
                })?;
                Box::new(SeekReader::new(file, path.display().to_string())?)
            }
            ExifSource::Handle(handle) => Box::new(SeekReader::new(handle, "handle")?),
            ExifSource::Memory(data) => Box::new(MemoryReader::new(data)),
        };
        debug!(
            source = reader.identifier(),
            size = reader.size(),
            "Opened EXIF source"
        );
        Ok(reader)
    }
}

impl fmt::Debug for ExifSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            ExifSource::Handle(_) => f.write_str("Handle(..)"),
            ExifSource::Memory(data) => write!(f, "Memory({} bytes)", data.len()),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<PathBuf> for ExifSource {
    fn from(path: PathBuf) -> Self {
        ExifSource::Path(path)
    }
}

impl From<&Path> for ExifSource {
    fn from(path: &Path) -> Self {
        ExifSource::Path(path.to_path_buf())
    }
}

impl From<String> for ExifSource {
    fn from(path: String) -> Self {
        ExifSource::Path(path.into())
    }
}

impl From<&str> for ExifSource {
    fn from(path: &str) -> Self {
        ExifSource::Path(path.into())
    }
}

impl From<File> for ExifSource {
    fn from(file: File) -> Self {
        ExifSource::handle(file)
    }
}

impl From<Vec<u8>> for ExifSource {
    fn from(data: Vec<u8>) -> Self {
        ExifSource::Memory(data.into())
    }
}

impl From<Bytes> for ExifSource {
    fn from(data: Bytes) -> Self {
        ExifSource::Memory(data)
    }
}

impl From<&'static [u8]> for ExifSource {
    fn from(data: &'static [u8]) -> Self {
        ExifSource::Memory(Bytes::from_static(data))
    }
}

// =============================================================================
// Tests
// =============================================================================
