use std::io::{Read, Seek, SeekFrom};

use bytes::Bytes;

use super::range_reader::{check_range, RangeReader};
use crate::error::IoError;

/// Any readable, seekable handle.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// Range reader over an open `Read + Seek` handle (a file, a `Cursor`, ...).
///
/// The handle's length is measured once at construction. Offsets are absolute
/// from the start of the handle, regardless of where it was positioned when
/// handed over.
pub struct SeekReader<R> {
    inner: R,
    size: u64,
    identifier: String,
}

impl<R: Read + Seek> SeekReader<R> {
    pub fn new(mut inner: R, identifier: impl Into<String>) -> Result<Self, IoError> {
        let size = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self {
            inner,
            size,
            identifier: identifier.into(),
        })
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> RangeReader for SeekReader<R> {
    fn read_exact_at(&mut self, offset: u64, len: usize) -> Result<Bytes, IoError> {
        check_range(offset, len, self.size)?;
        self.inner.seek(SeekFrom::Start(offset))?;
        let mut buf = vec![0u8; len];
        self.inner.read_exact(&mut buf)?;
        Ok(Bytes::from(buf))
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl<R> std::fmt::Debug for SeekReader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeekReader")
            .field("size", &self.size)
            .field("identifier", &self.identifier)
            .finish()
    }
}
