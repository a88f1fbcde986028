use bytes::Bytes;

use super::range_reader::{check_range, RangeReader};
use crate::error::IoError;

/// Range reader over an in-memory buffer.
///
/// Reads are zero-copy slices of the backing [`Bytes`].
#[derive(Debug, Clone)]
pub struct MemoryReader {
    data: Bytes,
    identifier: String,
}

impl MemoryReader {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            identifier: "memory".to_string(),
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }
}

impl RangeReader for MemoryReader {
    fn read_exact_at(&mut self, offset: u64, len: usize) -> Result<Bytes, IoError> {
        check_range(offset, len, self.size())?;
        let start = offset as usize;
        Ok(self.data.slice(start..start + len))
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}
