//! The EXIF decoding pipeline.
//!
//! [`ExifReader`] holds decoding options; [`ExifReader::decode`] opens the
//! source, locates the TIFF block and returns an [`ExifTags`] iterator that
//! reads one directory entry per `next()` call.
//!
//! ```rust,no_run
//! use jpeg_exif::{ExifReader, TAG_IMAGE_MAKE};
//!
//! let tags = ExifReader::new()
//!     .with_filter([TAG_IMAGE_MAKE])
//!     .decode("Canon_40D.jpg")?;
//!
//! for tag in tags {
//!     let (id, value) = tag?;
//!     println!("0x{:04X} = {}", id, value);
//! }
//! # Ok::<(), jpeg_exif::ExifError>(())
//! ```

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::ExifError;
use crate::format::jpeg::scan_to_tiff_header;
use crate::format::tiff::{IfdWalker, SubIfdPointers, TagValue, TiffHeader};
use crate::io::{ByteCursor, RangeReader};
use crate::source::ExifSource;

// =============================================================================
// ExifReader
// =============================================================================

/// Decoding options.
#[derive(Debug, Clone, Default)]
pub struct ExifReader {
    filter: HashSet<u16>,
    follow_sub_ifds: bool,
}

impl ExifReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only yield these tag ids. An empty filter yields every tag.
    pub fn with_filter(mut self, tags: impl IntoIterator<Item = u16>) -> Self {
        self.filter = tags.into_iter().collect();
        self
    }

    /// Walk the Exif and GPS sub-directories after IFD0.
    ///
    /// Off by default: their pointers are recorded (see
    /// [`ExifTags::sub_ifd_pointers`]) but their tags are not yielded.
    pub fn follow_sub_ifds(mut self, follow: bool) -> Self {
        self.follow_sub_ifds = follow;
        self
    }

    /// Open `source` and position a tag iterator at IFD0.
    ///
    /// JPEG markers, the TIFF header and the IFD0 entry count are read
    /// here; entries are read lazily by the returned iterator.
    pub fn decode(
        &self,
        source: impl Into<ExifSource>,
    ) -> Result<ExifTags<Box<dyn RangeReader + Send>>, ExifError> {
        let reader = source.into().open()?;
        self.decode_reader(reader)
    }

    /// Like [`decode`](Self::decode), over an already opened reader.
    pub fn decode_reader<R: RangeReader>(&self, reader: R) -> Result<ExifTags<R>, ExifError> {
        let mut cursor = ByteCursor::new(reader);

        scan_to_tiff_header(&mut cursor)?;
        let header = TiffHeader::read(&mut cursor)?;

        cursor.seek(header.first_ifd_position())?;
        let walker = IfdWalker::start(&mut cursor)?;

        Ok(ExifTags {
            cursor,
            header,
            filter: self.filter.clone(),
            follow_sub_ifds: self.follow_sub_ifds,
            walker: Some(walker),
            in_primary: true,
            pending: VecDeque::new(),
            pointers: SubIfdPointers::default(),
        })
    }
}

/// Decode `source`, yielding only `tags` (or everything when empty).
pub fn read_exif(
    source: impl Into<ExifSource>,
    tags: &[u16],
) -> Result<ExifTags<Box<dyn RangeReader + Send>>, ExifError> {
    ExifReader::new()
        .with_filter(tags.iter().copied())
        .decode(source)
}

// =============================================================================
// ExifTags
// =============================================================================

/// Lazy sequence of `(tag id, value)` pairs in on-disk directory order.
///
/// The first `Err` ends the sequence; later calls to `next` return `None`.
/// A fresh [`ExifReader::decode`] call is needed to start over.
pub struct ExifTags<R> {
    cursor: ByteCursor<R>,
    header: TiffHeader,
    filter: HashSet<u16>,
    follow_sub_ifds: bool,
    /// `None` once the last directory is exhausted or an error occurred
    walker: Option<IfdWalker>,
    in_primary: bool,
    pending: VecDeque<u64>,
    pointers: SubIfdPointers,
}

impl<R: RangeReader> ExifTags<R> {
    pub fn header(&self) -> &TiffHeader {
        &self.header
    }

    /// Sub-directory pointers recorded from IFD0 entries read so far.
    pub fn sub_ifd_pointers(&self) -> SubIfdPointers {
        self.pointers
    }

    /// Drain into a map keyed by tag id. When ids repeat across
    /// directories, the first occurrence wins.
    pub fn collect_map(self) -> Result<BTreeMap<u16, TagValue>, ExifError> {
        let mut map = BTreeMap::new();
        for tag in self {
            let (id, value) = tag?;
            map.entry(id).or_insert(value);
        }
        Ok(map)
    }

    #[inline]
    fn accepts(filter: &HashSet<u16>, tag: u16) -> bool {
        filter.is_empty() || filter.contains(&tag)
    }

    /// Move to the next sub-directory, if any remain to be walked.
    fn advance_directory(&mut self) -> Result<(), ExifError> {
        if self.in_primary {
            self.in_primary = false;
            if self.follow_sub_ifds {
                self.pending.extend(self.pointers.iter());
            }
        }

        self.walker = None;
        if let Some(position) = self.pending.pop_front() {
            debug!(position, "Descending into sub-IFD");
            self.cursor.seek(position)?;
            self.walker = Some(IfdWalker::start(&mut self.cursor)?);
        }
        Ok(())
    }
}

impl<R: RangeReader> Iterator for ExifTags<R> {
    type Item = Result<(u16, TagValue), ExifError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let walker = self.walker.as_mut()?;

            match walker.next_tag(&mut self.cursor, &self.header) {
                Ok(Some((tag, value))) => {
                    if self.in_primary {
                        self.pointers = walker.pointers();
                    }
                    if Self::accepts(&self.filter, tag) {
                        return Some(Ok((tag, value)));
                    }
                }
                Ok(None) => {
                    if let Err(err) = self.advance_directory() {
                        self.walker = None;
                        self.pending.clear();
                        return Some(Err(err));
                    }
                }
                Err(err) => {
                    self.walker = None;
                    self.pending.clear();
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<R: RangeReader> FusedIterator for ExifTags<R> {}

impl<R> std::fmt::Debug for ExifTags<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExifTags")
            .field("header", &self.header)
            .field("position", &self.cursor.position())
            .field("in_primary", &self.in_primary)
            .field("exhausted", &self.walker.is_none())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
