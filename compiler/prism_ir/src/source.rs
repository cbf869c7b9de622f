//! Source bytes plus the line-start table shipped with a serialized tree.
//!
//! The table is produced by the parser, not computed here: [`SourceIndex`]
//! only answers offset to line questions against it.

use crate::Location;

/// Error from a line lookup.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// The line-start table is empty, so no offset maps to a line.
    #[error("source has no line offsets")]
    NoLineOffsets,
    /// The offset precedes the first recorded line start.
    #[error("offset {offset} precedes the first line start {first_line_start}")]
    BeforeFirstLine { offset: u32, first_line_start: u32 },
    /// `start_line` plus the line index does not fit in an `i32`.
    #[error("line number overflows i32")]
    LineOverflow,
}

/// Original source plus its line-start offsets.
///
/// # Example
///
/// ```
/// use prism_ir::SourceIndex;
///
/// let source = SourceIndex::with_lines(b"abcd\nefghij\nxyz".to_vec(), 1, vec![0, 5, 12]);
///
/// assert_eq!(source.line(0), Ok(1));
/// assert_eq!(source.line(5), Ok(2));
/// assert_eq!(source.line(12), Ok(3));
/// // Offsets past the end clamp to the last byte.
/// assert_eq!(source.line(100), Ok(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceIndex {
    bytes: Box<[u8]>,
    start_line: i32,
    /// Byte offset of each line start, non-decreasing.
    line_offsets: Vec<u32>,
}

impl SourceIndex {
    /// Source with `start_line` 1 and no line table yet.
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        SourceIndex {
            bytes: bytes.into(),
            start_line: 1,
            line_offsets: Vec::new(),
        }
    }

    pub fn with_lines(bytes: impl Into<Box<[u8]>>, start_line: i32, line_offsets: Vec<u32>) -> Self {
        SourceIndex {
            bytes: bytes.into(),
            start_line,
            line_offsets,
        }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn start_line(&self) -> i32 {
        self.start_line
    }

    #[inline]
    pub fn line_offsets(&self) -> &[u32] {
        &self.line_offsets
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Zero-based index of the line containing `offset`.
    ///
    /// Offsets past the end of the source are clamped to its last byte (or
    /// to 0 for an empty source) before the binary search.
    pub fn find_line(&self, offset: u32) -> Result<usize, SourceError> {
        let last_byte = u32::try_from(self.bytes.len().saturating_sub(1)).unwrap_or(u32::MAX);
        let offset = offset.min(last_byte);

        // Number of line starts <= offset; the containing line is the last of them.
        let count = self.line_offsets.partition_point(|&start| start <= offset);
        match count.checked_sub(1) {
            Some(index) => Ok(index),
            None => match self.line_offsets.first() {
                Some(&first_line_start) => Err(SourceError::BeforeFirstLine {
                    offset,
                    first_line_start,
                }),
                None => Err(SourceError::NoLineOffsets),
            },
        }
    }

    /// Line number containing `offset`, counted from `start_line`.
    pub fn line(&self, offset: u32) -> Result<i32, SourceError> {
        let index = self.find_line(offset)?;
        i32::try_from(index)
            .ok()
            .and_then(|index| self.start_line.checked_add(index))
            .ok_or(SourceError::LineOverflow)
    }

    /// One-based line position relative to `start_line`.
    ///
    /// Always in `1..=line_count()`, so it indexes a table of
    /// `1 + line_count()` entries without adjusting for `start_line`.
    pub fn line_slot(&self, offset: u32) -> Result<usize, SourceError> {
        self.find_line(offset).map(|index| index + 1)
    }

    /// Byte offset where `line` starts, if the table has that line.
    pub fn line_start(&self, line: i32) -> Option<u32> {
        let index = usize::try_from(line.checked_sub(self.start_line)?).ok()?;
        self.line_offsets.get(index).copied()
    }

    /// Source bytes covered by `location`, if it lies inside the source.
    pub fn slice(&self, location: Location) -> Option<&[u8]> {
        self.bytes.get(location.range())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
