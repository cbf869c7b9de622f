//! Byte ranges into the original source.
//!
//! Every node, comment and diagnostic carries exactly one [`Location`].

use std::fmt;

/// Source location as a start offset and a byte length.
///
/// Layout: 8 bytes total
/// - `start_offset`: u32 - byte offset from the start of the source
/// - `length`: u32 - number of bytes covered
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Location {
    pub start_offset: u32,
    pub length: u32,
}

impl Location {
    /// Create a new location.
    #[inline]
    pub const fn new(start_offset: u32, length: u32) -> Self {
        Location {
            start_offset,
            length,
        }
    }

    /// Exclusive end offset.
    ///
    /// Saturates at `u32::MAX`; the wire format cannot describe a range that
    /// ends past it, but a corrupt length must not wrap around.
    #[inline]
    pub const fn end_offset(self) -> u32 {
        self.start_offset.saturating_add(self.length)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }

    /// Check if an offset falls inside this location.
    #[inline]
    pub const fn contains(self, offset: u32) -> bool {
        offset >= self.start_offset && offset < self.end_offset()
    }

    /// Byte range suitable for slicing the source.
    #[inline]
    pub fn range(self) -> std::ops::Range<usize> {
        self.start_offset as usize..self.end_offset() as usize
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_offset, self.end_offset())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_offset, self.end_offset())
    }
}
