//! Comments and magic comments recorded by the parser.
//!
//! Comments are not part of the tree; they are kept beside it with only
//! their kind and location. The text is recovered by slicing the source.

use std::fmt;

use crate::Location;

/// A source comment.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Comment {
    pub kind: CommentKind,
    /// Covers the whole comment including its delimiters.
    pub location: Location,
}

impl Comment {
    #[inline]
    pub fn new(kind: CommentKind, location: Location) -> Self {
        Comment { kind, location }
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.location)
    }
}

/// The kind of comment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CommentKind {
    /// `# ...`
    Inline,
    /// `=begin ... =end`
    EmbDoc,
}

impl CommentKind {
    /// Decode the wire byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(CommentKind::Inline),
            1 => Some(CommentKind::EmbDoc),
            _ => None,
        }
    }
}

/// A `# key: value` magic comment, as two locations into the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MagicComment {
    pub key: Location,
    pub value: Location,
}
