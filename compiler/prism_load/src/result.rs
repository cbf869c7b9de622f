//! The decoded parse result.

use prism_diagnostic::{SyntaxError, SyntaxWarning};
use prism_ir::{Comment, ConstantId, Constants, Location, MagicComment, Node, SourceIndex};

use crate::format::SourceEncoding;

/// Everything decoded from one serialized buffer.
///
/// `root` is present exactly when `errors` is empty: a program with syntax
/// errors has its diagnostics decoded but no tree. The result owns a copy of
/// the source and is read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseResult {
    pub(crate) root: Option<Node>,
    pub(crate) comments: Vec<Comment>,
    pub(crate) magic_comments: Vec<MagicComment>,
    pub(crate) data_location: Option<Location>,
    pub(crate) errors: Vec<SyntaxError>,
    pub(crate) warnings: Vec<SyntaxWarning>,
    pub(crate) source: SourceIndex,
    pub(crate) constants: Constants,
    pub(crate) encoding: SourceEncoding,
}

impl ParseResult {
    /// The program node, absent when the parser reported errors.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    /// `true` when no syntax errors were reported.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    #[inline]
    pub fn magic_comments(&self) -> &[MagicComment] {
        &self.magic_comments
    }

    /// Location of the `__END__` data section, if the source has one.
    #[inline]
    pub fn data_location(&self) -> Option<Location> {
        self.data_location
    }

    #[inline]
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    #[inline]
    pub fn warnings(&self) -> &[SyntaxWarning] {
        &self.warnings
    }

    #[inline]
    pub fn source(&self) -> &SourceIndex {
        &self.source
    }

    #[inline]
    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    /// Text of a constant referenced by the tree.
    #[inline]
    pub fn constant(&self, id: ConstantId) -> Option<&str> {
        self.constants.get(id)
    }

    #[inline]
    pub fn encoding(&self) -> &SourceEncoding {
        &self.encoding
    }

    /// Source text of a comment, delimiters included.
    pub fn comment_text(&self, comment: &Comment) -> Option<&[u8]> {
        self.source.slice(comment.location)
    }

    /// Key and value text of a magic comment.
    pub fn magic_comment_text(&self, magic: &MagicComment) -> Option<(&[u8], &[u8])> {
        Some((self.source.slice(magic.key)?, self.source.slice(magic.value)?))
    }

    /// Bytes of the `__END__` data section.
    pub fn data(&self) -> Option<&[u8]> {
        self.source.slice(self.data_location?)
    }
}
