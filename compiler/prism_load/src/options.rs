//! Decode options.

/// Knobs for [`load_with`](crate::load_with). The defaults match
/// [`load`](crate::load).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Check each def node's serialized length against the bytes it used.
    pub verify_def_lengths: bool,
    /// Run the newline-marking pass over the decoded tree.
    pub mark_newlines: bool,
    /// Deepest node nesting accepted before failing with
    /// [`LoadError::NestingTooDeep`](crate::LoadError::NestingTooDeep).
    pub max_depth: usize,
}

impl LoadOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 5_000;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn without_newline_marking(mut self) -> Self {
        self.mark_newlines = false;
        self
    }

    #[must_use]
    pub fn without_def_length_checks(mut self) -> Self {
        self.verify_def_lengths = false;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            verify_def_lengths: true,
            mark_newlines: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
