//! Decode failures.
//!
//! Everything here is fatal: the serialized buffer is structurally invalid
//! and no result is produced. Syntax errors in the parsed program are not
//! load errors; they are data on the `ParseResult`.

use std::fmt;

use prism_ir::{NodeTag, SourceError};

/// Failure while reading raw bytes from the cursor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// Fewer bytes remain than the field requires.
    #[error("needed {needed} bytes at offset {offset} but only {available} remain")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// A varint runs past 5 bytes or past `u32::MAX`.
    #[error("varint at offset {offset} does not fit in 32 bits")]
    VarintOverflow { offset: usize },
    /// A declared element count cannot fit in the remaining input.
    #[error("count {count} at offset {offset} cannot fit in the {remaining} remaining bytes")]
    CountTooLarge {
        offset: usize,
        count: u32,
        remaining: usize,
    },
}

/// A fatal decode failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("invalid signature: expected the PRISM header")]
    InvalidSignature,

    #[error("unsupported format version {}.{}.{}, expected {}.{}.{}",
        .found[0], .found[1], .found[2], .expected[0], .expected[1], .expected[2])]
    VersionMismatch { found: [u8; 3], expected: [u8; 3] },

    #[error("serialized output must not include location fields")]
    LocationFieldsPresent,

    #[error("unsupported source encoding {name:?}")]
    UnsupportedEncoding { name: String },

    #[error("{what} is not valid UTF-8")]
    InvalidUtf8 { what: &'static str },

    #[error("unknown comment type {kind}")]
    UnknownCommentType { kind: u8 },

    #[error("unknown error type {code}")]
    UnknownErrorType { code: u32 },

    #[error("unknown warning type {code}")]
    UnknownWarningType { code: u32 },

    #[error("unknown {what} level {level}")]
    UnknownLevel { what: &'static str, level: u8 },

    #[error("constant pool of {count} entries at offset {offset} exceeds the {available}-byte buffer")]
    PoolOutOfBounds {
        offset: u32,
        count: u32,
        available: usize,
    },

    #[error("constant index {index} is outside the pool of {len} entries")]
    ConstantIndexOutOfRange { index: u32, len: usize },

    #[error("constant {index} covers {length} bytes at {start} outside its backing buffer")]
    ConstantOutOfBounds { index: u32, start: u32, length: u32 },

    #[error("unknown node type {tag}")]
    UnknownNodeType { tag: u8 },

    #[error("node flags {flags:#x} exceed 15 bits")]
    FlagsOutOfRange { flags: u32 },

    #[error("invalid string tag {tag}")]
    InvalidStringTag { tag: u8 },

    #[error("source slice {start}+{length} is outside the {available}-byte source")]
    SourceSliceOutOfBounds {
        start: u32,
        length: u32,
        available: usize,
    },

    #[error("integer literal has no words")]
    EmptyInteger,

    #[error("def node declares {declared} serialized bytes but occupies {actual}")]
    DefLengthMismatch { declared: u32, actual: usize },

    #[error("node nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },

    #[error("expected to consume all bytes up to the constant pool at {expected}, stopped at {actual}")]
    TrailingBytes { expected: usize, actual: usize },

    #[error(transparent)]
    Line(#[from] SourceError),

    /// Another failure, annotated with the stage that hit it.
    #[error("{context}: {source}")]
    Context {
        context: Context,
        source: Box<LoadError>,
    },
}

impl LoadError {
    /// The innermost failure, with every [`LoadError::Context`] stripped.
    pub fn root_cause(&self) -> &LoadError {
        let mut error = self;
        while let LoadError::Context { source, .. } = error {
            error = source;
        }
        error
    }

    /// Stage annotations, outermost first.
    pub fn contexts(&self) -> Vec<&Context> {
        let mut contexts = Vec::new();
        let mut error = self;
        while let LoadError::Context { context, source } = error {
            contexts.push(context);
            error = source;
        }
        contexts
    }
}

/// Where a failure happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Context {
    /// A top-level section such as the header or the line offsets.
    Section(&'static str),
    /// One record of a counted section.
    Record { kind: &'static str, index: usize },
    /// A primitive field of a node, with the offset where the field starts.
    Field {
        node: NodeTag,
        field: &'static str,
        offset: usize,
    },
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Section(name) => write!(f, "while reading {name}"),
            Context::Record { kind, index } => write!(f, "while reading {kind} at index {index}"),
            Context::Field {
                node,
                field,
                offset,
            } => write!(f, "while reading {node}.{field} at offset {offset}"),
        }
    }
}

/// Attach a [`Context`] to any error convertible into [`LoadError`].
pub(crate) trait ResultExt<T> {
    fn context(self, context: Context) -> Result<T, LoadError>;
}

impl<T, E: Into<LoadError>> ResultExt<T> for Result<T, E> {
    fn context(self, context: Context) -> Result<T, LoadError> {
        self.map_err(|error| LoadError::Context {
            context,
            source: Box::new(error.into()),
        })
    }
}
