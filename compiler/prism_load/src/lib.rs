//! Prism Load - decoder for Prism's binary syntax tree format
//!
//! The Prism parser can serialize a parsed Ruby program into a compact,
//! versioned byte buffer. This crate turns that buffer, together with the
//! original source, into a [`ParseResult`]: the node tree, comments,
//! diagnostics, a line index and the referenced constants.
//!
//! # Pipeline
//!
//! 1. Validate the header ([`format::MAGIC`], [`format::VERSION`])
//! 2. Read the encoding, start line and line offsets
//! 3. Read comments, magic comments, the data location, errors and warnings
//! 4. Read the constant pool header
//! 5. Without syntax errors: decode the node tree and check that it ends
//!    exactly where the constant pool begins
//! 6. Mark newline nodes
//!
//! Every structural inconsistency is a [`LoadError`]; the loader never
//! guesses. Syntax errors in the program are not load errors.
//!
//! # Tracing
//!
//! Set `RUST_LOG=prism_load=debug` (or `trace`) and call [`init_tracing`].

use std::sync::Once;

mod constant_pool;
mod cursor;
mod diagnostics;
mod error;
pub mod format;
mod newlines;
mod nodes;
mod options;
mod result;
mod varint;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod test_support;

pub use cursor::Cursor;
pub use error::{Context, LoadError, ReadError};
pub use format::SourceEncoding;
pub use options::LoadOptions;
pub use result::ParseResult;
pub use varint::{encode_varsint, encode_varuint, zigzag_decode, zigzag_encode, MAX_VARINT_LEN};

use constant_pool::ConstantPool;
use error::ResultExt;
use newlines::NewlineMarker;
use nodes::NodeLoader;
use prism_ir::SourceIndex;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=prism_load=debug` or `RUST_LOG=prism_load=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Decode `serialized` with default [`LoadOptions`].
///
/// `source` must be the exact bytes the parser was given.
pub fn load(serialized: &[u8], source: &[u8]) -> Result<ParseResult, LoadError> {
    load_with(serialized, source, &LoadOptions::default())
}

/// Decode `serialized` with explicit options.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(serialized_len = serialized.len(), source_len = source.len())
)]
pub fn load_with(
    serialized: &[u8],
    source: &[u8],
    options: &LoadOptions,
) -> Result<ParseResult, LoadError> {
    use error::Context::Section;

    let mut cursor = Cursor::new(serialized);

    format::read_header(&mut cursor).context(Section("header"))?;
    let encoding = format::read_encoding(&mut cursor).context(Section("encoding"))?;
    let (start_line, line_offsets) =
        format::read_lines(&mut cursor).context(Section("line offsets"))?;
    let source_index = SourceIndex::with_lines(source, start_line, line_offsets);
    tracing::debug!(
        encoding = encoding.name(),
        start_line,
        lines = source_index.line_count(),
        "read header"
    );

    let comments = diagnostics::read_comments(&mut cursor).context(Section("comments"))?;
    let magic_comments =
        diagnostics::read_magic_comments(&mut cursor).context(Section("magic comments"))?;
    let data_location = cursor
        .read_optional_location()
        .context(Section("data location"))?;
    let errors = diagnostics::read_errors(&mut cursor).context(Section("errors"))?;
    let warnings = diagnostics::read_warnings(&mut cursor).context(Section("warnings"))?;
    tracing::debug!(
        comments = comments.len(),
        magic_comments = magic_comments.len(),
        errors = errors.len(),
        warnings = warnings.len(),
        "read diagnostics"
    );

    let (pool_offset, pool_len) =
        format::read_pool_header(&mut cursor).context(Section("constant pool"))?;
    let mut pool = ConstantPool::new(
        source,
        encoding.clone(),
        serialized.len(),
        pool_offset,
        pool_len,
    )
    .context(Section("constant pool"))?;

    let root = if errors.is_empty() {
        let mut root = NodeLoader::new(&mut cursor, &mut pool, source, options)
            .load_node()
            .context(Section("node tree"))?;

        // Every field of every node must have been read, no more and no less.
        if cursor.position() != pool.buffer_offset() {
            return Err(LoadError::TrailingBytes {
                expected: pool.buffer_offset(),
                actual: cursor.position(),
            });
        }

        if options.mark_newlines {
            NewlineMarker::new(&source_index)
                .mark(&mut root)
                .context(Section("newline marking"))?;
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!(
                nodes = prism_ir::count_nodes(&root),
                constants = pool.len(),
                resolved = pool.resolutions(),
                "decoded tree"
            );
        }
        Some(root)
    } else {
        tracing::debug!("syntax errors present, skipping the tree");
        None
    };

    Ok(ParseResult {
        root,
        comments,
        magic_comments,
        data_location,
        errors,
        warnings,
        source: source_index,
        constants: pool.freeze(),
        encoding,
    })
}
