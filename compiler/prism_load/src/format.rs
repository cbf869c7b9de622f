//! The pinned wire contract.
//!
//! Prism changes its serialization between releases, including the
//! numbering of diagnostic types, so the loader accepts exactly one version.

use prism_diagnostic::ErrorType;

use crate::cursor::Cursor;
use crate::error::{LoadError, ReadError};

/// Leading signature of every serialized buffer.
pub const MAGIC: &[u8; 5] = b"PRISM";

/// Major, minor and patch version the tables in this workspace describe.
pub const VERSION: [u8; 3] = [1, 3, 0];

/// Wire code of the first warning type.
pub const WARNING_TYPE_BASE: u32 = ErrorType::COUNT;

/// Size of one constant pool descriptor: `start: u32 LE`, `length: u32 LE`.
pub const CONSTANT_DESCRIPTOR_LEN: usize = 8;

/// Set in a descriptor's `start` when the bytes live in the serialized
/// buffer rather than in the source.
pub const OWNED_CONSTANT_BIT: u32 = 1 << 31;

/// Character encoding declared for the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// Any other encoding. Its name is kept for error messages; constants
    /// cannot be materialized from it.
    Unsupported(String),
}

impl SourceEncoding {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("utf-8") {
            SourceEncoding::Utf8
        } else {
            SourceEncoding::Unsupported(name.to_owned())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SourceEncoding::Utf8 => "UTF-8",
            SourceEncoding::Unsupported(name) => name,
        }
    }
}

/// Check the signature, the version and the location-fields byte.
pub(crate) fn read_header(cursor: &mut Cursor<'_>) -> Result<(), LoadError> {
    let magic = cursor.read_exact(MAGIC.len())?;
    if magic != MAGIC {
        return Err(LoadError::InvalidSignature);
    }

    let found: [u8; 3] = cursor.read_array()?;
    if found != VERSION {
        return Err(LoadError::VersionMismatch {
            found,
            expected: VERSION,
        });
    }

    // Only semantic fields are supported; location fields would shift every node.
    if cursor.read_byte()? != 0 {
        return Err(LoadError::LocationFieldsPresent);
    }
    Ok(())
}

pub(crate) fn read_encoding(cursor: &mut Cursor<'_>) -> Result<SourceEncoding, LoadError> {
    let name = cursor.read_embedded_bytes()?;
    let name = std::str::from_utf8(name).map_err(|_| LoadError::InvalidUtf8 {
        what: "encoding name",
    })?;
    Ok(SourceEncoding::from_name(name))
}

/// Zig-zag start line, then the counted line-start offsets.
pub(crate) fn read_lines(cursor: &mut Cursor<'_>) -> Result<(i32, Vec<u32>), ReadError> {
    let start_line = cursor.read_varsint()?;
    let count = cursor.read_count(1)?;
    let line_offsets = (0..count)
        .map(|_| cursor.read_varuint())
        .collect::<Result<Vec<_>, _>>()?;
    Ok((start_line, line_offsets))
}

/// Absolute offset of the descriptor table, then the number of constants.
pub(crate) fn read_pool_header(cursor: &mut Cursor<'_>) -> Result<(u32, u32), ReadError> {
    let offset = cursor.read_u32_le()?;
    let count = cursor.read_varuint()?;
    Ok((offset, count))
}
