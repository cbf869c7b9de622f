//! Comments, magic comments, data location, errors and warnings.
//!
//! Each section is a varint count followed by fixed-shape records. A failure
//! inside a record is reported with the record kind and index.

use prism_diagnostic::{ErrorLevel, ErrorType, SyntaxError, SyntaxWarning, WarningLevel, WarningType};
use prism_ir::{Comment, CommentKind, MagicComment};

use crate::cursor::Cursor;
use crate::error::{Context, LoadError, ResultExt};

/// Smallest encodings, for rejecting hostile counts.
const MIN_COMMENT_LEN: usize = 3;
const MIN_MAGIC_COMMENT_LEN: usize = 4;
const MIN_DIAGNOSTIC_LEN: usize = 5;

/// Read a counted section, wrapping each record's failure with its index.
fn read_records<T>(
    cursor: &mut Cursor<'_>,
    kind: &'static str,
    min_record_len: usize,
    mut read: impl FnMut(&mut Cursor<'_>) -> Result<T, LoadError>,
) -> Result<Vec<T>, LoadError> {
    let count = cursor.read_count(min_record_len)?;
    let mut records = Vec::with_capacity(count);
    for index in 0..count {
        records.push(read(cursor).context(Context::Record { kind, index })?);
    }
    Ok(records)
}

pub(crate) fn read_comments(cursor: &mut Cursor<'_>) -> Result<Vec<Comment>, LoadError> {
    read_records(cursor, "comment", MIN_COMMENT_LEN, |cursor| {
        let kind = cursor.read_byte()?;
        let kind = CommentKind::from_byte(kind).ok_or(LoadError::UnknownCommentType { kind })?;
        let location = cursor.read_location()?;
        Ok(Comment::new(kind, location))
    })
}

pub(crate) fn read_magic_comments(cursor: &mut Cursor<'_>) -> Result<Vec<MagicComment>, LoadError> {
    read_records(cursor, "magic comment", MIN_MAGIC_COMMENT_LEN, |cursor| {
        let key = cursor.read_location()?;
        let value = cursor.read_location()?;
        Ok(MagicComment { key, value })
    })
}

fn read_message(cursor: &mut Cursor<'_>) -> Result<String, LoadError> {
    let bytes = cursor.read_embedded_bytes()?;
    let message = std::str::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
        what: "diagnostic message",
    })?;
    Ok(message.to_owned())
}

pub(crate) fn read_errors(cursor: &mut Cursor<'_>) -> Result<Vec<SyntaxError>, LoadError> {
    read_records(cursor, "error", MIN_DIAGNOSTIC_LEN, |cursor| {
        let code = cursor.read_varuint()?;
        let error_type = ErrorType::new(code).ok_or(LoadError::UnknownErrorType { code })?;
        let message = read_message(cursor)?;
        let location = cursor.read_location()?;
        let level = cursor.read_byte()?;
        let level = ErrorLevel::from_byte(level).ok_or(LoadError::UnknownLevel {
            what: "error",
            level,
        })?;
        Ok(SyntaxError {
            error_type,
            message,
            location,
            level,
        })
    })
}

pub(crate) fn read_warnings(cursor: &mut Cursor<'_>) -> Result<Vec<SyntaxWarning>, LoadError> {
    read_records(cursor, "warning", MIN_DIAGNOSTIC_LEN, |cursor| {
        let code = cursor.read_varuint()?;
        let warning_type =
            WarningType::from_code(code).ok_or(LoadError::UnknownWarningType { code })?;
        let message = read_message(cursor)?;
        let location = cursor.read_location()?;
        let level = cursor.read_byte()?;
        let level = WarningLevel::from_byte(level).ok_or(LoadError::UnknownLevel {
            what: "warning",
            level,
        })?;
        Ok(SyntaxWarning {
            warning_type,
            message,
            location,
            level,
        })
    })
}
