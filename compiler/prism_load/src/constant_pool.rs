//! Lazily resolved constant pool.
//!
//! The pool is a table of 8-byte descriptors at the end of the serialized
//! buffer, one per constant. A descriptor either points into the source
//! (an identifier spelled verbatim) or, with [`OWNED_CONSTANT_BIT`] set, into
//! the serialized buffer (a name the parser synthesized). Constants are
//! resolved on first reference and cached; at the end of the load the cache
//! is frozen into a [`Constants`] table.

use prism_ir::{ConstantId, Constants};

use crate::cursor::Cursor;
use crate::error::LoadError;
use crate::format::{SourceEncoding, CONSTANT_DESCRIPTOR_LEN, OWNED_CONSTANT_BIT};

pub(crate) struct ConstantPool<'a> {
    source: &'a [u8],
    encoding: SourceEncoding,
    /// Absolute offset of the descriptor table.
    buffer_offset: usize,
    /// One slot per constant; `None` until resolved.
    cache: Vec<Option<Box<str>>>,
    /// Number of cache misses, for observing memoization.
    resolutions: usize,
}

impl<'a> ConstantPool<'a> {
    /// Create a pool whose descriptor table starts at `buffer_offset`.
    ///
    /// The whole table must lie inside the `buffer_len`-byte buffer.
    pub(crate) fn new(
        source: &'a [u8],
        encoding: SourceEncoding,
        buffer_len: usize,
        buffer_offset: u32,
        count: u32,
    ) -> Result<Self, LoadError> {
        let table_end = (count as usize)
            .checked_mul(CONSTANT_DESCRIPTOR_LEN)
            .and_then(|table_len| table_len.checked_add(buffer_offset as usize));
        if table_end.map_or(true, |end| end > buffer_len) {
            return Err(LoadError::PoolOutOfBounds {
                offset: buffer_offset,
                count,
                available: buffer_len,
            });
        }
        Ok(ConstantPool {
            source,
            encoding,
            buffer_offset: buffer_offset as usize,
            cache: vec![None; count as usize],
            resolutions: 0,
        })
    }

    #[inline]
    pub(crate) fn buffer_offset(&self) -> usize {
        self.buffer_offset
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub(crate) fn resolutions(&self) -> usize {
        self.resolutions
    }

    /// Validate a one-based wire index.
    fn id(&self, index: u32) -> Result<ConstantId, LoadError> {
        ConstantId::new(index)
            .filter(|id| id.slot() < self.cache.len())
            .ok_or(LoadError::ConstantIndexOutOfRange {
                index,
                len: self.cache.len(),
            })
    }

    /// Text of constant `index` (one-based), resolving it first.
    #[cfg(test)]
    pub(crate) fn get(&mut self, cursor: &mut Cursor<'a>, index: u32) -> Result<&str, LoadError> {
        let id = self.resolve(cursor, index)?;
        self.cache
            .get(id.slot())
            .and_then(Option::as_deref)
            .ok_or(LoadError::ConstantIndexOutOfRange {
                index,
                len: self.cache.len(),
            })
    }

    /// Resolve constant `index` (one-based), reading its descriptor through
    /// `cursor` on first use. The cursor position is unchanged on return.
    pub(crate) fn resolve(
        &mut self,
        cursor: &mut Cursor<'a>,
        index: u32,
    ) -> Result<ConstantId, LoadError> {
        let id = self.id(index)?;
        if matches!(self.cache.get(id.slot()), Some(Some(_))) {
            return Ok(id);
        }

        let text = self.materialize(cursor, id)?;
        tracing::trace!(index, text = &*text, "resolved constant");
        self.resolutions += 1;
        if let Some(slot) = self.cache.get_mut(id.slot()) {
            *slot = Some(text);
        }
        Ok(id)
    }

    fn materialize(&self, cursor: &mut Cursor<'a>, id: ConstantId) -> Result<Box<str>, LoadError> {
        let descriptor = self.buffer_offset + id.slot() * CONSTANT_DESCRIPTOR_LEN;
        let (start, length) = cursor.with_position(descriptor, |cursor| {
            Ok::<_, LoadError>((cursor.read_u32_le()?, cursor.read_u32_le()?))
        })?;
        let out_of_bounds = LoadError::ConstantOutOfBounds {
            index: id.get(),
            start,
            length,
        };

        let bytes = if start & OWNED_CONSTANT_BIT == 0 {
            let range = start as usize..(start as usize).saturating_add(length as usize);
            self.source.get(range).ok_or(out_of_bounds)?
        } else {
            let offset = (start & !OWNED_CONSTANT_BIT) as usize;
            cursor
                .with_position(offset, |cursor| cursor.read_exact(length as usize))
                .map_err(|_| out_of_bounds)?
        };

        if let SourceEncoding::Unsupported(name) = &self.encoding {
            return Err(LoadError::UnsupportedEncoding { name: name.clone() });
        }
        let text = std::str::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
            what: "constant",
        })?;
        Ok(text.into())
    }

    /// Stop resolving and keep the resolved constants.
    pub(crate) fn freeze(self) -> Constants {
        Constants::from_slots(self.cache)
    }
}
