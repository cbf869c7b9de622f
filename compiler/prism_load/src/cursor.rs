//! Seekable read cursor over the serialized buffer.
//!
//! The cursor borrows the buffer for the whole load. Positions are plain
//! byte offsets, always within `0..=len`. Seeks clamp to the end, so a
//! seek past it surfaces as [`ReadError::Truncated`] on the next read.

use prism_ir::Location;

use crate::error::ReadError;

/// Read position into a borrowed byte buffer.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, position: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left after the current position.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    #[inline]
    pub fn seek_absolute(&mut self, position: usize) {
        self.position = position.min(self.data.len());
    }

    #[inline]
    pub fn seek_relative(&mut self, delta: isize) {
        self.position = self
            .position
            .saturating_add_signed(delta)
            .min(self.data.len());
    }

    /// Byte at an absolute index, without moving.
    #[inline]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// Byte at the current position, without moving.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.position)
    }

    pub fn read_byte(&mut self) -> Result<u8, ReadError> {
        let byte = self.peek().ok_or(ReadError::Truncated {
            offset: self.position,
            needed: 1,
            available: 0,
        })?;
        self.position += 1;
        Ok(byte)
    }

    /// Read up to `n` bytes. Returns fewer at the end of the buffer.
    pub fn read_bytes(&mut self, n: usize) -> &'a [u8] {
        let start = self.position;
        let end = start.saturating_add(n).min(self.data.len());
        self.position = end;
        &self.data[start..end]
    }

    /// Read exactly `n` bytes.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], ReadError> {
        let available = self.remaining();
        if n > available {
            return Err(ReadError::Truncated {
                offset: self.position,
                needed: n,
                available,
            });
        }
        Ok(self.read_bytes(n))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let mut array = [0; N];
        array.copy_from_slice(self.read_exact(N)?);
        Ok(array)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, ReadError> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_f64_le(&mut self) -> Result<f64, ReadError> {
        self.read_array().map(f64::from_le_bytes)
    }

    /// Run `f` at `position`, then restore the current position.
    ///
    /// The position is restored on both success and failure of `f`.
    pub fn with_position<R>(&mut self, position: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = std::mem::replace(&mut self.position, position.min(self.data.len()));
        let result = f(self);
        self.position = saved;
        result
    }

    /// Reject a declared element count that cannot fit in the remaining bytes.
    ///
    /// `min_item_size` is the smallest encoding of one element, so a valid
    /// buffer always passes and a hostile count fails before allocation.
    pub fn ensure_count(&self, count: u32, min_item_size: usize) -> Result<usize, ReadError> {
        let remaining = self.remaining();
        let count_len = count as usize;
        if count_len.saturating_mul(min_item_size) > remaining {
            return Err(ReadError::CountTooLarge {
                offset: self.position,
                count,
                remaining,
            });
        }
        Ok(count_len)
    }

    /// Read a varint element count and check it with [`Cursor::ensure_count`].
    pub fn read_count(&mut self, min_item_size: usize) -> Result<usize, ReadError> {
        let count = self.read_varuint()?;
        self.ensure_count(count, min_item_size)
    }

    /// Varint start offset followed by varint length.
    pub fn read_location(&mut self) -> Result<Location, ReadError> {
        let start_offset = self.read_varuint()?;
        let length = self.read_varuint()?;
        Ok(Location::new(start_offset, length))
    }

    /// Presence byte, then a location if it is non-zero.
    pub fn read_optional_location(&mut self) -> Result<Option<Location>, ReadError> {
        match self.read_byte()? {
            0 => Ok(None),
            _ => self.read_location().map(Some),
        }
    }

    /// Varint length followed by that many bytes.
    pub fn read_embedded_bytes(&mut self) -> Result<&'a [u8], ReadError> {
        let length = self.read_varuint()?;
        self.read_exact(length as usize)
    }
}
