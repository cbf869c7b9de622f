//! Base-128 varints.
//!
//! Unsigned values are little-endian groups of 7 bits, high bit set on every
//! byte but the last. Signed values are zig-zag mapped first so that small
//! magnitudes of either sign stay short. Every varint decodes to 32 bits.

use crate::cursor::Cursor;
use crate::error::ReadError;

/// Longest encoding of a `u32`.
pub const MAX_VARINT_LEN: usize = 5;

impl Cursor<'_> {
    /// Decode an unsigned varint.
    ///
    /// Fails with [`ReadError::VarintOverflow`] when the encoding continues
    /// past [`MAX_VARINT_LEN`] bytes or its value exceeds `u32::MAX`.
    pub fn read_varuint(&mut self) -> Result<u32, ReadError> {
        let offset = self.position();
        let mut value = 0u32;
        for shift in (0..32).step_by(7) {
            let byte = self.read_byte()?;
            let group = u32::from(byte & 0x7F);
            // The fifth group has room for 4 bits only.
            if shift == 28 && group > 0x0F {
                return Err(ReadError::VarintOverflow { offset });
            }
            value |= group << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ReadError::VarintOverflow { offset })
    }

    /// Decode a zig-zag signed varint.
    pub fn read_varsint(&mut self) -> Result<i32, ReadError> {
        self.read_varuint().map(zigzag_decode)
    }
}

#[allow(clippy::cast_possible_wrap, reason = "x >> 1 and x & 1 both fit in i32")]
#[inline]
pub fn zigzag_decode(x: u32) -> i32 {
    ((x >> 1) as i32) ^ -((x & 1) as i32)
}

#[allow(clippy::cast_sign_loss, reason = "bit reinterpretation is the encoding")]
#[inline]
pub fn zigzag_encode(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Append the varint encoding of `value`.
#[allow(clippy::cast_possible_truncation, reason = "masked to 7 bits")]
pub fn encode_varuint(mut value: u32, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

pub fn encode_varsint(value: i32, out: &mut Vec<u8>) {
    encode_varuint(zigzag_encode(value), out);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
