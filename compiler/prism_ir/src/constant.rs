//! Interned constants: identifiers, operators and other names.
//!
//! The serialized tree references names through one-based indices into a
//! constant pool. The loader resolves each referenced index once and freezes
//! the results into a [`Constants`] table; nodes keep the [`ConstantId`].

use std::fmt;

/// One-based handle into [`Constants`].
///
/// Layout: 4 bytes, the wire index unchanged. Zero is never a valid id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ConstantId(u32);

impl ConstantId {
    /// Create from a one-based wire index. Returns `None` for 0.
    #[inline]
    pub const fn new(one_based: u32) -> Option<Self> {
        if one_based == 0 {
            None
        } else {
            Some(ConstantId(one_based))
        }
    }

    /// The one-based wire index.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero-based slot in the constants table.
    #[inline]
    pub const fn slot(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Debug for ConstantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstantId({})", self.0)
    }
}

/// Frozen constant table.
///
/// Only constants referenced by the tree are resolved; the others stay `None`
/// so that ids keep their wire numbering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Constants {
    entries: Vec<Option<Box<str>>>,
}

impl Constants {
    /// Build from pool slots, where slot `i` holds the constant with id `i + 1`.
    pub fn from_slots(entries: Vec<Option<Box<str>>>) -> Self {
        Constants { entries }
    }

    /// Look up a resolved constant.
    #[inline]
    pub fn get(&self, id: ConstantId) -> Option<&str> {
        self.entries.get(id.slot())?.as_deref()
    }

    /// Number of slots declared by the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over resolved constants in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ConstantId, &str)> {
        self.entries.iter().zip(1u32..).filter_map(|(entry, id)| {
            let text = entry.as_deref()?;
            Some((ConstantId(id), text))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
