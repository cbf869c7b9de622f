//! Node flags.
//!
//! The wire carries one 15-bit flag word per node. Bits 0-1 are the common
//! newline / static-literal bits, which the serializer clears; kind-specific
//! families start at bit 2. [`NodeFlags`] keeps the raw word and hands out
//! typed views so a reader asks `flags.view::<CallFlags>()` instead of
//! masking by hand.

use bitflags::bitflags;
use std::fmt;

/// Raw flag word of a node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(transparent)]
pub struct NodeFlags(u16);

impl NodeFlags {
    /// Largest value the wire format may carry.
    pub const MAX: u16 = 0x7FFF;

    pub const EMPTY: NodeFlags = NodeFlags(0);

    /// Create from raw bits. Returns `None` above [`NodeFlags::MAX`].
    #[inline]
    pub const fn new(bits: u16) -> Option<Self> {
        if bits > Self::MAX {
            None
        } else {
            Some(NodeFlags(bits))
        }
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Interpret the word as one kind-specific flag family.
    ///
    /// Unknown bits are retained so a view never loses information.
    #[inline]
    pub fn view<F: bitflags::Flags<Bits = u16>>(self) -> F {
        F::from_bits_retain(self.0)
    }

    /// Check a flag of any family.
    #[inline]
    pub fn contains<F: bitflags::Flags<Bits = u16>>(self, flag: F) -> bool {
        self.view::<F>().contains(flag)
    }
}

impl fmt::Debug for NodeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeFlags({:#06x})", self.0)
    }
}

bitflags! {
    /// Arguments node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ArgumentsFlags: u16 {
        /// `...` forwarding.
        const CONTAINS_FORWARDING = 1 << 2;
        const CONTAINS_KEYWORDS = 1 << 3;
        const CONTAINS_KEYWORD_SPLAT = 1 << 4;
        const CONTAINS_SPLAT = 1 << 5;
        const CONTAINS_MULTIPLE_SPLATS = 1 << 6;
    }

    /// Array node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ArrayFlags: u16 {
        const CONTAINS_SPLAT = 1 << 2;
    }

    /// Call nodes and the call/index write family.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CallFlags: u16 {
        /// `&.` receiver.
        const SAFE_NAVIGATION = 1 << 2;
        /// Bare identifier that could have been a local.
        const VARIABLE_CALL = 1 << 3;
        /// `foo.bar = baz`.
        const ATTRIBUTE_WRITE = 1 << 4;
        /// Private methods are callable (`self.foo`).
        const IGNORE_VISIBILITY = 1 << 5;
    }

    /// Encoding forced by escapes inside a literal.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct EncodingFlags: u16 {
        const FORCED_UTF8_ENCODING = 1 << 2;
        const FORCED_BINARY_ENCODING = 1 << 3;
    }

    /// Radix of an integer literal.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct IntegerBaseFlags: u16 {
        const BINARY = 1 << 2;
        const DECIMAL = 1 << 3;
        const OCTAL = 1 << 4;
        const HEXADECIMAL = 1 << 5;
    }

    /// Interpolated string node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct InterpolatedStringFlags: u16 {
        const FROZEN = 1 << 2;
        const MUTABLE = 1 << 3;
    }

    /// Keyword hash node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct KeywordHashFlags: u16 {
        /// Every key is a symbol literal.
        const SYMBOL_KEYS = 1 << 2;
    }

    /// While / until nodes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct LoopFlags: u16 {
        /// `begin ... end while cond`.
        const BEGIN_MODIFIER = 1 << 2;
    }

    /// Parameter nodes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ParameterFlags: u16 {
        /// Name repeats an earlier parameter (`_`).
        const REPEATED_PARAMETER = 1 << 2;
    }

    /// Parentheses node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ParenthesesFlags: u16 {
        const MULTIPLE_STATEMENTS = 1 << 2;
    }

    /// Range and flip-flop nodes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct RangeFlags: u16 {
        /// `...` rather than `..`.
        const EXCLUDE_END = 1 << 2;
    }

    /// Regular expression and match-last-line nodes.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct RegularExpressionFlags: u16 {
        /// `i`
        const IGNORE_CASE = 1 << 2;
        /// `x`
        const EXTENDED = 1 << 3;
        /// `m`
        const MULTI_LINE = 1 << 4;
        /// `o`
        const ONCE = 1 << 5;
        /// `e`
        const EUC_JP = 1 << 6;
        /// `n`
        const ASCII_8BIT = 1 << 7;
        /// `s`
        const WINDOWS_31J = 1 << 8;
        /// `u`
        const UTF_8 = 1 << 9;
        const FORCED_UTF8_ENCODING = 1 << 10;
        const FORCED_BINARY_ENCODING = 1 << 11;
        const FORCED_US_ASCII_ENCODING = 1 << 12;
    }

    /// Shareable constant node (`# shareable_constant_value:`).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ShareableConstantFlags: u16 {
        const LITERAL = 1 << 2;
        const EXPERIMENTAL_EVERYTHING = 1 << 3;
        const EXPERIMENTAL_COPY = 1 << 4;
    }

    /// String node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct StringFlags: u16 {
        const FORCED_UTF8_ENCODING = 1 << 2;
        const FORCED_BINARY_ENCODING = 1 << 3;
        const FROZEN = 1 << 4;
        const MUTABLE = 1 << 5;
    }

    /// Symbol node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct SymbolFlags: u16 {
        const FORCED_UTF8_ENCODING = 1 << 2;
        const FORCED_BINARY_ENCODING = 1 << 3;
        const FORCED_US_ASCII_ENCODING = 1 << 4;
    }
}

impl IntegerBaseFlags {
    /// Numeric radix, defaulting to 10 when no base bit is set.
    pub fn radix(self) -> u32 {
        if self.contains(IntegerBaseFlags::BINARY) {
            2
        } else if self.contains(IntegerBaseFlags::OCTAL) {
            8
        } else if self.contains(IntegerBaseFlags::HEXADECIMAL) {
            16
        } else {
            10
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
