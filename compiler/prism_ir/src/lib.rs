//! Prism IR - decoded syntax tree types
//!
//! This crate contains the data model produced by `prism_load`:
//! - [`Location`] byte spans carried by every node and diagnostic
//! - [`SourceIndex`] for byte offset to line lookups
//! - [`ConstantId`] handles into the frozen [`Constants`] table
//! - [`Node`] / [`NodeKind`]: one closed sum type over every node kind
//! - Comments and magic comments
//! - A generic read-only [`visitor`]
//!
//! # Design Philosophy
//!
//! - **One table, many expansions**: the node layout lives in
//!   [`for_each_node_kind!`] and every per-kind `match` (the enum itself,
//!   child traversal, the wire loader) is generated from it, so adding a kind
//!   is a compile-checked change everywhere.
//! - **Intern names**: identifiers and other constants are stored once in
//!   [`Constants`]; nodes hold 4-byte [`ConstantId`]s.
//! - **Own the tree**: every node exclusively owns its children. There are no
//!   parent pointers and no sharing.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod comment;
mod constant;
mod flags;
mod location;
mod node;
mod source;
pub mod visitor;

pub use comment::{Comment, CommentKind, MagicComment};
pub use constant::{ConstantId, Constants};
pub use flags::{
    ArgumentsFlags, ArrayFlags, CallFlags, EncodingFlags, IntegerBaseFlags,
    InterpolatedStringFlags, KeywordHashFlags, LoopFlags, NodeFlags, ParameterFlags,
    ParenthesesFlags, RangeFlags, RegularExpressionFlags, ShareableConstantFlags, StringFlags,
    SymbolFlags,
};
pub use location::Location;
pub use node::{Node, NodeKind, NodeTag, RawString};
pub use source::{SourceError, SourceIndex};
pub use visitor::{count_nodes, walk_node, Visitor};

// Re-exported so downstream crates name the same integer type as `NodeKind::Integer`.
pub use num_bigint::BigInt;
