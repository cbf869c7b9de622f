//! Recursive node tree decoder.
//!
//! Each node is a kind tag, a header (id, location, flags) and the fields of
//! its kind in table order. The per-kind decoders are generated from
//! [`prism_ir::for_each_node_kind!`], so the field order here is the order
//! of the node table.
//!
//! Failures in primitive fields are annotated with the node kind, field name
//! and offset. Failures in child nodes propagate unchanged: the innermost
//! annotation already names the failing field, and wrapping every ancestor
//! would grow the error with the depth of the tree.

use num_bigint::{BigInt, Sign};
use prism_ir::{ConstantId, Location, Node, NodeFlags, NodeKind, NodeTag, RawString};
use prism_stack::ensure_sufficient_stack;

use crate::constant_pool::ConstantPool;
use crate::cursor::Cursor;
use crate::error::{Context, LoadError, ResultExt};
use crate::LoadOptions;

/// Smallest encoding of a node: tag, id, location and flags at one byte each.
const MIN_NODE_LEN: usize = 5;

/// Bytes of the serialized length that precedes a def node's flags.
const DEF_LENGTH_LEN: usize = 4;

pub(crate) struct NodeLoader<'a, 'l> {
    cursor: &'l mut Cursor<'a>,
    pool: &'l mut ConstantPool<'a>,
    source: &'a [u8],
    options: &'l LoadOptions,
    depth: usize,
}

macro_rules! load_field {
    ($loader:ident, $kind:ident, $field:ident, node) => {
        Box::new($loader.load_node()?)
    };
    ($loader:ident, $kind:ident, $field:ident, opt_node) => {
        $loader.load_optional_node()?.map(Box::new)
    };
    ($loader:ident, $kind:ident, $field:ident, nodes) => {
        $loader.load_nodes()?
    };
    ($loader:ident, $kind:ident, $field:ident, $ty:ident) => {
        $loader.field(NodeTag::$kind, stringify!($field), |loader| {
            load_primitive!(loader, $ty)
        })?
    };
}

macro_rules! load_primitive {
    ($loader:ident, constant) => {
        $loader.load_constant()
    };
    ($loader:ident, opt_constant) => {
        $loader.load_optional_constant()
    };
    ($loader:ident, constants) => {
        $loader.load_constants()
    };
    ($loader:ident, string) => {
        $loader.load_string()
    };
    ($loader:ident, integer) => {
        $loader.load_integer()
    };
    ($loader:ident, double) => {
        $loader.load_double()
    };
    ($loader:ident, uint32) => {
        $loader.load_u32()
    };
    ($loader:ident, uint8) => {
        $loader.load_u8()
    };
}

macro_rules! define_node_loader {
    ($(
        $(#[name = $name:literal])?
        $tag:literal => $kind:ident { $($field:ident: $ty:ident),* $(,)? }
    ),* $(,)?) => {
        impl NodeLoader<'_, '_> {
            /// Decode the fields of one node kind, in wire order.
            ///
            /// Each kind decodes in its own out-of-line function. A single
            /// match holding every kind's temporaries would put all of them
            /// in one frame on every level of recursion.
            fn load_kind(&mut self, tag: NodeTag) -> Result<NodeKind, LoadError> {
                match tag {
                    $( NodeTag::$kind => {
                        #[inline(never)]
                        #[allow(unused_variables, reason = "field-less kinds read nothing")]
                        fn load(loader: &mut NodeLoader<'_, '_>) -> Result<NodeKind, LoadError> {
                            Ok(NodeKind::$kind {
                                $( $field: load_field!(loader, $kind, $field, $ty), )*
                            })
                        }
                        load(self)
                    } )*
                }
            }
        }
    };
}

prism_ir::for_each_node_kind!(define_node_loader);

impl<'a, 'l> NodeLoader<'a, 'l> {
    pub(crate) fn new(
        cursor: &'l mut Cursor<'a>,
        pool: &'l mut ConstantPool<'a>,
        source: &'a [u8],
        options: &'l LoadOptions,
    ) -> Self {
        NodeLoader {
            cursor,
            pool,
            source,
            options,
            depth: 0,
        }
    }

    /// Run a primitive field decoder, annotating its failure.
    fn field<T>(
        &mut self,
        node: NodeTag,
        field: &'static str,
        read: impl FnOnce(&mut Self) -> Result<T, LoadError>,
    ) -> Result<T, LoadError> {
        let offset = self.cursor.position();
        read(self).context(Context::Field {
            node,
            field,
            offset,
        })
    }

    pub(crate) fn load_node(&mut self) -> Result<Node, LoadError> {
        if self.depth >= self.options.max_depth {
            return Err(LoadError::NestingTooDeep {
                max_depth: self.options.max_depth,
            });
        }
        self.depth += 1;
        let node = ensure_sufficient_stack(|| self.load_node_inner());
        self.depth -= 1;
        node
    }

    fn load_node_inner(&mut self) -> Result<Node, LoadError> {
        let byte = self.cursor.read_byte()?;
        let tag = NodeTag::from_byte(byte).ok_or(LoadError::UnknownNodeType { tag: byte })?;
        let after_tag = self.cursor.position();

        let id = self.field(tag, "node_id", |loader| Ok(loader.cursor.read_varuint()?))?;
        let location = self.field(tag, "location", NodeLoader::load_location)?;
        let declared_len = if tag == NodeTag::Def {
            Some(self.field(tag, "serialized_length", |loader| {
                Ok(loader.cursor.read_u32_le()?)
            })?)
        } else {
            None
        };
        let flags = self.field(tag, "flags", NodeLoader::load_flags)?;

        let kind = self.load_kind(tag)?;

        if let Some(declared) = declared_len {
            let actual = self.cursor.position() - after_tag - DEF_LENGTH_LEN;
            if self.options.verify_def_lengths && actual != declared as usize {
                return Err(LoadError::DefLengthMismatch { declared, actual });
            }
        }
        Ok(Node::new(id, location, flags, kind))
    }

    /// Peek for a zero byte (absent, consumed) before decoding a node.
    pub(crate) fn load_optional_node(&mut self) -> Result<Option<Node>, LoadError> {
        if self.cursor.peek() == Some(0) {
            self.cursor.seek_relative(1);
            return Ok(None);
        }
        self.load_node().map(Some)
    }

    pub(crate) fn load_nodes(&mut self) -> Result<Vec<Node>, LoadError> {
        let count = self.cursor.read_count(MIN_NODE_LEN)?;
        let mut nodes = Vec::with_capacity(count);
        for _ in 0..count {
            nodes.push(self.load_node()?);
        }
        Ok(nodes)
    }

    pub(crate) fn load_location(&mut self) -> Result<Location, LoadError> {
        Ok(self.cursor.read_location()?)
    }

    pub(crate) fn load_flags(&mut self) -> Result<NodeFlags, LoadError> {
        let flags = self.cursor.read_varuint()?;
        u16::try_from(flags)
            .ok()
            .and_then(NodeFlags::new)
            .ok_or(LoadError::FlagsOutOfRange { flags })
    }

    pub(crate) fn load_constant(&mut self) -> Result<ConstantId, LoadError> {
        let index = self.cursor.read_varuint()?;
        self.pool.resolve(self.cursor, index)
    }

    /// Peek for a zero byte (absent, consumed) before decoding a constant.
    pub(crate) fn load_optional_constant(&mut self) -> Result<Option<ConstantId>, LoadError> {
        if self.cursor.peek() == Some(0) {
            self.cursor.seek_relative(1);
            return Ok(None);
        }
        self.load_constant().map(Some)
    }

    pub(crate) fn load_constants(&mut self) -> Result<Vec<ConstantId>, LoadError> {
        let count = self.cursor.read_count(1)?;
        let mut constants = Vec::with_capacity(count);
        for _ in 0..count {
            constants.push(self.load_constant()?);
        }
        Ok(constants)
    }

    /// Tag 1: slice of the source. Tag 2: bytes embedded in the buffer.
    pub(crate) fn load_string(&mut self) -> Result<RawString, LoadError> {
        match self.cursor.read_byte()? {
            1 => {
                let start = self.cursor.read_varuint()?;
                let length = self.cursor.read_varuint()?;
                let range = start as usize..(start as usize).saturating_add(length as usize);
                let bytes = self
                    .source
                    .get(range)
                    .ok_or(LoadError::SourceSliceOutOfBounds {
                        start,
                        length,
                        available: self.source.len(),
                    })?;
                Ok(RawString::from(bytes))
            }
            2 => Ok(RawString::from(self.cursor.read_embedded_bytes()?)),
            tag => Err(LoadError::InvalidStringTag { tag }),
        }
    }

    /// Sign byte, word count, then little-endian base-2^32 words.
    pub(crate) fn load_integer(&mut self) -> Result<BigInt, LoadError> {
        let negative = self.cursor.read_byte()? != 0;
        let count = self.cursor.read_varuint()?;
        if count == 0 {
            return Err(LoadError::EmptyInteger);
        }
        let count = self.cursor.ensure_count(count, 1)?;
        let words = (0..count)
            .map(|_| self.cursor.read_varuint())
            .collect::<Result<Vec<_>, _>>()?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(BigInt::from_slice(sign, &words))
    }

    pub(crate) fn load_double(&mut self) -> Result<f64, LoadError> {
        Ok(self.cursor.read_f64_le()?)
    }

    pub(crate) fn load_u32(&mut self) -> Result<u32, LoadError> {
        Ok(self.cursor.read_varuint()?)
    }

    pub(crate) fn load_u8(&mut self) -> Result<u8, LoadError> {
        Ok(self.cursor.read_byte()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
