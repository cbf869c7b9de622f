//! Builders for synthetic serialized buffers.

use prism_ir::NodeTag;

use crate::format::{MAGIC, OWNED_CONSTANT_BIT, VERSION};
use crate::varint::{encode_varsint, encode_varuint};

/// Append-only byte writer mirroring the cursor's primitives.
#[derive(Default)]
pub(crate) struct Writer {
    bytes: Vec<u8>,
}

impl Writer {
    pub(crate) fn new() -> Self {
        Writer::default()
    }

    pub(crate) fn position(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.bytes
    }

    pub(crate) fn byte(&mut self, byte: u8) -> &mut Self {
        self.bytes.push(byte);
        self
    }

    pub(crate) fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub(crate) fn varuint(&mut self, value: u32) -> &mut Self {
        encode_varuint(value, &mut self.bytes);
        self
    }

    pub(crate) fn varsint(&mut self, value: i32) -> &mut Self {
        encode_varsint(value, &mut self.bytes);
        self
    }

    pub(crate) fn u32_le(&mut self, value: u32) -> &mut Self {
        self.raw(&value.to_le_bytes())
    }

    pub(crate) fn f64_le(&mut self, value: f64) -> &mut Self {
        self.raw(&value.to_le_bytes())
    }

    pub(crate) fn patch_u32_le(&mut self, at: usize, value: u32) {
        self.bytes[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }

    pub(crate) fn location(&mut self, start: u32, length: u32) -> &mut Self {
        self.varuint(start).varuint(length)
    }

    /// Varint length followed by the bytes.
    pub(crate) fn embedded(&mut self, bytes: &[u8]) -> &mut Self {
        let len = u32::try_from(bytes.len()).unwrap();
        self.varuint(len).raw(bytes)
    }

    /// Zero byte: absent optional node or constant.
    pub(crate) fn absent(&mut self) -> &mut Self {
        self.byte(0)
    }

    /// Tag, id, location and flags of a non-def node.
    pub(crate) fn node(&mut self, tag: NodeTag, id: u32, start: u32, length: u32) -> &mut Self {
        self.node_with_flags(tag, id, start, length, 0)
    }

    pub(crate) fn node_with_flags(
        &mut self,
        tag: NodeTag,
        id: u32,
        start: u32,
        length: u32,
        flags: u32,
    ) -> &mut Self {
        assert_ne!(tag, NodeTag::Def, "use def_node");
        self.byte(tag as u8)
            .varuint(id)
            .location(start, length)
            .varuint(flags)
    }

    /// A def node whose fields are written by `fields`, with the serialized
    /// length filled in afterwards.
    pub(crate) fn def_node(
        &mut self,
        id: u32,
        start: u32,
        length: u32,
        fields: impl FnOnce(&mut Writer),
    ) -> &mut Self {
        self.byte(NodeTag::Def as u8);
        let after_tag = self.position();
        self.varuint(id).location(start, length);
        let length_at = self.position();
        self.u32_le(0).varuint(0);
        fields(self);
        let serialized = u32::try_from(self.position() - after_tag - 4).unwrap();
        self.patch_u32_le(length_at, serialized);
        self
    }

    /// Tag-1 string: a slice of the source.
    pub(crate) fn source_string(&mut self, start: u32, length: u32) -> &mut Self {
        self.byte(1).location(start, length)
    }

    /// Tag-2 string: bytes embedded in the buffer.
    pub(crate) fn embedded_string(&mut self, bytes: &[u8]) -> &mut Self {
        self.byte(2).embedded(bytes)
    }
}

/// Where a pool entry's bytes live.
#[derive(Clone)]
pub(crate) enum PoolEntry {
    /// `start`, `length` into the source.
    Source(u32, u32),
    /// Bytes stored after the descriptor table.
    Owned(Vec<u8>),
}

#[derive(Clone)]
pub(crate) struct RawDiagnostic {
    pub(crate) code: u32,
    pub(crate) message: String,
    pub(crate) start: u32,
    pub(crate) length: u32,
    pub(crate) level: u8,
}

/// Everything around the node tree of a serialized buffer.
#[derive(Clone)]
pub(crate) struct Document {
    pub(crate) encoding: String,
    pub(crate) start_line: i32,
    pub(crate) line_offsets: Vec<u32>,
    /// (kind byte, start, length)
    pub(crate) comments: Vec<(u8, u32, u32)>,
    /// ((key start, key length), (value start, value length))
    pub(crate) magic_comments: Vec<((u32, u32), (u32, u32))>,
    pub(crate) data_location: Option<(u32, u32)>,
    pub(crate) errors: Vec<RawDiagnostic>,
    pub(crate) warnings: Vec<RawDiagnostic>,
    pub(crate) constants: Vec<PoolEntry>,
}

impl Document {
    /// A UTF-8 document whose line offsets are computed from `source`.
    pub(crate) fn for_source(source: &[u8]) -> Self {
        let mut line_offsets = vec![0];
        for (index, byte) in source.iter().enumerate() {
            if *byte == b'\n' {
                line_offsets.push(u32::try_from(index + 1).unwrap());
            }
        }
        Document {
            encoding: "UTF-8".to_owned(),
            start_line: 1,
            line_offsets,
            comments: Vec::new(),
            magic_comments: Vec::new(),
            data_location: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            constants: Vec::new(),
        }
    }

    pub(crate) fn write_header(&self, writer: &mut Writer) {
        writer.raw(MAGIC).raw(&VERSION).byte(0);
        writer.embedded(self.encoding.as_bytes());
        writer.varsint(self.start_line);
        writer.varuint(u32::try_from(self.line_offsets.len()).unwrap());
        for offset in &self.line_offsets {
            writer.varuint(*offset);
        }

        writer.varuint(u32::try_from(self.comments.len()).unwrap());
        for (kind, start, length) in &self.comments {
            writer.byte(*kind).location(*start, *length);
        }

        writer.varuint(u32::try_from(self.magic_comments.len()).unwrap());
        for ((key_start, key_len), (value_start, value_len)) in &self.magic_comments {
            writer
                .location(*key_start, *key_len)
                .location(*value_start, *value_len);
        }

        match self.data_location {
            Some((start, length)) => writer.byte(1).location(start, length),
            None => writer.byte(0),
        };

        for diagnostics in [&self.errors, &self.warnings] {
            writer.varuint(u32::try_from(diagnostics.len()).unwrap());
            for diagnostic in diagnostics {
                writer
                    .varuint(diagnostic.code)
                    .embedded(diagnostic.message.as_bytes())
                    .location(diagnostic.start, diagnostic.length)
                    .byte(diagnostic.level);
            }
        }
    }

    /// Serialize the document around the tree written by `tree`.
    pub(crate) fn encode(&self, tree: impl FnOnce(&mut Writer)) -> Vec<u8> {
        let mut writer = Writer::new();
        self.write_header(&mut writer);

        let pool_offset_at = writer.position();
        writer
            .u32_le(0)
            .varuint(u32::try_from(self.constants.len()).unwrap());

        if self.errors.is_empty() {
            tree(&mut writer);
        }

        let pool_offset = writer.position();
        writer.patch_u32_le(pool_offset_at, u32::try_from(pool_offset).unwrap());

        let mut owned_at = pool_offset + self.constants.len() * 8;
        let mut owned = Vec::new();
        for entry in &self.constants {
            match entry {
                PoolEntry::Source(start, length) => {
                    writer.u32_le(*start).u32_le(*length);
                }
                PoolEntry::Owned(bytes) => {
                    let start = u32::try_from(owned_at).unwrap() | OWNED_CONSTANT_BIT;
                    writer
                        .u32_le(start)
                        .u32_le(u32::try_from(bytes.len()).unwrap());
                    owned_at += bytes.len();
                    owned.extend_from_slice(bytes);
                }
            }
        }
        writer.raw(&owned);
        writer.finish()
    }
}
