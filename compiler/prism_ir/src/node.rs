//! Syntax tree nodes.
//!
//! # Node Table
//!
//! [`for_each_node_kind!`] is the single source of truth for node layout: the
//! wire tag, the kind name and every semantic field with its field kind, in
//! serialization order. It hands the whole table to a callback macro, so each
//! consumer (the [`NodeKind`] enum and its traversal here, the binary loader
//! in `prism_load`) is generated from the same rows and stays exhaustive.
//!
//! Field kinds:
//!
//! | kind           | Rust type               |
//! |----------------|-------------------------|
//! | `node`         | `Box<Node>`             |
//! | `opt_node`     | `Option<Box<Node>>`     |
//! | `nodes`        | `Vec<Node>`             |
//! | `constant`     | [`ConstantId`]          |
//! | `opt_constant` | `Option<ConstantId>`    |
//! | `constants`    | `Vec<ConstantId>`       |
//! | `string`       | [`RawString`]           |
//! | `integer`      | [`BigInt`]              |
//! | `double`       | `f64`                   |
//! | `uint32`       | `u32`                   |
//! | `uint8`        | `u8`                    |

use std::borrow::Cow;
use std::fmt;

use num_bigint::BigInt;

use crate::{ConstantId, Location, NodeFlags, SourceError, SourceIndex};

/// Invoke `$callback!` with the full node table.
///
/// Rows have the shape `tag => Kind { field: field_kind, ... }`, optionally
/// preceded by `#[name = "..."]` when the wire name is not `Kind` + `"Node"`.
/// Tags are assigned alphabetically by wire name.
#[macro_export]
macro_rules! for_each_node_kind {
    ($callback:ident) => {
        $callback! {
            1 => AliasGlobalVariable { new_name: node, old_name: node },
            2 => AliasMethod { new_name: node, old_name: node },
            3 => AlternationPattern { left: node, right: node },
            4 => And { left: node, right: node },
            5 => Arguments { arguments: nodes },
            6 => Array { elements: nodes },
            7 => ArrayPattern { constant: opt_node, requireds: nodes, rest: opt_node, posts: nodes },
            8 => Assoc { key: node, value: node },
            9 => AssocSplat { value: opt_node },
            10 => BackReferenceRead { name: constant },
            11 => Begin {
                statements: opt_node,
                rescue_clause: opt_node,
                else_clause: opt_node,
                ensure_clause: opt_node,
            },
            12 => BlockArgument { expression: opt_node },
            13 => BlockLocalVariable { name: constant },
            14 => Block { locals: constants, parameters: opt_node, body: opt_node },
            15 => BlockParameter { name: opt_constant },
            16 => BlockParameters { parameters: opt_node, locals: nodes },
            17 => Break { arguments: opt_node },
            18 => CallAndWrite { receiver: opt_node, read_name: constant, write_name: constant, value: node },
            19 => Call { receiver: opt_node, name: constant, arguments: opt_node, block: opt_node },
            20 => CallOperatorWrite {
                receiver: opt_node,
                read_name: constant,
                write_name: constant,
                binary_operator: constant,
                value: node,
            },
            21 => CallOrWrite { receiver: opt_node, read_name: constant, write_name: constant, value: node },
            22 => CallTarget { receiver: node, name: constant },
            23 => CapturePattern { value: node, target: node },
            24 => CaseMatch { predicate: opt_node, conditions: nodes, else_clause: opt_node },
            25 => Case { predicate: opt_node, conditions: nodes, else_clause: opt_node },
            26 => Class {
                locals: constants,
                constant_path: node,
                superclass: opt_node,
                body: opt_node,
                name: constant,
            },
            27 => ClassVariableAndWrite { name: constant, value: node },
            28 => ClassVariableOperatorWrite { name: constant, value: node, binary_operator: constant },
            29 => ClassVariableOrWrite { name: constant, value: node },
            30 => ClassVariableRead { name: constant },
            31 => ClassVariableTarget { name: constant },
            32 => ClassVariableWrite { name: constant, value: node },
            33 => ConstantAndWrite { name: constant, value: node },
            34 => ConstantOperatorWrite { name: constant, value: node, binary_operator: constant },
            35 => ConstantOrWrite { name: constant, value: node },
            36 => ConstantPathAndWrite { target: node, value: node },
            37 => ConstantPath { parent: opt_node, name: opt_constant },
            38 => ConstantPathOperatorWrite { target: node, value: node, binary_operator: constant },
            39 => ConstantPathOrWrite { target: node, value: node },
            40 => ConstantPathTarget { parent: opt_node, name: opt_constant },
            41 => ConstantPathWrite { target: node, value: node },
            42 => ConstantRead { name: constant },
            43 => ConstantTarget { name: constant },
            44 => ConstantWrite { name: constant, value: node },
            45 => Def {
                name: constant,
                receiver: opt_node,
                parameters: opt_node,
                body: opt_node,
                locals: constants,
            },
            46 => Defined { value: node },
            47 => Else { statements: opt_node },
            48 => EmbeddedStatements { statements: opt_node },
            49 => EmbeddedVariable { variable: node },
            50 => Ensure { statements: opt_node },
            51 => False {},
            52 => FindPattern { constant: opt_node, left: node, requireds: nodes, right: node },
            53 => FlipFlop { left: opt_node, right: opt_node },
            54 => Float { value: double },
            55 => For { index: node, collection: node, statements: opt_node },
            56 => ForwardingArguments {},
            57 => ForwardingParameter {},
            58 => ForwardingSuper { block: opt_node },
            59 => GlobalVariableAndWrite { name: constant, value: node },
            60 => GlobalVariableOperatorWrite { name: constant, value: node, binary_operator: constant },
            61 => GlobalVariableOrWrite { name: constant, value: node },
            62 => GlobalVariableRead { name: constant },
            63 => GlobalVariableTarget { name: constant },
            64 => GlobalVariableWrite { name: constant, value: node },
            65 => Hash { elements: nodes },
            66 => HashPattern { constant: opt_node, elements: nodes, rest: opt_node },
            67 => If { predicate: node, statements: opt_node, subsequent: opt_node },
            68 => Imaginary { numeric: node },
            69 => Implicit { value: node },
            70 => ImplicitRest {},
            71 => In { pattern: node, statements: opt_node },
            72 => IndexAndWrite { receiver: opt_node, arguments: opt_node, block: opt_node, value: node },
            73 => IndexOperatorWrite {
                receiver: opt_node,
                arguments: opt_node,
                block: opt_node,
                binary_operator: constant,
                value: node,
            },
            74 => IndexOrWrite { receiver: opt_node, arguments: opt_node, block: opt_node, value: node },
            75 => IndexTarget { receiver: node, arguments: opt_node, block: opt_node },
            76 => InstanceVariableAndWrite { name: constant, value: node },
            77 => InstanceVariableOperatorWrite { name: constant, value: node, binary_operator: constant },
            78 => InstanceVariableOrWrite { name: constant, value: node },
            79 => InstanceVariableRead { name: constant },
            80 => InstanceVariableTarget { name: constant },
            81 => InstanceVariableWrite { name: constant, value: node },
            82 => Integer { value: integer },
            83 => InterpolatedMatchLastLine { parts: nodes },
            84 => InterpolatedRegularExpression { parts: nodes },
            85 => InterpolatedString { parts: nodes },
            86 => InterpolatedSymbol { parts: nodes },
            87 => InterpolatedXString { parts: nodes },
            88 => ItLocalVariableRead {},
            89 => ItParameters {},
            90 => KeywordHash { elements: nodes },
            91 => KeywordRestParameter { name: opt_constant },
            92 => Lambda { locals: constants, parameters: opt_node, body: opt_node },
            93 => LocalVariableAndWrite { value: node, name: constant, depth: uint32 },
            94 => LocalVariableOperatorWrite {
                value: node,
                name: constant,
                binary_operator: constant,
                depth: uint32,
            },
            95 => LocalVariableOrWrite { value: node, name: constant, depth: uint32 },
            96 => LocalVariableRead { name: constant, depth: uint32 },
            97 => LocalVariableTarget { name: constant, depth: uint32 },
            98 => LocalVariableWrite { name: constant, depth: uint32, value: node },
            99 => MatchLastLine { unescaped: string },
            100 => MatchPredicate { value: node, pattern: node },
            101 => MatchRequired { value: node, pattern: node },
            102 => MatchWrite { call: node, targets: nodes },
            103 => Missing {},
            104 => Module { locals: constants, constant_path: node, body: opt_node, name: constant },
            105 => MultiTarget { lefts: nodes, rest: opt_node, rights: nodes },
            106 => MultiWrite { lefts: nodes, rest: opt_node, rights: nodes, value: node },
            107 => Next { arguments: opt_node },
            108 => Nil {},
            109 => NoKeywordsParameter {},
            110 => NumberedParameters { maximum: uint8 },
            111 => NumberedReferenceRead { number: uint32 },
            112 => OptionalKeywordParameter { name: constant, value: node },
            113 => OptionalParameter { name: constant, value: node },
            114 => Or { left: node, right: node },
            115 => Parameters {
                requireds: nodes,
                optionals: nodes,
                rest: opt_node,
                posts: nodes,
                keywords: nodes,
                keyword_rest: opt_node,
                block: opt_node,
            },
            116 => Parentheses { body: opt_node },
            117 => PinnedExpression { expression: node },
            118 => PinnedVariable { variable: node },
            119 => PostExecution { statements: opt_node },
            120 => PreExecution { statements: opt_node },
            121 => Program { locals: constants, statements: node },
            122 => Range { left: opt_node, right: opt_node },
            123 => Rational { numerator: integer, denominator: integer },
            124 => Redo {},
            125 => RegularExpression { unescaped: string },
            126 => RequiredKeywordParameter { name: constant },
            127 => RequiredParameter { name: constant },
            128 => RescueModifier { expression: node, rescue_expression: node },
            129 => Rescue { exceptions: nodes, reference: opt_node, statements: opt_node, subsequent: opt_node },
            130 => RestParameter { name: opt_constant },
            131 => Retry {},
            132 => Return { arguments: opt_node },
            #[name = "SelfNode"]
            133 => SelfKeyword {},
            134 => ShareableConstant { write: node },
            135 => SingletonClass { locals: constants, expression: node, body: opt_node },
            136 => SourceEncoding {},
            137 => SourceFile { filepath: string },
            138 => SourceLine {},
            139 => Splat { expression: opt_node },
            140 => Statements { body: nodes },
            141 => String { unescaped: string },
            142 => Super { arguments: opt_node, block: opt_node },
            143 => Symbol { unescaped: string },
            144 => True {},
            145 => Undef { names: nodes },
            146 => Unless { predicate: node, statements: opt_node, else_clause: opt_node },
            147 => Until { predicate: node, statements: opt_node },
            148 => When { conditions: nodes, statements: opt_node },
            149 => While { predicate: node, statements: opt_node },
            150 => XString { unescaped: string },
            151 => Yield { arguments: opt_node },
        }
    };
}

macro_rules! field_type {
    (node) => { Box<Node> };
    (opt_node) => { Option<Box<Node>> };
    (nodes) => { Vec<Node> };
    (constant) => { ConstantId };
    (opt_constant) => { Option<ConstantId> };
    (constants) => { Vec<ConstantId> };
    (string) => { RawString };
    (integer) => { BigInt };
    (double) => { f64 };
    (uint32) => { u32 };
    (uint8) => { u8 };
}

macro_rules! visit_field {
    (node, $value:ident, $f:ident) => {{
        $f(&**$value);
    }};
    (opt_node, $value:ident, $f:ident) => {{
        if let Some(child) = $value {
            $f(&**child);
        }
    }};
    (nodes, $value:ident, $f:ident) => {{
        for child in $value {
            $f(child);
        }
    }};
    ($other:ident, $value:ident, $f:ident) => {{
        let _ = $value;
    }};
}

macro_rules! visit_field_mut {
    (node, $value:ident, $f:ident) => {{
        $f(&mut **$value)?;
    }};
    (opt_node, $value:ident, $f:ident) => {{
        if let Some(child) = $value {
            $f(&mut **child)?;
        }
    }};
    (nodes, $value:ident, $f:ident) => {{
        for child in $value.iter_mut() {
            $f(child)?;
        }
    }};
    ($other:ident, $value:ident, $f:ident) => {{
        let _ = $value;
    }};
}

macro_rules! node_name {
    ($kind:ident) => {
        concat!(stringify!($kind), "Node")
    };
    ($kind:ident, $name:literal) => {
        $name
    };
}

macro_rules! define_node_kinds {
    ($(
        $(#[name = $name:literal])?
        $tag:literal => $kind:ident { $($field:ident: $ty:ident),* $(,)? }
    ),* $(,)?) => {
        /// Kind-specific payload of a [`Node`], one variant per node kind.
        #[derive(Clone, Debug, PartialEq)]
        pub enum NodeKind {
            $( $kind { $( $field: field_type!($ty) ),* }, )*
        }

        /// Wire tag of a node kind.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        #[repr(u8)]
        pub enum NodeTag {
            $( $kind = $tag, )*
        }

        impl NodeTag {
            /// Every tag, in wire order.
            pub const ALL: &'static [NodeTag] = &[$( NodeTag::$kind, )*];

            /// Decode a wire tag byte.
            pub fn from_byte(byte: u8) -> Option<Self> {
                match byte {
                    $( $tag => Some(NodeTag::$kind), )*
                    _ => None,
                }
            }

            /// Wire name, e.g. `"CallNode"`.
            pub fn name(self) -> &'static str {
                match self {
                    $( NodeTag::$kind => node_name!($kind $(, $name)?), )*
                }
            }
        }

        impl NodeKind {
            pub fn tag(&self) -> NodeTag {
                match self {
                    $( NodeKind::$kind { .. } => NodeTag::$kind, )*
                }
            }

            /// Call `f` on each direct child, in field order.
            pub fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a Node)) {
                match self {
                    $( NodeKind::$kind { $( $field ),* } => {
                        $( visit_field!($ty, $field, f); )*
                    } )*
                }
            }

            /// Call `f` on each direct child mutably, in field order,
            /// stopping at the first error.
            pub fn try_for_each_child_mut<E>(
                &mut self,
                f: &mut dyn FnMut(&mut Node) -> Result<(), E>,
            ) -> Result<(), E> {
                match self {
                    $( NodeKind::$kind { $( $field ),* } => {
                        $( visit_field_mut!($ty, $field, f); )*
                    } )*
                }
                Ok(())
            }
        }
    };
}

for_each_node_kind!(define_node_kinds);

impl fmt::Display for NodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded syntax tree node.
///
/// Every node owns its children. The `newline` flag is the only field set
/// after construction, by the loader's newline-marking pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Parser-assigned id, unique within one tree.
    pub id: u32,
    pub location: Location,
    pub flags: NodeFlags,
    /// First node starting on its line within the enclosing scope.
    pub newline: bool,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: u32, location: Location, flags: NodeFlags, kind: NodeKind) -> Self {
        Node {
            id,
            location,
            flags,
            newline: false,
            kind,
        }
    }

    #[inline]
    pub fn tag(&self) -> NodeTag {
        self.kind.tag()
    }

    /// Direct children in field order.
    pub fn children(&self) -> Vec<&Node> {
        let mut children = Vec::new();
        self.kind.for_each_child(&mut |child| children.push(child));
        children
    }

    /// Claim this node's start line in `marked`, setting `newline` if the
    /// line was unclaimed.
    ///
    /// `marked` is indexed by [`SourceIndex::line_slot`] and has
    /// `1 + line_count()` entries.
    pub fn set_newline_flag(
        &mut self,
        source: &SourceIndex,
        marked: &mut [bool],
    ) -> Result<(), SourceError> {
        let slot = source.line_slot(self.location.start_offset)?;
        if let Some(claimed) = marked.get_mut(slot) {
            if !*claimed {
                *claimed = true;
                self.newline = true;
            }
        }
        Ok(())
    }
}

/// Bytes of a string-valued field.
///
/// Ruby strings need not be valid UTF-8, so the bytes are kept as-is.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RawString(Box<[u8]>);

impl RawString {
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        RawString(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The bytes as `&str`, if they are valid UTF-8.
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl fmt::Debug for RawString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl From<Vec<u8>> for RawString {
    fn from(bytes: Vec<u8>) -> Self {
        RawString(bytes.into_boxed_slice())
    }
}

impl From<&[u8]> for RawString {
    fn from(bytes: &[u8]) -> Self {
        RawString(bytes.into())
    }
}
