use super::*;
use crate::error::ReadError;
use crate::format::SourceEncoding;
use crate::test_support::Writer;
use pretty_assertions::assert_eq;

const SOURCE: &[u8] = b"foo.bar(1)";

/// Decode with a loader over `fields` followed by a pool of source-slice
/// constants. Also reports whether decoding stopped exactly at the pool.
fn decode<T>(
    fields: impl FnOnce(&mut Writer),
    constants: &[(u32, u32)],
    options: &LoadOptions,
    read: impl FnOnce(&mut NodeLoader<'_, '_>) -> Result<T, LoadError>,
) -> (Result<T, LoadError>, bool) {
    let mut writer = Writer::new();
    fields(&mut writer);
    let pool_offset = writer.position();
    for (start, length) in constants {
        writer.u32_le(*start).u32_le(*length);
    }
    let bytes = writer.finish();

    let mut cursor = Cursor::new(&bytes);
    let mut pool = ConstantPool::new(
        SOURCE,
        SourceEncoding::Utf8,
        bytes.len(),
        u32::try_from(pool_offset).unwrap(),
        u32::try_from(constants.len()).unwrap(),
    )
    .unwrap();
    let result = read(&mut NodeLoader::new(&mut cursor, &mut pool, SOURCE, options));
    (result, cursor.position() == pool_offset)
}

fn decode_default<T>(
    fields: impl FnOnce(&mut Writer),
    read: impl FnOnce(&mut NodeLoader<'_, '_>) -> Result<T, LoadError>,
) -> Result<T, LoadError> {
    let (result, consumed) = decode(fields, &[(0, 3), (4, 3)], &LoadOptions::default(), read);
    if result.is_ok() {
        assert!(consumed, "decoder left bytes before the pool");
    }
    result
}

fn id(one_based: u32) -> ConstantId {
    ConstantId::new(one_based).unwrap()
}

// Primitives

#[test]
fn test_source_string() {
    let value = decode_default(|w| {
        w.source_string(4, 3);
    }, |loader| loader.load_string());
    assert_eq!(value.unwrap().as_bytes(), b"bar");
}

#[test]
fn test_embedded_string() {
    let value = decode_default(|w| {
        w.embedded_string(b"\xFFbin");
    }, |loader| loader.load_string());
    assert_eq!(value.unwrap().as_bytes(), b"\xFFbin");
}

#[test]
fn test_invalid_string_tag() {
    let value = decode_default(|w| {
        w.byte(3);
    }, |loader| loader.load_string());
    assert_eq!(value, Err(LoadError::InvalidStringTag { tag: 3 }));
}

#[test]
fn test_source_string_out_of_bounds() {
    let value = decode_default(|w| {
        w.source_string(8, 5);
    }, |loader| loader.load_string());
    assert_eq!(
        value,
        Err(LoadError::SourceSliceOutOfBounds {
            start: 8,
            length: 5,
            available: SOURCE.len(),
        })
    );
}

#[test]
fn test_small_integer() {
    let value = decode_default(|w| {
        w.byte(0).varuint(1).varuint(42);
    }, |loader| loader.load_integer());
    assert_eq!(value, Ok(BigInt::from(42)));
}

#[test]
fn test_negative_multi_word_integer() {
    // -(2^32 + 5)
    let value = decode_default(|w| {
        w.byte(1).varuint(2).varuint(5).varuint(1);
    }, |loader| loader.load_integer());
    assert_eq!(value, Ok(BigInt::from(-(1i64 << 32) - 5)));
}

#[test]
fn test_large_integer() {
    // 2^64
    let value = decode_default(|w| {
        w.byte(0).varuint(3).varuint(0).varuint(0).varuint(1);
    }, |loader| loader.load_integer());
    assert_eq!(value, Ok(BigInt::from(1u128 << 64)));
}

#[test]
fn test_empty_integer() {
    let value = decode_default(|w| {
        w.byte(0).varuint(0);
    }, |loader| loader.load_integer());
    assert_eq!(value, Err(LoadError::EmptyInteger));
}

#[test]
fn test_double() {
    let value = decode_default(|w| {
        w.f64_le(-2.5);
    }, |loader| loader.load_double());
    assert_eq!(value, Ok(-2.5));
}

#[test]
fn test_flags_range() {
    let value = decode_default(|w| {
        w.varuint(0x7FFF);
    }, |loader| loader.load_flags());
    assert_eq!(value.map(NodeFlags::bits), Ok(0x7FFF));

    let value = decode_default(|w| {
        w.varuint(0x8000);
    }, |loader| loader.load_flags());
    assert_eq!(value, Err(LoadError::FlagsOutOfRange { flags: 0x8000 }));
}

#[test]
fn test_optional_constant() {
    let value = decode_default(|w| {
        w.absent().varuint(2);
    }, |loader| {
        Ok((loader.load_optional_constant()?, loader.load_optional_constant()?))
    });
    assert_eq!(value, Ok((None, Some(id(2)))));
}

#[test]
fn test_constant_list() {
    let value = decode_default(|w| {
        w.varuint(3).varuint(1).varuint(2).varuint(1);
    }, |loader| loader.load_constants());
    assert_eq!(value, Ok(vec![id(1), id(2), id(1)]));
}

#[test]
fn test_optional_node_absent_consumes_one_byte() {
    let value = decode_default(|w| {
        w.absent();
    }, |loader| loader.load_optional_node());
    assert_eq!(value, Ok(None));
}

// Nodes

fn write_call(w: &mut Writer, node_id: u32, name: u32) {
    // receiver, name, arguments, block
    w.node_with_flags(NodeTag::Call, node_id, 0, 3, 8)
        .absent()
        .varuint(name)
        .absent()
        .absent();
}

#[test]
fn test_call_node() {
    let node = decode_default(|w| write_call(w, 7, 1), |loader| loader.load_node()).unwrap();
    assert_eq!(node.id, 7);
    assert_eq!(node.location, Location::new(0, 3));
    assert!(node.flags.contains(prism_ir::CallFlags::VARIABLE_CALL));
    assert!(!node.newline);
    assert_eq!(
        node.kind,
        NodeKind::Call {
            receiver: None,
            name: id(1),
            arguments: None,
            block: None,
        }
    );
}

#[test]
fn test_nested_nodes() {
    // foo.bar(1)
    let node = decode_default(
        |w| {
            w.node(NodeTag::Call, 1, 0, 10);
            write_call(w, 2, 1);
            w.varuint(2);
            w.node(NodeTag::Arguments, 3, 8, 1).varuint(1);
            w.node_with_flags(NodeTag::Integer, 4, 8, 1, 8)
                .byte(0)
                .varuint(1)
                .varuint(1);
            w.absent();
        },
        |loader| loader.load_node(),
    )
    .unwrap();
    let ids: Vec<_> = node.children().iter().map(|child| child.id).collect();
    assert_eq!(ids, vec![2, 3]);
    let NodeKind::Call { arguments: Some(arguments), .. } = &node.kind else {
        panic!("expected call with arguments");
    };
    let NodeKind::Arguments { arguments } = &arguments.kind else {
        panic!("expected arguments");
    };
    assert_eq!(
        arguments[0].kind,
        NodeKind::Integer {
            value: BigInt::from(1),
        }
    );
}

#[test]
fn test_scalar_fields() {
    let node = decode_default(
        |w| {
            w.node(NodeTag::Statements, 1, 0, 10).varuint(3);
            w.node(NodeTag::LocalVariableRead, 2, 0, 3)
                .varuint(1)
                .varuint(2);
            w.node(NodeTag::NumberedParameters, 3, 0, 0).byte(9);
            w.node(NodeTag::Float, 4, 0, 3).f64_le(1.5);
        },
        |loader| loader.load_node(),
    )
    .unwrap();
    let kinds: Vec<_> = node.children().iter().map(|child| child.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::LocalVariableRead {
                name: id(1),
                depth: 2,
            },
            NodeKind::NumberedParameters { maximum: 9 },
            NodeKind::Float { value: 1.5 },
        ]
    );
}

#[test]
fn test_unknown_node_type() {
    for tag in [0u8, 152, 255] {
        let value = decode_default(|w| {
            w.byte(tag);
        }, |loader| loader.load_node());
        assert_eq!(value, Err(LoadError::UnknownNodeType { tag }));
    }
}

#[test]
fn test_field_failure_names_node_and_field() {
    // Constant 9 is outside the two-entry pool; the name field starts at offset 6.
    let error = decode_default(|w| write_call(w, 1, 9), |loader| loader.load_node()).unwrap_err();
    assert_eq!(
        error.contexts(),
        vec![&Context::Field {
            node: NodeTag::Call,
            field: "name",
            offset: 6,
        }]
    );
    assert_eq!(
        error.root_cause(),
        &LoadError::ConstantIndexOutOfRange { index: 9, len: 2 }
    );
}

#[test]
fn test_child_failures_are_not_rewrapped() {
    let error = decode_default(
        |w| {
            w.node(NodeTag::Statements, 1, 0, 3).varuint(1);
            write_call(w, 2, 9);
        },
        |loader| loader.load_node(),
    )
    .unwrap_err();
    assert_eq!(error.contexts().len(), 1);
}

#[test]
fn test_truncated_node() {
    let (value, _) = decode(
        |w| {
            w.node(NodeTag::Call, 1, 0, 3).absent();
        },
        &[],
        &LoadOptions::default(),
        |loader| loader.load_node(),
    );
    assert!(matches!(
        value.unwrap_err().root_cause(),
        LoadError::Read(ReadError::Truncated { .. })
    ));
}

// Def nodes

fn write_def(w: &mut Writer) {
    // def foo; end
    w.def_node(1, 0, 12, |w| {
        w.varuint(1).absent().absent().absent().varuint(0);
    });
}

#[test]
fn test_def_node_length() {
    let node = decode_default(write_def, |loader| loader.load_node()).unwrap();
    assert_eq!(
        node.kind,
        NodeKind::Def {
            name: id(1),
            receiver: None,
            parameters: None,
            body: None,
            locals: Vec::new(),
        }
    );
}

fn corrupt_def(w: &mut Writer) {
    let mut def = Writer::new();
    write_def(&mut def);
    let mut bytes = def.finish();
    // tag, id, start, length, then the serialized length
    bytes[4] += 1;
    w.raw(&bytes);
}

#[test]
fn test_def_length_mismatch() {
    let value = decode_default(corrupt_def, |loader| loader.load_node());
    assert!(matches!(
        value,
        Err(LoadError::DefLengthMismatch { actual, declared }) if declared as usize == actual + 1
    ));
}

#[test]
fn test_def_length_check_can_be_disabled() {
    let options = LoadOptions::default().without_def_length_checks();
    let (value, consumed) = decode(corrupt_def, &[(0, 3)], &options, |loader| loader.load_node());
    assert!(value.is_ok());
    assert!(consumed);
}

// Depth

fn write_parentheses(w: &mut Writer, depth: u32) {
    for id in 0..depth {
        w.node(NodeTag::Parentheses, id, 0, 0);
    }
    w.absent();
}

#[test]
fn test_nesting_limit() {
    let options = LoadOptions::default().with_max_depth(10);
    let (value, _) = decode(|w| write_parentheses(w, 10), &[], &options, |loader| loader.load_node());
    assert!(value.is_ok());

    let (value, _) = decode(|w| write_parentheses(w, 11), &[], &options, |loader| loader.load_node());
    assert_eq!(value, Err(LoadError::NestingTooDeep { max_depth: 10 }));
}

#[test]
fn test_deep_nesting_within_default_limit() {
    let (value, consumed) = decode(
        |w| write_parentheses(w, 2_000),
        &[],
        &LoadOptions::default(),
        |loader| loader.load_node(),
    );
    assert!(value.is_ok());
    assert!(consumed);
}
