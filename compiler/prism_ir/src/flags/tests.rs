use super::*;

#[test]
fn test_node_flags_range() {
    assert_eq!(NodeFlags::new(0), Some(NodeFlags::EMPTY));
    assert_eq!(NodeFlags::new(0x7FFF).map(NodeFlags::bits), Some(0x7FFF));
    assert_eq!(NodeFlags::new(0x8000), None);
}

#[test]
fn test_call_flags_view() {
    let Some(flags) = NodeFlags::new(4 | 16) else {
        panic!("in range");
    };
    let call = flags.view::<CallFlags>();
    assert!(call.contains(CallFlags::SAFE_NAVIGATION));
    assert!(call.contains(CallFlags::ATTRIBUTE_WRITE));
    assert!(!call.contains(CallFlags::VARIABLE_CALL));
    assert!(flags.contains(CallFlags::SAFE_NAVIGATION));
}

#[test]
fn test_view_retains_unknown_bits() {
    let Some(flags) = NodeFlags::new(1 << 14) else {
        panic!("in range");
    };
    assert_eq!(flags.view::<RangeFlags>().bits(), 1 << 14);
    assert!(!flags.contains(RangeFlags::EXCLUDE_END));
}

#[test]
fn test_integer_radix() {
    let radix = |bits: u16| NodeFlags::new(bits).map(|f| f.view::<IntegerBaseFlags>().radix());
    assert_eq!(radix(4), Some(2));
    assert_eq!(radix(8), Some(10));
    assert_eq!(radix(16), Some(8));
    assert_eq!(radix(32), Some(16));
    assert_eq!(radix(0), Some(10));
}

#[test]
fn test_regexp_encoding_bits() {
    let Some(flags) = NodeFlags::new(1 << 9 | 1 << 2) else {
        panic!("in range");
    };
    let regexp = flags.view::<RegularExpressionFlags>();
    assert_eq!(
        regexp,
        RegularExpressionFlags::UTF_8 | RegularExpressionFlags::IGNORE_CASE
    );
}
