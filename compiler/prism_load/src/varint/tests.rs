use super::*;
use pretty_assertions::assert_eq;

fn decode(bytes: &[u8]) -> Result<u32, ReadError> {
    Cursor::new(bytes).read_varuint()
}

fn encoded(value: u32) -> Vec<u8> {
    let mut out = Vec::new();
    encode_varuint(value, &mut out);
    out
}

#[test]
fn test_single_byte() {
    assert_eq!(decode(&[0x00]), Ok(0));
    assert_eq!(decode(&[0x7F]), Ok(127));
}

#[test]
fn test_multi_byte() {
    assert_eq!(decode(&[0x80, 0x01]), Ok(128));
    assert_eq!(decode(&[0xAC, 0x02]), Ok(300));
    assert_eq!(decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]), Ok(u32::MAX));
}

#[test]
fn test_encoding_lengths() {
    assert_eq!(encoded(0), vec![0]);
    assert_eq!(encoded(127).len(), 1);
    assert_eq!(encoded(128).len(), 2);
    assert_eq!(encoded(u32::MAX).len(), MAX_VARINT_LEN);
}

#[test]
fn test_overflowing_fifth_byte() {
    assert_eq!(
        decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x10]),
        Err(ReadError::VarintOverflow { offset: 0 })
    );
}

#[test]
fn test_too_many_bytes() {
    assert_eq!(
        decode(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]),
        Err(ReadError::VarintOverflow { offset: 0 })
    );
}

#[test]
fn test_truncated_varint() {
    assert_eq!(
        decode(&[0x80, 0x80]),
        Err(ReadError::Truncated {
            offset: 2,
            needed: 1,
            available: 0,
        })
    );
}

#[test]
fn test_zigzag_examples() {
    assert_eq!(zigzag_decode(0), 0);
    assert_eq!(zigzag_decode(1), -1);
    assert_eq!(zigzag_decode(2), 1);
    assert_eq!(zigzag_decode(3), -2);
    assert_eq!(zigzag_decode(u32::MAX), i32::MIN);
    assert_eq!(zigzag_decode(u32::MAX - 1), i32::MAX);
}

#[test]
fn test_read_varsint() {
    let mut bytes = Vec::new();
    encode_varsint(-5, &mut bytes);
    encode_varsint(7, &mut bytes);
    let mut cursor = Cursor::new(&bytes);
    assert_eq!(cursor.read_varsint(), Ok(-5));
    assert_eq!(cursor.read_varsint(), Ok(7));
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_varint {
    use super::super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unsigned_roundtrip(value in any::<u32>()) {
            let mut bytes = Vec::new();
            encode_varuint(value, &mut bytes);
            let mut cursor = Cursor::new(&bytes);
            prop_assert_eq!(cursor.read_varuint(), Ok(value));
            prop_assert_eq!(cursor.remaining(), 0);
        }

        #[test]
        fn signed_roundtrip(value in any::<i32>()) {
            prop_assert_eq!(zigzag_decode(zigzag_encode(value)), value);
            let mut bytes = Vec::new();
            encode_varsint(value, &mut bytes);
            prop_assert_eq!(Cursor::new(&bytes).read_varsint(), Ok(value));
        }

        #[test]
        fn small_magnitudes_stay_short(value in -64i32..64) {
            let mut bytes = Vec::new();
            encode_varsint(value, &mut bytes);
            prop_assert_eq!(bytes.len(), 1);
        }

        #[test]
        fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..12)) {
            let mut cursor = Cursor::new(&bytes);
            if cursor.read_varuint().is_ok() {
                prop_assert!(cursor.position() <= MAX_VARINT_LEN);
            }
        }
    }
}
