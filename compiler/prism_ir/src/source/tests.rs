use super::*;
use pretty_assertions::assert_eq;

fn three_lines() -> SourceIndex {
    // "abcd\n" "efghij\n" "xyz"
    SourceIndex::with_lines(b"abcd\nefghij\nxyz".to_vec(), 1, vec![0, 5, 12])
}

#[test]
fn test_line_lookup() {
    let source = three_lines();
    let lines: Vec<_> = [0, 4, 5, 11, 12, 14]
        .iter()
        .map(|&offset| source.line(offset))
        .collect();
    assert_eq!(lines, vec![Ok(1), Ok(1), Ok(2), Ok(2), Ok(3), Ok(3)]);
}

#[test]
fn test_line_clamps_past_end() {
    let source = three_lines();
    assert_eq!(source.line(15), Ok(3));
    assert_eq!(source.line(u32::MAX), Ok(3));
}

#[test]
fn test_line_respects_start_line() {
    let source = SourceIndex::with_lines(b"a\nb\n".to_vec(), 10, vec![0, 2]);
    assert_eq!(source.line(0), Ok(10));
    assert_eq!(source.line(2), Ok(11));
    assert_eq!(source.line_slot(2), Ok(2));
}

#[test]
fn test_negative_start_line() {
    let source = SourceIndex::with_lines(b"a\nb".to_vec(), -1, vec![0, 2]);
    assert_eq!(source.line(0), Ok(-1));
    assert_eq!(source.line(2), Ok(0));
}

#[test]
fn test_no_line_offsets() {
    let source = SourceIndex::new(b"abc".to_vec());
    assert_eq!(source.line(0), Err(SourceError::NoLineOffsets));
}

#[test]
fn test_offset_before_first_line() {
    let source = SourceIndex::with_lines(b"abcdef".to_vec(), 1, vec![3]);
    assert_eq!(
        source.line(1),
        Err(SourceError::BeforeFirstLine {
            offset: 1,
            first_line_start: 3,
        })
    );
    assert_eq!(source.line(3), Ok(1));
}

#[test]
fn test_empty_source_clamps_to_zero() {
    let source = SourceIndex::with_lines(Vec::new(), 1, vec![0]);
    assert_eq!(source.line(0), Ok(1));
    assert_eq!(source.line(42), Ok(1));
}

#[test]
fn test_line_overflow() {
    let source = SourceIndex::with_lines(b"a\nb".to_vec(), i32::MAX, vec![0, 2]);
    assert_eq!(source.line(0), Ok(i32::MAX));
    assert_eq!(source.line(2), Err(SourceError::LineOverflow));
}

#[test]
fn test_line_start() {
    let source = three_lines();
    assert_eq!(source.line_start(1), Some(0));
    assert_eq!(source.line_start(3), Some(12));
    assert_eq!(source.line_start(4), None);
    assert_eq!(source.line_start(0), None);
}

#[test]
fn test_slice() {
    let source = three_lines();
    assert_eq!(source.slice(Location::new(5, 6)), Some(&b"efghij"[..]));
    assert_eq!(source.slice(Location::new(12, 10)), None);
}
