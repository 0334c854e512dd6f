use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_from_range_saturates() {
    let span = Span::from_range(3..usize::MAX);
    assert_eq!(span.start, 3);
    assert_eq!(span.end, u32::MAX);
}

#[test]
fn test_point_span_is_empty() {
    assert!(Span::point(7).is_empty());
}

#[test]
fn test_line_table_single_line() {
    let source = "let x = 5;";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.offset_to_line_col(source, 4), (1, 5));
}

#[test]
fn test_line_table_multi_line() {
    let source = "a\nbb\nccc";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 3), (2, 2));
    assert_eq!(table.offset_to_line_col(source, 7), (3, 3));
}

#[test]
fn test_line_table_counts_chars_not_bytes() {
    let source = "\"é\" @";
    let table = LineOffsetTable::build(source);
    // `@` sits after a two-byte character.
    assert_eq!(table.offset_to_line_col(source, 5), (1, 5));
}

#[test]
fn test_line_table_offset_past_end() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 10), (1, 3));
}
