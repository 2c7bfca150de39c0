//! Integration tests for sprig-common crate.

use sprig_common::{BytePos, LineIndex, Position, Span};

#[test]
fn test_span_is_empty() {
    assert!(Span::from_usize(5, 5).is_empty());
    assert!(!Span::from_usize(5, 10).is_empty());
    assert!(Span::point(7).is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_span_from_huge_offsets_saturates() {
    let span = Span::from_usize(usize::MAX, usize::MAX);
    assert_eq!(span.start, BytePos(u32::MAX));
    assert!(span.is_empty());
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3, 14).to_string(), "3:14");
    assert_eq!(Position::default(), Position::START);
}

#[test]
fn test_positions_are_ordered() {
    assert!(Position::new(1, 9) < Position::new(2, 1));
    assert!(Position::new(2, 1) < Position::new(2, 2));
}

#[test]
fn test_line_index() {
    let source = "x := 1;\ny := 2\n";
    let index = LineIndex::new(source);
    assert_eq!(index.position(0usize), Position::new(1, 1));
    assert_eq!(index.position(8usize), Position::new(2, 1));
    assert_eq!(index.position(13usize), Position::new(2, 6));
    assert_eq!(index.position(source.len()), Position::new(3, 1));
}

#[test]
fn test_line_index_counts_characters() {
    let index = LineIndex::new("é := 'ü'");
    // `é` is two bytes but one column.
    assert_eq!(index.position(3usize), Position::new(1, 3));
}

#[test]
fn test_line_index_clamps_offset() {
    let index = LineIndex::new("ab");
    assert_eq!(index.position(100usize), Position::new(1, 3));
}
