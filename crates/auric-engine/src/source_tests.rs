//! Tests for the char-indexed source buffer.

use super::source::Source;

#[test]
fn length_is_in_chars() {
    let source = Source::new("héllo");
    assert_eq!(source.len(), 5);
    assert!(!source.is_empty());
    assert!(Source::new("").is_empty());
}

#[test]
fn char_at_and_slice() {
    let source = Source::new("a == b");
    assert_eq!(source.char_at(0), Some('a'));
    assert_eq!(source.char_at(2), Some('='));
    assert_eq!(source.char_at(6), None);
    assert_eq!(source.slice(2, 4), "==");
    assert_eq!(source.slice(0, 0), "");
}

#[test]
fn slice_with_non_ascii() {
    let source = Source::new("wørld");
    assert_eq!(source.slice(1, 3), "ør");
}

#[test]
fn line_col_is_one_based() {
    let source = Source::new("ab\ncd\n\nx");
    assert_eq!(source.line_col(0), (1, 1));
    assert_eq!(source.line_col(1), (1, 2));
    assert_eq!(source.line_col(3), (2, 1));
    assert_eq!(source.line_col(4), (2, 2));
    assert_eq!(source.line_col(6), (3, 1));
    assert_eq!(source.line_col(7), (4, 1));
}
