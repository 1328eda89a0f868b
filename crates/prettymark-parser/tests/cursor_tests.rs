//! Integration tests for the scanning cursor.

use prettymark_parser::{Cursor, Pattern};

#[test]
fn test_read_advances() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.read(), Some('a'));
    assert_eq!(cursor.read(), Some('b'));
    assert_eq!(cursor.read(), None);
    assert!(cursor.eof());
}

#[test]
fn test_read_past_end_does_not_advance() {
    let mut cursor = Cursor::new("");
    assert!(cursor.eof());
    assert_eq!(cursor.read(), None);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_rewind() {
    let mut cursor = Cursor::new("xy");
    let _ = cursor.read();
    let _ = cursor.read();
    assert!(cursor.eof());
    cursor.rewind();
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.read(), Some('x'));
}

#[test]
fn test_remainder() {
    let mut cursor = Cursor::new("abc");
    let _ = cursor.read();
    assert_eq!(cursor.remainder(), "bc");
}

#[test]
fn test_matches_is_anchored_and_does_not_consume() {
    let cursor = Cursor::new("<!-- x");
    assert!(cursor.matches(&Pattern::Literal("<!--")));
    assert!(!cursor.matches(&Pattern::Literal("-->")));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_consume_match() {
    let mut cursor = Cursor::new("</div>");
    assert!(cursor.consume_match(&Pattern::Literal("</")));
    assert_eq!(cursor.remainder(), "div>");
    assert!(!cursor.consume_match(&Pattern::Literal("</")));
    assert_eq!(cursor.remainder(), "div>");
}

#[test]
fn test_read_until_stops_at_predicate() {
    let mut cursor = Cursor::new("hello world");
    let collected = cursor.read_until(|c| c.matches(&Pattern::Whitespace));
    assert_eq!(collected, "hello");
    assert_eq!(cursor.remainder(), " world");
}

#[test]
fn test_read_until_terminates_at_eof() {
    let mut cursor = Cursor::new("no stop here");
    let collected = cursor.read_until(|_| false);
    assert_eq!(collected, "no stop here");
    assert!(cursor.eof());
}

#[test]
fn test_read_identifier() {
    let mut cursor = Cursor::new("div_2 class");
    assert_eq!(cursor.read_identifier(), "div_2");
    assert_eq!(cursor.remainder(), " class");
    // Not at a word character: the identifier is empty.
    assert_eq!(cursor.read_identifier(), "");
}

#[test]
fn test_skip_whitespace() {
    let mut cursor = Cursor::new("  \t\nx");
    let skipped = cursor.skip_whitespace();
    assert_eq!(skipped, "  \t\n");
    assert_eq!(cursor.read(), Some('x'));
}

#[test]
fn test_tag_end_pattern() {
    assert!(Cursor::new(">").matches(&Pattern::TagEnd));
    assert!(Cursor::new("/>").matches(&Pattern::TagEnd));
    assert!(!Cursor::new("/x").matches(&Pattern::TagEnd));
    assert!(!Cursor::new("x>").matches(&Pattern::TagEnd));
}

#[test]
fn test_attr_equals_pattern() {
    let mut cursor = Cursor::new(" = value");
    assert!(cursor.consume_match(&Pattern::AttrEquals));
    assert_eq!(cursor.remainder(), "value");

    // The `=` itself is required.
    let mut cursor = Cursor::new("  value");
    assert!(!cursor.consume_match(&Pattern::AttrEquals));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_value_end_pattern() {
    assert!(Cursor::new(" ").matches(&Pattern::ValueEnd));
    assert!(Cursor::new("/").matches(&Pattern::ValueEnd));
    assert!(Cursor::new(">").matches(&Pattern::ValueEnd));
    assert!(!Cursor::new("a").matches(&Pattern::ValueEnd));
}

#[test]
fn test_multibyte_input() {
    let mut cursor = Cursor::new("héllo");
    assert_eq!(cursor.read(), Some('h'));
    assert_eq!(cursor.read(), Some('é'));
    assert_eq!(cursor.remainder(), "llo");
}
