use super::*;

// === Basic Navigation ===

#[test]
fn read_returns_bytes_in_order() {
    let mut cursor = Cursor::new(b"abc");
    assert_eq!(cursor.read(), Some(b'a'));
    assert_eq!(cursor.read(), Some(b'b'));
    assert_eq!(cursor.read(), Some(b'c'));
    assert_eq!(cursor.read(), None);
}

#[test]
fn read_past_end_keeps_returning_none() {
    let mut cursor = Cursor::new(b"x");
    assert_eq!(cursor.read(), Some(b'x'));
    assert_eq!(cursor.read(), None);
    assert_eq!(cursor.read(), None);
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new(b"");
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), None);
}

#[test]
fn interior_null_is_data() {
    let mut cursor = Cursor::new(b"a\0b");
    cursor.read();
    assert_eq!(cursor.read(), Some(0));
    assert!(!cursor.is_eof());
    assert_eq!(cursor.read(), Some(b'b'));
}

// === Pushback ===

#[test]
fn unread_returns_last_byte() {
    let mut cursor = Cursor::new(b"ab");
    assert_eq!(cursor.read(), Some(b'a'));
    cursor.unread();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.read(), Some(b'a'));
    assert_eq!(cursor.read(), Some(b'b'));
}

#[test]
fn peek_does_not_consume() {
    let mut cursor = Cursor::new(b"xy");
    assert_eq!(cursor.peek(), Some(b'x'));
    assert_eq!(cursor.peek(), Some(b'x'));
    assert_eq!(cursor.read(), Some(b'x'));
}

// === Slicing ===

#[test]
fn slice_from_covers_consumed_bytes() {
    let mut cursor = Cursor::new(b"hello world");
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.slice_from(0), b"hello");
    assert_eq!(cursor.slice_from(2), b"llo");
}

// === eat_while ===

#[test]
fn eat_while_stops_at_first_mismatch() {
    let mut cursor = Cursor::new(b"aaab");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.peek(), Some(b'b'));
}

#[test]
fn eat_while_stops_at_end() {
    let mut cursor = Cursor::new(b"aaa");
    cursor.eat_while(|b| b == b'a');
    assert!(cursor.is_eof());
}

// === Whitespace ===

#[test]
fn is_space_matches_c_isspace() {
    for byte in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
        assert!(is_space(byte), "{byte:#04x} should be space");
    }
    for byte in [b'a', b'0', b'_', 0, 0x7F, 0xA0] {
        assert!(!is_space(byte), "{byte:#04x} should not be space");
    }
}

#[test]
fn peek_non_space_skips_all_whitespace_kinds() {
    let mut cursor = Cursor::new(b" \t\n\x0b\x0c\r(x");
    assert_eq!(cursor.peek_non_space(), Some(b'('));
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.read(), Some(b'('));
}

#[test]
fn peek_non_space_at_end() {
    let mut cursor = Cursor::new(b"   ");
    assert_eq!(cursor.peek_non_space(), None);
    assert!(cursor.is_eof());
}

// === skip_line ===

#[test]
fn skip_line_consumes_newline() {
    let mut cursor = Cursor::new(b"comment\nnext");
    assert!(cursor.skip_line());
    assert_eq!(cursor.peek(), Some(b'n'));
    assert_eq!(cursor.pos(), 8);
}

#[test]
fn skip_line_without_newline_hits_eof() {
    let mut cursor = Cursor::new(b"trailing comment");
    assert!(!cursor.skip_line());
    assert!(cursor.is_eof());
}

// === skip_past ===

#[test]
fn skip_past_consumes_through_needle() {
    let mut cursor = Cursor::new(b" body */ rest");
    let consumed = cursor.skip_past(b"*/");
    assert_eq!(consumed, b" body */");
    assert_eq!(cursor.read(), Some(b' '));
}

#[test]
fn skip_past_unterminated_consumes_everything() {
    let mut cursor = Cursor::new(b" never closed");
    let consumed = cursor.skip_past(b"*/");
    assert_eq!(consumed, b" never closed");
    assert!(cursor.is_eof());
}

#[test]
fn skip_past_immediate_needle() {
    let mut cursor = Cursor::new(b"*/x");
    assert_eq!(cursor.skip_past(b"*/"), b"*/");
    assert_eq!(cursor.peek(), Some(b'x'));
}
