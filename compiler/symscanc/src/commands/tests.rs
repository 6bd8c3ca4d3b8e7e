#![allow(clippy::unwrap_used)]

use std::error::Error as _;
use std::fs;

use pretty_assertions::assert_eq;
use symscan_lexer_core::Dialect;

use super::*;

#[test]
fn scan_file_renders_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.js");
    fs::write(&path, "var a = 1;\nfunction g() {}\n").unwrap();

    let table = scan_file(Dialect::JavaScript, &path).unwrap();
    let rows: Vec<_> = table.lines().skip(4).collect();
    assert_eq!(rows, ["97\ta           \tvar         \t", "3\tg           \tfunction    \t"]);
}

#[test]
fn scan_file_accepts_non_utf8_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("source.c");
    fs::write(&path, b"\xff\xfe int x;\n").unwrap();

    let table = scan_file(Dialect::C, &path).unwrap();
    assert!(table.ends_with("0\tx           \tint         \t\n"));
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("source.rb");

    let err = scan_file(Dialect::Ruby, &path).unwrap_err();
    assert_eq!(err.to_string(), format!("Cannot open {}", path.display()));
    assert!(err.source().is_some());
    assert!(matches!(err, crate::ScanError::Open { .. }));
}

#[test]
fn lex_file_dumps_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("perl.pl");
    fs::write(&path, "my $n;").unwrap();

    assert_eq!(
        lex_file(Dialect::Perl, &path).unwrap(),
        "1:1 identifier \"my\"\n1:5 variable \"$n\"\n1:8 operator \";\"\n"
    );
}

#[test]
fn scan_source_is_deterministic() {
    let source = b"sub hi { my $n = 1; } @arr = ();";
    let first = scan_source(Dialect::Perl, source);
    let second = scan_source(Dialect::Perl, source);
    assert_eq!(first.entries(), second.entries());
}
