//! Single-pass tokenizer producing [`Token`] values with row/column tracking.
//!
//! # Dispatch
//!
//! Each call to [`Tokenizer::next_token`] reads bytes in priority order:
//! whitespace, comments, string literals, digit runs, identifier runs,
//! operators, and finally a one-byte `unknown` fallback. Comment and
//! whitespace bytes are consumed silently and dispatch restarts.
//!
//! # Position Accounting
//!
//! Counters advance for every byte consumed for good (newline: next row,
//! column 1). A byte read only to find the end of a run is pushed back with
//! the column already advanced and the row untouched, so columns after a
//! pushback run one ahead while rows stay exact.
//!
//! # Lone Marker Bytes
//!
//! In dialects whose line comment is `//`, a `/` that does not open a
//! comment is dropped and the byte after it is classified on its own,
//! starting at the string-literal rule. A space after a lone slash therefore
//! comes out as an `unknown` token.

use crate::cursor::{is_space, Cursor};
use crate::dialect::{Dialect, LexProfile};
use crate::token::{Token, TokenKind};

/// What the tokenizer found at a possible comment marker.
enum Marker {
    /// The byte does not start any comment marker.
    NotMarker,
    /// A comment was skipped.
    Skipped,
    /// A two-byte marker's first byte stood alone and was dropped.
    Dropped,
}

/// Dialect-parameterized tokenizer over an in-memory byte buffer.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    dialect: Dialect,
    profile: &'static LexProfile,
    row: u32,
    col: u32,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a [u8], dialect: Dialect) -> Self {
        Self {
            cursor: Cursor::new(source),
            dialect,
            profile: dialect.profile(),
            row: 1,
            col: 1,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Current `(row, col)` counters.
    pub fn position(&self) -> (u32, u32) {
        (self.row, self.col)
    }

    /// Net number of input bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor.pos()
    }

    /// Skip whitespace and return the next non-whitespace byte without
    /// consuming it. Row and column are not updated for the skipped bytes.
    pub fn peek_non_space(&mut self) -> Option<u8> {
        self.cursor.peek_non_space()
    }

    /// Produce the next token.
    ///
    /// Returns a [`TokenKind::Eof`] token once the input is exhausted, and
    /// keeps returning it on later calls.
    pub fn next_token(&mut self) -> Token {
        loop {
            let (row, col) = (self.row, self.col);
            let start = self.cursor.pos();
            let Some(byte) = self.bump() else {
                return Token::eof(row, col);
            };
            if is_space(byte) {
                continue;
            }
            match self.comment_marker(byte) {
                Marker::NotMarker => return self.classify(byte, start, row, col),
                Marker::Skipped => continue,
                Marker::Dropped => {
                    let (row, col) = (self.row, self.col);
                    let start = self.cursor.pos();
                    let Some(next) = self.bump() else {
                        return Token::eof(row, col);
                    };
                    return self.classify(next, start, row, col);
                }
            }
        }
    }

    // ─── Byte Access ────────────────────────────────────────────────

    /// Consume one byte for good, advancing the counters.
    fn bump(&mut self) -> Option<u8> {
        let byte = self.cursor.read()?;
        self.count(byte);
        Some(byte)
    }

    /// Read a byte that may be pushed back. The column advances, the row
    /// does not.
    fn read_ahead(&mut self) -> Option<u8> {
        let byte = self.cursor.read()?;
        if byte != b'\n' {
            self.col += 1;
        }
        Some(byte)
    }

    /// Push back the last byte. Counters are not rewound.
    fn unread(&mut self) {
        self.cursor.unread();
    }

    fn count(&mut self, byte: u8) {
        if byte == b'\n' {
            self.row += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }

    // ─── Comments ───────────────────────────────────────────────────

    fn comment_marker(&mut self, byte: u8) -> Marker {
        let line = self.profile.line_comment.filter(|m| m[0] == byte);
        let block = self.profile.block_comment.filter(|(open, _)| open[0] == byte);
        if line.is_none() && block.is_none() {
            return Marker::NotMarker;
        }
        if line.is_some_and(|m| m.len() == 1) {
            self.skip_line_comment();
            return Marker::Skipped;
        }

        let next = self.cursor.peek();
        if next.is_some() && line.and_then(|m| m.get(1).copied()) == next {
            self.bump();
            self.skip_line_comment();
            return Marker::Skipped;
        }
        if let Some((open, close)) = block {
            if next.is_some() && open.get(1).copied() == next {
                self.bump();
                self.skip_block_comment(close);
                return Marker::Skipped;
            }
        }
        Marker::Dropped
    }

    fn skip_line_comment(&mut self) {
        if self.cursor.skip_line() {
            self.row += 1;
            self.col = 1;
        }
    }

    /// Skip a block comment body through `close`, or to end of input.
    fn skip_block_comment(&mut self, close: &[u8]) {
        let body = self.cursor.skip_past(close);
        for &byte in body {
            self.count(byte);
        }
    }

    // ─── Classification ─────────────────────────────────────────────

    /// Classify a token whose first byte (`byte`, at `start`) was consumed.
    fn classify(&mut self, byte: u8, start: usize, row: u32, col: u32) -> Token {
        match byte {
            b'"' | b'\'' => self.string(byte, start, row, col),
            b'0'..=b'9' => self.number(start, row, col),
            _ if self.profile.is_ident_start(byte) => self.word(start, row, col),
            b'+' | b'-' | b'*' | b'/' | b'=' | b'%' | b';' | b':' | b',' | b'(' | b')' | b'{'
            | b'}' | b'[' | b']' | b'.' | b'<' | b'>' | b'!' => self.operator(byte, start, row, col),
            _ => self.token(TokenKind::Unknown, start, row, col),
        }
    }

    fn token(&self, kind: TokenKind, start: usize, row: u32, col: u32) -> Token {
        Token::new(kind, self.cursor.slice_from(start), row, col)
    }

    /// Quoted literal. Backslashes are ordinary bytes; an unterminated
    /// literal ends silently at end of input.
    fn string(&mut self, quote: u8, start: usize, row: u32, col: u32) -> Token {
        while let Some(byte) = self.bump() {
            if byte == quote {
                break;
            }
        }
        self.token(TokenKind::String, start, row, col)
    }

    fn number(&mut self, start: usize, row: u32, col: u32) -> Token {
        self.eat_run(|byte| byte.is_ascii_digit());
        self.token(TokenKind::Number, start, row, col)
    }

    /// Identifier, keyword, or sigil variable.
    fn word(&mut self, start: usize, row: u32, col: u32) -> Token {
        let profile = self.profile;
        self.eat_run(|byte| profile.is_ident_continue(byte));
        let mut token = self.token(TokenKind::Identifier, start, row, col);
        let first = self.cursor.source()[start];
        if profile.is_keyword(&token.lexeme) {
            token.kind = TokenKind::Keyword;
        } else if profile.is_sigil(first) {
            token.kind = TokenKind::Variable;
        }
        token
    }

    /// One-byte operator, extended to two bytes for `==`, `!=`, `<=`, `>=`.
    fn operator(&mut self, byte: u8, start: usize, row: u32, col: u32) -> Token {
        if matches!(byte, b'=' | b'!' | b'<' | b'>') {
            match self.read_ahead() {
                Some(b'=') | None => {}
                Some(_) => self.unread(),
            }
        }
        self.token(TokenKind::Operator, start, row, col)
    }

    /// Consume the maximal run of bytes satisfying `pred`, pushing back the
    /// byte that ended it.
    fn eat_run(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(byte) = self.read_ahead() {
            if !pred(byte) {
                self.unread();
                break;
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    /// Yields every token before end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

/// Tokenize `source` completely, excluding the end-of-input token.
pub fn tokenize(source: &[u8], dialect: Dialect) -> Vec<Token> {
    Tokenizer::new(source, dialect).collect()
}
