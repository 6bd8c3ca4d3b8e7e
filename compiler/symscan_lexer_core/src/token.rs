//! Token kinds and the token record produced by the tokenizer.

use std::fmt;

/// Longest lexeme a token stores, in bytes. Longer runs are still consumed
/// in full but only their first `MAX_LEXEME_LEN` bytes are kept.
pub const MAX_LEXEME_LEN: usize = 49;

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    /// Sigil-prefixed name (Perl and Ruby only).
    Variable,
    /// Unsigned run of decimal digits.
    Number,
    /// Quoted literal, quotes included.
    String,
    /// One- or two-byte operator or punctuation.
    Operator,
    /// A single byte no other rule accepts.
    Unknown,
    Eof,
}

impl TokenKind {
    /// Short lowercase name used by token dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Variable => "variable",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Operator => "operator",
            TokenKind::Unknown => "unknown",
            TokenKind::Eof => "end-of-input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified run of input bytes with its starting position.
///
/// `row` and `col` are 1-based. The lexeme is never empty; the
/// end-of-input token carries the literal text `EOF`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub row: u32,
    pub col: u32,
}

impl Token {
    /// Build a token from raw bytes, truncating to [`MAX_LEXEME_LEN`].
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn new(kind: TokenKind, bytes: &[u8], row: u32, col: u32) -> Self {
        let kept = &bytes[..bytes.len().min(MAX_LEXEME_LEN)];
        Self {
            kind,
            lexeme: String::from_utf8_lossy(kept).into_owned(),
            row,
            col,
        }
    }

    /// The end-of-input token.
    pub fn eof(row: u32, col: u32) -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: "EOF".to_owned(),
            row,
            col,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Is this a token of `kind` whose lexeme is one of `words`?
    pub fn is_one_of(&self, kind: TokenKind, words: &[&str]) -> bool {
        self.kind == kind && words.contains(&self.lexeme.as_str())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {:?}", self.row, self.col, self.kind, self.lexeme)
    }
}
