//! Low-level tokenizer for the symscan declaration scanners.
//!
//! One engine serves six dialects (C, C#, Java, JavaScript, Perl, Ruby).
//! A static [`LexProfile`] per dialect supplies the comment syntax,
//! identifier bytes, sigils and keyword table; the [`Tokenizer`] does the
//! rest in a single forward pass over an in-memory byte buffer.
//!
//! The tokenizer never fails. Unterminated strings and block comments end
//! at end of input, and any byte no rule accepts becomes a one-byte
//! [`TokenKind::Unknown`] token.
//!
//! ```
//! use symscan_lexer_core::{tokenize, Dialect, TokenKind};
//!
//! let tokens = tokenize(b"int x;", Dialect::C);
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[1].lexeme, "x");
//! ```

mod cursor;
mod dialect;
mod token;
mod tokenizer;

pub use cursor::{is_space, Cursor};
pub use dialect::{Dialect, LexProfile};
pub use token::{Token, TokenKind, MAX_LEXEME_LEN};
pub use tokenizer::{tokenize, Tokenizer};
