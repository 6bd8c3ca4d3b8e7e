//! Debug command: `lex` for inspecting the token stream.

use std::path::Path;

use symscan_lexer_core::{tokenize, Dialect};

use super::read_source;
use crate::reporting::render_tokens;
use crate::ScanError;

/// Tokenize the file at `path` and render one token per line.
pub fn lex_file(dialect: Dialect, path: &Path) -> Result<String, ScanError> {
    let source = read_source(path)?;
    Ok(render_tokens(&tokenize(&source, dialect)))
}
