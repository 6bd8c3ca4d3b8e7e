//! Text rendering for scan results.
//!
//! The symbol table layout is fixed: a header naming the dialect, a rule,
//! column headings, another rule, then one tab-separated line per entry
//! with name and type padded to twelve columns.

use std::fmt::Write;

use symscan_decl::SymbolRegistry;
use symscan_lexer_core::{Dialect, Token};

const RULE: &str = "---------------------------------------------------";

/// What the first column of a symbol table shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyColumn {
    /// Zero-based insertion index.
    Index,
    /// The entry's name fingerprint.
    Hash,
}

impl KeyColumn {
    /// C tables are keyed by index, all others by hash.
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::C => KeyColumn::Index,
            _ => KeyColumn::Hash,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            KeyColumn::Index => "Index",
            KeyColumn::Hash => "Hash",
        }
    }
}

/// Render `registry` as the symbol table for `dialect`.
pub fn render_symbol_table(dialect: Dialect, registry: &SymbolRegistry) -> String {
    let key = KeyColumn::for_dialect(dialect);
    let mut out = String::new();
    let _ = writeln!(out, "{dialect} Symbol Table:");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}\tName\t\tType\t\tSize", key.heading());
    let _ = writeln!(out, "{RULE}");
    for (index, entry) in registry.iter().enumerate() {
        let shown = match key {
            KeyColumn::Index => index.to_string(),
            KeyColumn::Hash => entry.hash.to_string(),
        };
        let _ = writeln!(
            out,
            "{shown}\t{:<12}\t{:<12}\t{}",
            entry.name, entry.declared_type, entry.size
        );
    }
    out
}

/// One line per token: position, kind, then the quoted lexeme.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{token}");
    }
    out
}
