//! Declaration recognition for the symscan scanners.
//!
//! Sits on top of `symscan_lexer_core`: the [`Recognizer`] pulls tokens,
//! matches them against the dialect's [`DeclRule`]s, and publishes each
//! `(name, type)` pair into a [`SymbolRegistry`].
//!
//! ```
//! use symscan_decl::recognize;
//! use symscan_lexer_core::Dialect;
//!
//! let registry = recognize(b"int x; void f() { }", Dialect::C);
//! let names: Vec<_> = registry.iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, ["x", "f"]);
//! ```

mod recognizer;
mod registry;
mod rules;

pub use recognizer::{recognize, DeclEvent, Recognizer};
pub use registry::{fingerprint, InsertOutcome, SymbolEntry, SymbolRegistry, MAX_SYMBOLS};
pub use rules::{rules_for, DeclRule, Declared, FUNCTION, VARIABLE};
