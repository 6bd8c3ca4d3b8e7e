//! Symbol table scanners.
//!
//! Reads a source file in one of six dialects, recognizes the declarations
//! in it, and renders the result as a fixed-format symbol table.
//!
//! # Pipeline
//!
//! ```text
//! bytes ──► Tokenizer ──► Recognizer ──► SymbolRegistry ──► render_symbol_table
//! ```
//!
//! The tokenizer lives in `symscan_lexer_core`, the recognizer and registry
//! in `symscan_decl`. This crate adds the reporter, the command handlers
//! shared by the executables, and process setup.

use std::sync::Once;

pub mod commands;
mod error;
pub mod reporting;

pub use error::ScanError;
pub use symscan_lexer_core::Dialect;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber writing to stderr.
///
/// Only takes effect when `RUST_LOG` is set, e.g. `RUST_LOG=symscan_decl=trace`
/// to see every declaration event. Safe to call more than once; stdout is
/// never written to.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
