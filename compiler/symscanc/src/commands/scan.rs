//! The scan command: read, recognize, render.

use std::path::Path;
use std::process::ExitCode;

use symscan_decl::{recognize, SymbolRegistry};
use symscan_lexer_core::Dialect;
use tracing::debug;

use super::read_source;
use crate::reporting::render_symbol_table;
use crate::ScanError;

/// Recognize the declarations in `source`.
pub fn scan_source(dialect: Dialect, source: &[u8]) -> SymbolRegistry {
    recognize(source, dialect)
}

/// Scan the file at `path` and render its symbol table.
pub fn scan_file(dialect: Dialect, path: &Path) -> Result<String, ScanError> {
    let source = read_source(path)?;
    debug!(path = %path.display(), %dialect, "scanning");
    let registry = scan_source(dialect, &source);
    Ok(render_symbol_table(dialect, &registry))
}

/// Scan the dialect's fixed input file in the working directory and print
/// its table.
///
/// Exit status is 1 only when the file cannot be opened. The open failure
/// is reported on stdout, like the table itself.
pub fn run_fixed(dialect: Dialect) -> ExitCode {
    match scan_file(dialect, Path::new(dialect.source_file())) {
        Ok(table) => {
            print!("{table}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(error = ?err, "input unavailable");
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
