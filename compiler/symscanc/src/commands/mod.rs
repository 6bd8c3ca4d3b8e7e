//! Command handlers shared by the `symscan` driver and the per-dialect
//! scanners.
//!
//! Handlers return the text to print; only [`run_fixed`] and the binaries
//! touch stdout and exit codes. Reading the input lives here in the module
//! root.

use std::path::Path;

use crate::ScanError;

mod debug;
mod scan;

pub use debug::lex_file;
pub use scan::{run_fixed, scan_file, scan_source};

/// Read a whole input file as raw bytes.
///
/// The bytes need not be UTF-8; the tokenizer works on bytes.
pub(crate) fn read_source(path: &Path) -> Result<Vec<u8>, ScanError> {
    std::fs::read(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
