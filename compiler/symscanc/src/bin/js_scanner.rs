//! JavaScript symbol table scanner. Reads `script.js` from the working directory.

use std::process::ExitCode;

use symscanc::commands::run_fixed;
use symscanc::{init_tracing, Dialect};

fn main() -> ExitCode {
    init_tracing();
    run_fixed(Dialect::JavaScript)
}
