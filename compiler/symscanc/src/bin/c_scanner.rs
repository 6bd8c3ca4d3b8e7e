//! C symbol table scanner. Reads `source.c` from the working directory.

use std::process::ExitCode;

use symscanc::commands::run_fixed;
use symscanc::{init_tracing, Dialect};

fn main() -> ExitCode {
    init_tracing();
    run_fixed(Dialect::C)
}
