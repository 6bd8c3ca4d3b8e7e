use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a scan command.
///
/// Malformed input is never an error; only failing to read the input is.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
