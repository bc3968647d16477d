//! # Error reporting for reading and writing of value files
//!
//! Problems with individual tokens are not errors at this level: such tokens are skipped while
//! reading. What remains are failures to access the files themselves.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// An `ImportError` is created when an input file couldn't be read.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file to read isn't found, or reading it couldn't start or was interrupted.
    #[error("failed to read input file {path:?}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
}

/// An `ExportError` is created when an output file couldn't be written.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The file couldn't be created, opened or written to.
    #[error("failed to write output file {path:?}")]
    Io {
        /// File that was being written.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
}
