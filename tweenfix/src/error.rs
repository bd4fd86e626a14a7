//! Per-file error type.

use crate::fix::RewriteError;
use std::path::PathBuf;

/// Everything that can go wrong while processing one file.
///
/// These never abort a run; the caller reports them and moves on. The
/// message omits the path, which the reporter prints alongside it.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    /// The file could not be read or is not valid UTF-8.
    #[error("failed to read file: {source}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The rewritten text could not be written back.
    #[error("failed to write file: {source}")]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A rule produced an invalid edit set.
    #[error("rewrite failed: {source}")]
    Rewrite {
        /// File being rewritten.
        path: PathBuf,
        /// Edit validation error.
        source: RewriteError,
    },
}
