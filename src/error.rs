//! Error types for tfdelta
//!
//! Uses `thiserror` for library errors. Only failures that abort a whole
//! comparison run live here; non-fatal findings (duplicate attribute names,
//! value evaluation failures) are `Diagnostic` values on the report.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tfdelta operations
pub type TfDeltaResult<T> = Result<T, TfDeltaError>;

/// Main error type for tfdelta operations
#[derive(Error, Debug)]
pub enum TfDeltaError {
    /// One input is a file while the other is a directory
    #[error("input kind mismatch: '{original}' and '{modified}' must both be files or both be directories")]
    InputKindMismatch {
        original: PathBuf,
        modified: PathBuf,
    },

    /// IO failure on a source file or directory
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HCL parse failure; the first one aborts the run
    #[error("cannot parse {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Config file could not be read or deserialized
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}
