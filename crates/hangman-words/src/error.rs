//! Error types for word sources.

use std::path::PathBuf;

/// Errors that can occur while loading or drawing words.
#[derive(Debug, thiserror::Error)]
pub enum WordSourceError {
    /// The source has no usable words. A round cannot start.
    #[error("word list is empty")]
    EmptyWordList,

    /// The word file could not be read.
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
