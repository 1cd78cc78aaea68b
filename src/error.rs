//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for triage-faq operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error produced while reading the FAQ corpus source.
///
/// Never escapes [`crate::corpus::Corpus::load`]: a failed load is logged and
/// degrades to an empty corpus, per the engine's failure-free contract.
#[derive(Debug, Clone)]
pub enum CorpusError {
    /// Corpus file not found at the expected path.
    NotFound { path: PathBuf },
    /// Corpus file exists but could not be read.
    Read { path: PathBuf, error: String },
    /// Corpus file is not a valid JSON array of entries.
    Parse { path: PathBuf, error: String },
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "FAQ corpus not found at {}", path.display())
            }
            Self::Read { path, error } => {
                write!(f, "Failed to read FAQ corpus at {}: {}", path.display(), error)
            }
            Self::Parse { path, error } => {
                write!(f, "Failed to parse FAQ corpus at {}: {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for CorpusError {}
