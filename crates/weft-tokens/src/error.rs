//! Error type for token document loading.

use std::fmt;
use std::path::PathBuf;

/// Error type for token compilation.
///
/// A token document that fails to parse is fatal at the compile boundary:
/// the whole compile aborts and no partial CSS is emitted. Missing or
/// partial *entries* inside a valid document are not errors; they are
/// treated as "not configured" and skipped.
#[derive(Debug)]
pub enum TokenError {
    /// The document is not valid structured data of the expected shape.
    Parse {
        /// Parser error message
        message: String,
    },

    /// Failed to read a token document from disk.
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Error message
        message: String,
    },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Parse { message } => write!(f, "invalid token document: {}", message),
            TokenError::Read { path, message } => {
                write!(f, "failed to read token document {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for TokenError {}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::Parse {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for TokenError {
    fn from(err: serde_yaml::Error) -> Self {
        TokenError::Parse {
            message: err.to_string(),
        }
    }
}
