//! Error types for schema loading and component rendering.
//!
//! This module provides the two error types of the composition core:
//! [`CatalogError`] for schema resolution and [`RenderError`] for rendering.
//! Both are stable public types that do not leak source-format details.

use std::fmt;
use std::path::PathBuf;

/// Error type for schema catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No source (programmatic, embedded, or directory) has a schema
    /// for the requested component name.
    NotFound {
        /// The component name that was requested
        name: String,
    },

    /// A schema document exists but is not valid JSON of the expected shape.
    Parse {
        /// The component name whose schema failed to parse
        name: String,
        /// Parser error message
        message: String,
    },

    /// Failed to read a schema file from disk.
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// A registered schema directory does not exist or is not a directory.
    NotADirectory {
        /// The offending path
        path: PathBuf,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { name } => {
                write!(f, "schema not found: \"{}\"", name)
            }
            CatalogError::Parse { name, message } => {
                write!(f, "invalid schema for \"{}\": {}", name, message)
            }
            CatalogError::Read { path, message } => {
                write!(f, "failed to read schema {}: {}", path.display(), message)
            }
            CatalogError::NotADirectory { path } => {
                write!(f, "not a schema directory: {}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Error type for component rendering operations.
///
/// Rendering is fail-fast: the first error encountered anywhere in an
/// invocation tree aborts the whole render. No partial output is retained.
#[derive(Debug)]
pub enum RenderError {
    /// No render capability is registered for the requested component type.
    UnknownComponent(String),

    /// Schema resolution failed (anything other than simple absence, which
    /// callers treat as "no constraints").
    Catalog(CatalogError),

    /// A child entry in a `children` list is not a component invocation
    /// (missing `type`, or not an object at all).
    MalformedInvocation(String),

    /// A component's own render implementation failed.
    Render(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownComponent(name) => {
                write!(f, "unknown component type: \"{}\"", name)
            }
            RenderError::Catalog(err) => write!(f, "schema error: {}", err),
            RenderError::MalformedInvocation(msg) => {
                write!(f, "malformed component invocation: {}", msg)
            }
            RenderError::Render(msg) => write!(f, "render failed: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Catalog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CatalogError> for RenderError {
    fn from(err: CatalogError) -> Self {
        RenderError::Catalog(err)
    }
}
