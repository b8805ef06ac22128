//! Error types for symbol extraction.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::syntax::ParseError;

/// Errors that abort an extraction. No partial result is ever returned
/// alongside one.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The root, a directory, or a document could not be read.
    #[error("cannot access {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A document is not valid Ion text or not a supported schema version.
    #[error("{}:{error}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        error: ParseError,
    },

    /// The collector met a node it cannot classify.
    #[error("internal invariant violated in {}: {message}", path.display())]
    InternalInvariant { path: PathBuf, message: String },
}

impl ExtractError {
    /// Create an access error.
    pub fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<PathBuf>, error: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            error,
        }
    }

    /// Create an internal invariant error.
    pub fn internal(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InternalInvariant {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The path of the file or directory the error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::Access { path, .. }
            | Self::Parse { path, .. }
            | Self::InternalInvariant { path, .. } => path,
        }
    }

    /// The parse error, if this is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Result alias for extraction operations.
pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
