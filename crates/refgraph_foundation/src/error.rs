//! Error types for refgraph.
//!
//! Missing and duplicate records are reported as data (`false`, `None`, empty
//! lists), never as errors. The only fault that crosses the engine boundary
//! is a request for an operation the engine does not provide.

use thiserror::Error;

/// The main error type for refgraph operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional note about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an operation-not-implemented error.
    #[must_use]
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented(operation.into()))
    }

    /// Returns true if this error reports a missing operation.
    #[must_use]
    pub fn is_not_implemented(&self) -> bool {
        matches!(self.kind, ErrorKind::NotImplemented(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The requested operation is not (yet) wired into the engine.
    #[error("{0} not implemented")]
    NotImplemented(String),
}

/// Result type alias using refgraph's error type.
pub type Result<T> = std::result::Result<T, Error>;
