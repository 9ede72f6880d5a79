//! Error types for the planner library.
//!
//! Only failures of the backing file, the journal export and the async
//! runtime are errors. A missing task or step is a normal
//! [`Outcome`](crate::display::Outcome), not a [`PlannerError`].

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Extension trait attaching the offending path to I/O results.
pub trait FileSystemResultExt<T> {
    /// Map an I/O error to [`PlannerError::FileSystem`] at `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FileSystemResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| PlannerError::file_system(path, e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
