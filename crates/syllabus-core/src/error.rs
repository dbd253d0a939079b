//! Error types for the scheduling engine.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all scheduling operations.
///
/// Exhausted lanes, unmatched start units and empty catalogs are not errors:
/// they simply produce fewer plan items.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Start date after end date
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: String, end: String },
    /// A required input was absent
    #[error("Missing required field '{field}'")]
    MissingRequiredField { field: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Malformed tabular input
    #[error("Parse error: {0}")]
    Parse(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
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
    pub fn with_reason(self, reason: impl Into<String>) -> ScheduleError {
        ScheduleError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ScheduleError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a missing-field error.
    pub fn missing(field: impl Into<String>) -> Self {
        ScheduleError::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Creates an inverted-range error from any two displayable bounds.
    pub fn invalid_range(start: impl ToString, end: impl ToString) -> Self {
        ScheduleError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Extension trait mapping I/O results onto [`ScheduleError::FileSystem`].
pub trait IoResultExt<T> {
    /// Attach the path the I/O operation was working on.
    fn at_path(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn at_path(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|source| ScheduleError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for scheduling operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
