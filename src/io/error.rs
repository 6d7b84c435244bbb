//! Error types and context management for pattern generation operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all pattern generation operations
#[derive(Debug)]
pub enum PatternError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// What was being encoded or decoded
        context: String,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line target is neither a request file nor a directory of them
    InvalidTarget {
        /// Offending path
        path: PathBuf,
        /// Why the target was rejected
        reason: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Serialization { context, source } => {
                write!(f, "Serialization error in {context}: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidTarget { path, reason } => {
                write!(f, "Invalid target '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern generation results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            context: "json".to_string(),
            source: err,
        }
    }
}

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Wrap an I/O error with the path it concerned
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`PatternError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PatternError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a serialization error with a description of what was processed
pub fn serialization_error(context: &impl ToString, source: serde_json::Error) -> PatternError {
    PatternError::Serialization {
        context: context.to_string(),
        source,
    }
}

/// Create an invalid target error
pub fn invalid_target(path: &Path, reason: &impl ToString) -> PatternError {
    PatternError::InvalidTarget {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Create a file system error that has no underlying OS error
pub fn io_error(message: &str) -> PatternError {
    PatternError::FileSystem {
        path: PathBuf::from("<unknown>"),
        operation: "resolve",
        source: std::io::Error::other(message.to_string()),
    }
}
