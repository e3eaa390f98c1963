//! Error types for the jxlsig library
use std::fmt;

/// Result type alias for jxlsig operations
pub type Result<T> = std::result::Result<T, JxlsigError>;

/// Main error type for jxlsig operations
///
/// Only the file helpers can fail; the detector itself is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JxlsigError {
    /// I/O errors while reading a file prefix
    Io(String),

    /// Caller passed something unusable (e.g. a directory)
    InvalidArgument(String),
}

impl fmt::Display for JxlsigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JxlsigError::Io(msg) => write!(f, "I/O error: {}", msg),
            JxlsigError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for JxlsigError {}

impl From<std::io::Error> for JxlsigError {
    fn from(err: std::io::Error) -> Self {
        JxlsigError::Io(err.to_string())
    }
}
