//! Error types for document conversion

use std::fmt;
use std::io;

/// Errors that can abort the conversion of a single document.
///
/// A failing document never stops a batch; the caller records the failure
/// and moves on to the next file. A converter that finds an expected
/// property missing is NOT an error — it emits a smaller fragment and logs
/// a warning instead.
#[derive(Debug)]
pub enum ConvertError {
    /// The input (or the produced output) is not well-formed XML
    Parse(String),
    /// The in-memory tree could not be serialized
    Serialize(String),
    /// Reading or writing the document file failed
    Io(io::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Parse(msg) => write!(f, "XML parsing error: {}", msg),
            ConvertError::Serialize(msg) => write!(f, "XML serialization error: {}", msg),
            ConvertError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        ConvertError::Io(err)
    }
}

/// Type alias for conversion results
pub type ConvertResult<T> = Result<T, ConvertError>;
