//! Error types for lined.

use std::fmt;
use std::io;

/// Result type alias for lined operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Cursor movement failure at the edges of the buffer.
///
/// Boundary hits are recoverable: the cursor is left unchanged and the
/// session reports a short status token instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// No predecessor: the cursor is on the first line or the buffer is empty.
    AtStart,
    /// No successor: the cursor is on the last line or the buffer is empty.
    AtEnd,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtStart => write!(f, "at start of buffer"),
            Self::AtEnd => write!(f, "at end of buffer"),
        }
    }
}

/// Fatal error for lined operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the backing file or the output sink.
    Io(io::Error),
    /// The interactive input stream was exhausted.
    InputClosed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InputClosed => write!(f, "input stream closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InputClosed => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
