//! A single buffer line: an ordered, mutable sequence of bytes.

use std::fmt;

/// One line of the buffer, without its terminating newline.
///
/// # Invariants
///
/// - Never contains a `\n` byte; the codec strips terminators on the way in
///   and re-adds exactly one on the way out.
/// - The empty line is valid and represents a blank line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Create an empty line.
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create a line from raw bytes, dropping any newline bytes.
    ///
    /// Callers normally hand over newline-free content already; filtering
    /// here keeps the no-newline invariant local to this type.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().filter(|&b| b != b'\n').collect(),
        }
    }

    /// Create a line from a string slice, dropping any newline characters.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// The line's content, without a trailing newline.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the line is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Append a single byte. Newline bytes are rejected silently.
    pub fn push(&mut self, byte: u8) {
        if byte != b'\n' {
            self.bytes.push(byte);
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_is_valid() {
        let line = Line::new();
        assert!(line.is_empty());
        assert_eq!(line.len(), 0);
        assert_eq!(line.as_bytes(), b"");
    }

    #[test]
    fn test_from_bytes_strips_newlines() {
        let line = Line::from_bytes(b"hello\n");
        assert_eq!(line.as_bytes(), b"hello");

        // Embedded newlines are dropped too, not just trailing ones.
        let line = Line::from_bytes(b"a\nb\n");
        assert_eq!(line.as_bytes(), b"ab");
    }

    #[test]
    fn test_push_rejects_newline() {
        let mut line = Line::new();
        line.push(b'x');
        line.push(b'\n');
        line.push(b'y');
        assert_eq!(line.as_bytes(), b"xy");
    }

    #[test]
    fn test_display_lossy() {
        let line = Line::from_text("héllo");
        assert_eq!(line.to_string(), "héllo");
    }
}
