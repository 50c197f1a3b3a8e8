//! Conversion between raw newline-separated text and the line buffer.
//!
//! `decode` treats both `\n` and end-of-input as line terminators: a final
//! piece with no trailing newline is kept as-is, and empty input produces
//! an empty buffer (zero lines), which is distinct from `"\n"` producing a
//! single blank line. `encode_line` always emits the content followed by
//! exactly one `\n`; whole-buffer encoding is the concatenation of per-line
//! encodings in sequence order.
//!
//! Blank pieces decode to ordinary empty lines. The historical format this
//! editor descends from padded such lines with a single space; that padding
//! was an artifact of its representation and is deliberately not
//! reproduced.

use crate::buffer::{Line, LineBuffer};
use std::io::{self, Write};

/// Decode raw text into a line buffer.
#[must_use]
pub fn decode(raw: &[u8]) -> LineBuffer {
    let mut buffer = LineBuffer::new();
    let mut cursor = None;
    let mut rest = raw;
    while !rest.is_empty() {
        match rest.iter().position(|&b| b == b'\n') {
            Some(at) => {
                cursor = Some(buffer.insert_after(cursor, Line::from_bytes(&rest[..at])));
                rest = &rest[at + 1..];
            }
            None => {
                // Partial final line: preserved, nothing appended or dropped.
                cursor = Some(buffer.insert_after(cursor, Line::from_bytes(rest)));
                break;
            }
        }
    }
    buffer
}

/// Decode one raw input line (at most one trailing newline) into a [`Line`].
#[must_use]
pub fn decode_line(raw: &str) -> Line {
    Line::from_text(raw.strip_suffix('\n').unwrap_or(raw))
}

/// Encode one line as its bytes followed by exactly one newline.
#[must_use]
pub fn encode_line(line: &Line) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len() + 1);
    out.extend_from_slice(line.as_bytes());
    out.push(b'\n');
    out
}

/// Encode the whole buffer in sequence order.
#[must_use]
pub fn encode(buffer: &LineBuffer) -> Vec<u8> {
    let mut out = Vec::new();
    for line in buffer {
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }
    out
}

/// Stream the whole buffer to a sink, one encoded line at a time.
///
/// # Errors
///
/// Propagates any write error from the sink.
pub fn write_to<W: Write>(buffer: &LineBuffer, sink: &mut W) -> io::Result<()> {
    for line in buffer {
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}
