//! Single-letter command table and interpreter outcomes.

use crate::error::Boundary;

/// One editor command, parsed from a single input byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `n`: move the cursor to the next line.
    Next,
    /// `b`: move the cursor to the previous line.
    Back,
    /// `p`: print the current line.
    Print,
    /// `i`: enter insertion mode.
    Insert,
    /// `l`: list the whole buffer.
    List,
    /// `d`: delete the current line.
    Delete,
    /// `q`: quit the session.
    Quit,
    /// `w`: write the buffer back to the file.
    Write,
    /// `h`: print the usage text.
    Help,
}

impl Command {
    /// Parse a command letter. Unrecognized bytes are a deliberate no-op
    /// and map to `None`.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'n' => Some(Self::Next),
            b'b' => Some(Self::Back),
            b'p' => Some(Self::Print),
            b'i' => Some(Self::Insert),
            b'l' => Some(Self::List),
            b'd' => Some(Self::Delete),
            b'q' => Some(Self::Quit),
            b'w' => Some(Self::Write),
            b'h' => Some(Self::Help),
            _ => None,
        }
    }

    /// The command's letter, for diagnostics.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Next => 'n',
            Self::Back => 'b',
            Self::Print => 'p',
            Self::Insert => 'i',
            Self::List => 'l',
            Self::Delete => 'd',
            Self::Quit => 'q',
            Self::Write => 'w',
            Self::Help => 'h',
        }
    }
}

/// Result of interpreting one line of commands.
///
/// Boundary outcomes abort the remaining letters of the current input line
/// but not the session; `Quit` ends the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// All letters ran; prompt for the next line.
    #[default]
    Continue,
    /// `n` hit the end of the buffer; report the `EOF` token.
    AtEnd,
    /// `b` hit the start of the buffer; report the `START` token.
    AtStart,
    /// `q` was interpreted; end the session.
    Quit,
}

impl From<Boundary> for Outcome {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::AtStart => Self::AtStart,
            Boundary::AtEnd => Self::AtEnd,
        }
    }
}
