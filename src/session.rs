//! Interactive editor session: prompt loop and command interpreter.
//!
//! The session owns the editor state, the input source, the output sink,
//! and the cancellation flag; there is no ambient global state. One input
//! line is a string of command letters applied left-to-right; a boundary
//! hit stops the rest of the line and reports a status token, `q` ends the
//! session, unknown letters are skipped silently.

use crate::codec;
use crate::editor::{CancelFlag, Command, EditorState, LineSource, Outcome, insert};
use crate::error::{Error, Result};
use std::io::{self, Write};
use tracing::{debug, trace};

/// Prompt written before each command line.
pub const PROMPT: &str = ": ";

/// Status token reported when `n` runs off the end of the buffer.
pub const TOKEN_EOF: &str = "EOF";

/// Status token reported when `b` runs off the start of the buffer.
pub const TOKEN_START: &str = "START";

/// Usage text for the `h` command and for argument errors.
pub const HELP_TEXT: &str = "\
lined - a minimal line-oriented text editor

COMMANDS:
    n    go to the next line
    b    go to the previous line
    p    print the current line
    i    insert lines after the current line until interrupted
    l    list the contents of the buffer
    d    delete the current line
    q    quit the editor
    w    write the buffer back to the file
    h    print this message

Commands chain within one input line: 'npi' runs next, print, insert.
A boundary hit ('n' at the last line, 'b' at the first) stops the rest
of the line and reports EOF or START.
";

/// One interactive editing session over an input source and output sink.
pub struct Session<I, W> {
    editor: EditorState,
    input: I,
    out: W,
    cancel: CancelFlag,
}

impl<I: LineSource, W: Write> Session<I, W> {
    /// Create a session. The cancel flag is the one an interrupt context
    /// raises; insertion mode resets it on entry.
    pub fn new(editor: EditorState, input: I, out: W, cancel: CancelFlag) -> Self {
        Self {
            editor,
            input,
            out,
            cancel,
        }
    }

    /// The editor state, for inspection.
    #[must_use]
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// The output sink, for inspection after the session ends.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run the prompt loop until `q` or a fatal error.
    ///
    /// # Errors
    ///
    /// [`Error::InputClosed`] when the command input is exhausted; I/O
    /// failures on the backing file or the output sink are fatal.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.out.write_all(PROMPT.as_bytes())?;
            self.out.flush()?;

            let line = match self.input.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => return Err(Error::InputClosed),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            match self.execute_line(&line)? {
                Outcome::Continue => {}
                Outcome::AtEnd => writeln!(self.out, "{TOKEN_EOF}")?,
                Outcome::AtStart => writeln!(self.out, "{TOKEN_START}")?,
                Outcome::Quit => {
                    debug!("session quit");
                    return Ok(());
                }
            }
        }
    }

    /// Interpret one line of command letters.
    ///
    /// # Errors
    ///
    /// Fatal errors from individual commands (file I/O, input exhaustion
    /// during insertion) are propagated.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome> {
        for byte in line.bytes() {
            if byte == b'\n' {
                break;
            }
            // Unrecognized letters are a deliberate no-op.
            let Some(command) = Command::from_byte(byte) else {
                continue;
            };
            match self.apply(command)? {
                Outcome::Continue => {}
                outcome => return Ok(outcome),
            }
        }
        Ok(Outcome::Continue)
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        trace!(letter = %command.letter(), "applying command");
        match command {
            Command::Next => Ok(self
                .editor
                .advance()
                .map_or_else(Outcome::from, |()| Outcome::Continue)),
            Command::Back => Ok(self
                .editor
                .retreat()
                .map_or_else(Outcome::from, |()| Outcome::Continue)),
            Command::Print => {
                self.print_current()?;
                Ok(Outcome::Continue)
            }
            Command::Insert => {
                insert::run(&mut self.editor, &mut self.input, &self.cancel)?;
                Ok(Outcome::Continue)
            }
            Command::List => {
                codec::write_to(self.editor.buffer(), &mut self.out)?;
                Ok(Outcome::Continue)
            }
            Command::Delete => {
                self.editor.delete_current();
                Ok(Outcome::Continue)
            }
            Command::Quit => Ok(Outcome::Quit),
            Command::Write => {
                self.editor.write()?;
                Ok(Outcome::Continue)
            }
            Command::Help => {
                self.out.write_all(HELP_TEXT.as_bytes())?;
                Ok(Outcome::Continue)
            }
        }
    }

    /// Print the current line, or a blank line when the buffer is empty.
    fn print_current(&mut self) -> Result<()> {
        if let Some(line) = self.editor.current_line() {
            self.out.write_all(line.as_bytes())?;
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn session_over(
        content: &[u8],
        script: &[u8],
    ) -> (Session<io::Cursor<Vec<u8>>, Vec<u8>>, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        let editor = EditorState::open(file.path()).unwrap();
        let session = Session::new(
            editor,
            io::Cursor::new(script.to_vec()),
            Vec::new(),
            CancelFlag::new(),
        );
        (session, file)
    }

    fn transcript(session: Session<io::Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.out).unwrap()
    }

    #[test]
    fn test_nbp_prints_first_line() {
        let (mut session, _file) = session_over(b"x\ny\n", b"nbp\nq\n");
        session.run().unwrap();
        assert_eq!(transcript(session), ": x\n: ");
    }

    #[test]
    fn test_boundary_stops_rest_of_line() {
        // Second 'n' hits the end; 'p' after it must not run.
        let (mut session, _file) = session_over(b"x\ny\n", b"nnp\nq\n");
        session.run().unwrap();
        assert_eq!(transcript(session), ": EOF\n: ");
    }

    #[test]
    fn test_back_at_start_reports_token() {
        let (mut session, _file) = session_over(b"x\n", b"b\nq\n");
        session.run().unwrap();
        assert_eq!(transcript(session), ": START\n: ");
    }

    #[test]
    fn test_empty_buffer_next_reports_eof() {
        let (mut session, _file) = session_over(b"", b"n\nq\n");
        session.run().unwrap();
        assert_eq!(transcript(session), ": EOF\n: ");
    }

    #[test]
    fn test_print_on_empty_buffer_is_blank_line() {
        let (mut session, _file) = session_over(b"", b"p\nq\n");
        session.run().unwrap();
        assert_eq!(transcript(session), ": \n: ");
    }

    #[test]
    fn test_delete_then_print_is_blank_line() {
        let (mut session, _file) = session_over(b"only\n", b"dp\nq\n");
        session.run().unwrap();
        assert!(session.editor().buffer().is_empty());
        assert_eq!(transcript(session), ": \n: ");
    }

    #[test]
    fn test_list_writes_whole_buffer() {
        let (mut session, _file) = session_over(b"a\nb\n", b"nl\nq\n");
        session.run().unwrap();
        // Listing always starts from the first line, not the cursor.
        assert_eq!(transcript(session), ": a\nb\n: ");
    }

    #[test]
    fn test_unknown_letters_are_skipped() {
        let (mut session, _file) = session_over(b"x\n", b"zz p\nq\n");
        session.run().unwrap();
        assert_eq!(transcript(session), ": x\n: ");
    }

    #[test]
    fn test_quit_stops_before_remaining_letters() {
        let (mut session, _file) = session_over(b"x\n", b"qp\n");
        session.run().unwrap();
        assert_eq!(transcript(session), ": ");
    }

    #[test]
    fn test_command_input_exhaustion_is_fatal() {
        let (mut session, _file) = session_over(b"x\n", b"p\n");
        let err = session.run().unwrap_err();
        assert!(matches!(err, Error::InputClosed));
    }

    #[test]
    fn test_help_emits_usage_text() {
        let (mut session, _file) = session_over(b"", b"h\nq\n");
        session.run().unwrap();
        assert!(transcript(session).contains("line-oriented text editor"));
    }

    #[test]
    fn test_write_persists_buffer() {
        let (mut session, file) = session_over(b"a\nb\n", b"dw\nq\n");
        session.run().unwrap();
        assert_eq!(std::fs::read(file.path()).unwrap(), b"b\n");
    }
}
