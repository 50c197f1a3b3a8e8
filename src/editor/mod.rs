//! Editor state: the line buffer, its cursor, and the backing file.

pub mod command;
pub mod insert;

pub use command::{Command, Outcome};
pub use insert::{CancelFlag, LineSource};

use crate::buffer::{Line, LineBuffer, LineId};
use crate::codec;
use crate::error::{Boundary, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// In-memory editing state for one file.
///
/// Owns the [`LineBuffer`] exclusively. The buffer's head is the start
/// reference used for listing and writing; `cursor` is the current line.
///
/// # Invariants
///
/// - `cursor` is `None` iff the buffer is empty; otherwise it is a live
///   line reachable from the buffer's head.
#[derive(Debug)]
pub struct EditorState {
    buffer: LineBuffer,
    cursor: Option<LineId>,
    path: PathBuf,
}

impl EditorState {
    /// Load `path` into a fresh editor state.
    ///
    /// A nonexistent path is not an error: an empty file is created and the
    /// buffer starts empty. The cursor starts on the first line.
    ///
    /// # Errors
    ///
    /// Any open or read failure other than file-absent is fatal and
    /// propagated.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                File::create(&path)?;
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        let buffer = codec::decode(&raw);
        let cursor = buffer.head();
        info!(path = %path.display(), lines = buffer.len(), "loaded file");
        Ok(Self {
            buffer,
            cursor,
            path,
        })
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying line buffer.
    #[must_use]
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Current cursor handle, `None` when the buffer is empty.
    #[must_use]
    pub fn cursor(&self) -> Option<LineId> {
        self.cursor
    }

    /// Content of the current line, `None` when the buffer is empty.
    #[must_use]
    pub fn current_line(&self) -> Option<&Line> {
        self.cursor.and_then(|id| self.buffer.line(id))
    }

    /// Move the cursor to the next line.
    ///
    /// # Errors
    ///
    /// [`Boundary::AtEnd`] when there is no successor; the cursor is left
    /// unchanged.
    pub fn advance(&mut self) -> std::result::Result<(), Boundary> {
        self.cursor = Some(self.buffer.advance(self.cursor)?);
        Ok(())
    }

    /// Move the cursor to the previous line.
    ///
    /// # Errors
    ///
    /// [`Boundary::AtStart`] when there is no predecessor; the cursor is
    /// left unchanged.
    pub fn retreat(&mut self) -> std::result::Result<(), Boundary> {
        self.cursor = Some(self.buffer.retreat(self.cursor)?);
        Ok(())
    }

    /// Insert a line after the cursor and move the cursor onto it.
    pub fn insert_after_cursor(&mut self, line: Line) {
        self.cursor = Some(self.buffer.insert_after(self.cursor, line));
    }

    /// Delete the current line, moving the cursor to its successor when one
    /// exists, else its predecessor. A delete on an empty buffer is a no-op.
    pub fn delete_current(&mut self) {
        if let Some(id) = self.cursor {
            self.cursor = self.buffer.remove(id);
        }
    }

    /// Truncate the backing file and rewrite it from the buffer.
    ///
    /// # Errors
    ///
    /// Open and write failures are fatal and propagated.
    pub fn write(&self) -> Result<()> {
        let mut sink = BufWriter::new(File::create(&self.path)?);
        codec::write_to(&self.buffer, &mut sink)?;
        sink.flush()?;
        debug!(path = %self.path.display(), lines = self.buffer.len(), "wrote buffer");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn editor_with(content: &[u8]) -> (EditorState, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        let editor = EditorState::open(file.path()).unwrap();
        (editor, file)
    }

    #[test]
    fn test_open_positions_cursor_on_first_line() {
        let (editor, _file) = editor_with(b"x\ny\n");
        assert_eq!(editor.current_line().unwrap().as_bytes(), b"x");
        assert_eq!(editor.cursor(), editor.buffer().head());
    }

    #[test]
    fn test_open_missing_path_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        assert!(!path.exists());

        let editor = EditorState::open(&path).unwrap();
        assert!(path.exists());
        assert!(editor.buffer().is_empty());
        assert_eq!(editor.cursor(), None);
    }

    #[test]
    fn test_advance_and_retreat_move_cursor() {
        let (mut editor, _file) = editor_with(b"x\ny\n");
        editor.advance().unwrap();
        assert_eq!(editor.current_line().unwrap().as_bytes(), b"y");
        editor.retreat().unwrap();
        assert_eq!(editor.current_line().unwrap().as_bytes(), b"x");
    }

    #[test]
    fn test_boundary_leaves_cursor_unchanged() {
        let (mut editor, _file) = editor_with(b"only\n");
        let before = editor.cursor();
        assert_eq!(editor.advance(), Err(Boundary::AtEnd));
        assert_eq!(editor.cursor(), before);
        assert_eq!(editor.retreat(), Err(Boundary::AtStart));
        assert_eq!(editor.cursor(), before);
    }

    #[test]
    fn test_empty_buffer_boundaries() {
        let (mut editor, _file) = editor_with(b"");
        assert_eq!(editor.advance(), Err(Boundary::AtEnd));
        assert_eq!(editor.retreat(), Err(Boundary::AtStart));
    }

    #[test]
    fn test_delete_only_line_empties_buffer() {
        let (mut editor, _file) = editor_with(b"only\n");
        editor.delete_current();
        assert!(editor.buffer().is_empty());
        assert_eq!(editor.cursor(), None);
        assert_eq!(editor.buffer().head(), None);

        // Deleting again is a no-op, not an error.
        editor.delete_current();
        assert_eq!(editor.cursor(), None);
    }

    #[test]
    fn test_insert_moves_cursor_onto_new_line() {
        let (mut editor, _file) = editor_with(b"x\ny\n");
        editor.insert_after_cursor(Line::from_text("mid"));
        assert_eq!(editor.current_line().unwrap().as_bytes(), b"mid");

        let texts: Vec<String> = editor.buffer().iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["x", "mid", "y"]);
    }

    #[test]
    fn test_write_truncates_and_rewrites() {
        let (mut editor, file) = editor_with(b"stale line that is quite long\n");
        editor.delete_current();
        editor.insert_after_cursor(Line::from_text("new"));
        editor.write().unwrap();

        assert_eq!(fs::read(file.path()).unwrap(), b"new\n");
    }

    #[test]
    fn test_write_then_reopen_round_trips() {
        let (mut editor, file) = editor_with(b"a\nb\n");
        editor.advance().unwrap();
        editor.insert_after_cursor(Line::from_text("c"));
        editor.write().unwrap();

        let reloaded = EditorState::open(file.path()).unwrap();
        let texts: Vec<String> = reloaded.buffer().iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }
}
