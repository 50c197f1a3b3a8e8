//! Insertion mode: a cooperative loop that appends raw input lines after
//! the cursor until cancelled.
//!
//! Cancellation is asynchronous: an interrupt context raises a shared flag
//! while the loop may be blocked in a read. The flag is therefore checked
//! both before blocking and immediately after a read returns; a line read
//! after cancellation was requested is discarded, not inserted. The flag
//! is reset on every entry into insertion mode.

use crate::codec;
use crate::editor::EditorState;
use crate::error::{Error, Result};
use std::io::{self, BufRead};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Shared cancellation token.
///
/// Cheap to clone; the interrupt context raises it, the insertion loop
/// observes and resets it. All accesses are single atomic operations, so
/// the raising side may be a signal handler.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    raised: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a lowered flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag. Safe to call from a signal handler.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Check whether the flag has been raised.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Lower the flag.
    pub fn reset(&self) {
        self.raised.store(false, Ordering::SeqCst);
    }
}

/// A blocking, line-oriented input source.
///
/// `read_line` blocks until a full line, end of input (`None`), or an I/O
/// error. Implemented for every [`BufRead`]; tests substitute scripted
/// sources.
pub trait LineSource {
    /// Read one raw line, including its terminator when present.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying source.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match BufRead::read_line(self, &mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Run insertion mode: read lines from `source` and insert each after the
/// cursor, threading the cursor onto every inserted line.
///
/// Returns normally when `cancel` is raised. The buffer keeps everything
/// inserted up to that point.
///
/// # Errors
///
/// [`Error::InputClosed`] when the source is exhausted mid-insertion;
/// I/O errors from the source are propagated.
pub fn run<S: LineSource>(
    editor: &mut EditorState,
    source: &mut S,
    cancel: &CancelFlag,
) -> Result<()> {
    cancel.reset();
    let mut inserted = 0usize;
    loop {
        // The interrupt may have arrived between reads.
        if cancel.is_raised() {
            break;
        }
        let raw = match source.read_line() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Err(Error::InputClosed),
            // A signal can cut the read short; the flag check at the top of
            // the loop decides whether that meant cancellation.
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        // The interrupt may also have arrived while the read was blocked;
        // a line read after cancellation is discarded.
        if cancel.is_raised() {
            break;
        }
        editor.insert_after_cursor(codec::decode_line(&raw));
        inserted += 1;
    }
    debug!(inserted, "insertion mode ended");
    Ok(())
}
