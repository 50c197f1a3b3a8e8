//! `lined` - a minimal line-oriented text editor.
//!
//! The buffer is an ordered sequence of lines with a current-position
//! cursor; single-letter commands navigate, inspect, mutate, and persist
//! it. The crate separates the buffer data model ([`buffer`]), the text
//! codec ([`codec`]), the editor state and command table ([`editor`]), and
//! the interactive prompt loop ([`session`]); the binary adds argument
//! parsing and SIGINT wiring on top.

#![allow(clippy::module_name_repetitions)] // LineBuffer, LineId etc.
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical

pub mod buffer;
pub mod codec;
pub mod editor;
pub mod error;
pub mod session;

// Re-export core types at crate root
pub use buffer::{Line, LineBuffer, LineId};
pub use editor::{CancelFlag, Command, EditorState, LineSource, Outcome};
pub use error::{Boundary, Error, Result};
pub use session::{HELP_TEXT, PROMPT, Session};
