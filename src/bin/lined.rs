//! `lined` - minimal line-oriented text editor.
//!
//! # Usage
//!
//! ```bash
//! lined <file>
//! ```
//!
//! One required argument: the file to edit. A nonexistent path is created
//! empty. Commands are single letters entered one line at a time; see the
//! `h` command. Ctrl+C cancels insertion mode.

// Required for libc FFI (SIGINT registration).
#![allow(unsafe_code)]

use lined::{CancelFlag, EditorState, HELP_TEXT, Session};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::OnceLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: lined <file>\n";

/// Clone of the session's cancel flag, reachable from the signal handler.
static SIGINT_FLAG: OnceLock<CancelFlag> = OnceLock::new();

extern "C" fn handle_sigint(_signal: libc::c_int) {
    // Single atomic store; the flag is observed at the insertion loop's
    // check points.
    if let Some(flag) = SIGINT_FLAG.get() {
        flag.raise();
    }
}

/// Register the SIGINT handler.
///
/// SA_RESTART keeps blocking line reads resumable, so an interrupt during
/// a read surfaces as a discarded line rather than a read error.
fn install_sigint_handler() -> io::Result<()> {
    // SAFETY: sigaction FFI with a zeroed struct, an empty signal mask, and
    // a handler that only performs an atomic store.
    unsafe {
        let mut action: libc::sigaction = std::mem::zeroed();
        libc::sigemptyset(&raw mut action.sa_mask);
        action.sa_sigaction = handle_sigint as extern "C" fn(libc::c_int) as usize;
        action.sa_flags = libc::SA_RESTART;
        if libc::sigaction(libc::SIGINT, &raw const action, std::ptr::null_mut()) != 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprint!("{USAGE}\n{HELP_TEXT}");
        return ExitCode::FAILURE;
    };
    let path = PathBuf::from(path);

    if let Err(err) = install_sigint_handler() {
        eprintln!("lined: failed to register SIGINT handler: {err}");
        return ExitCode::FAILURE;
    }
    let cancel = CancelFlag::new();
    let _ = SIGINT_FLAG.set(cancel.clone());

    let editor = match EditorState::open(&path) {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("lined: {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };
    info!(path = %path.display(), "session starting");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(editor, stdin, stdout, cancel);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lined: {err}");
            ExitCode::FAILURE
        }
    }
}
