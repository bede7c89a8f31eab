//! stdout writes that survive a closed pipe (`jobboard list | head`)

use std::fmt::Display;
use std::io::{self, ErrorKind, Write};
use tracing::warn;

/// Write `text` plus a newline. A reader that went away is not an error.
pub fn write_line<W: Write>(out: &mut W, text: impl Display) -> io::Result<()> {
    ignore_broken_pipe(writeln!(out, "{}", text))
}

/// Write `text` without a newline and flush, for prompts
pub fn write_prompt<W: Write>(out: &mut W, text: impl Display) -> io::Result<()> {
    ignore_broken_pipe(write!(out, "{}", text).and_then(|_| out.flush()))
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// `println!` replacement for the presenter and session
pub fn line(text: impl Display) {
    if let Err(e) = write_line(&mut io::stdout().lock(), text) {
        warn!(error = %e, "Failed to write to stdout");
    }
}

/// Empty line
pub fn blank() {
    line("");
}

pub fn prompt(text: impl Display) {
    if let Err(e) = write_prompt(&mut io::stdout().lock(), text) {
        warn!(error = %e, "Failed to write to stdout");
    }
}
