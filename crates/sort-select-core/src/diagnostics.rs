//! User-visible message channel.
//!
//! Diagnostics are separate from `log` output: they are the prompt, the
//! sorted values and the failure notices a user reads after each commit.

use std::io::{self, Write};

use crate::error::SelectResult;

pub trait Diagnostics {
    fn emit(&mut self, message: &str) -> SelectResult<()>;
}

/// Collects messages in memory.
impl Diagnostics for Vec<String> {
    fn emit(&mut self, message: &str) -> SelectResult<()> {
        self.push(message.to_string());
        Ok(())
    }
}

/// Writes one message per line to any writer, typically stderr.
#[derive(Debug)]
pub struct WriterDiagnostics<W> {
    writer: W,
}

impl<W: Write> WriterDiagnostics<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterDiagnostics<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Diagnostics for WriterDiagnostics<W> {
    fn emit(&mut self, message: &str) -> SelectResult<()> {
        match writeln!(self.writer, "{message}").and_then(|_| self.writer.flush()) {
            Ok(()) => Ok(()),
            Err(err) if should_ignore_pipe_error(&err) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
