//! Terminal driver for the client.
//!
//! Implements the [`Driver`] trait over any buffered reader and writer, so
//! the binary plugs in stdin/stdout and tests plug in in-memory buffers.
//! Messages travel through a [`Loopback`] transport.

use std::io::{self, BufRead, Write};

use clack_app::{Driver, Loopback};
use clack_core::{CodecError, Message};
use thiserror::Error;

/// Written before each input line is read.
pub const PROMPT: &str = "> ";

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Message could not be encoded or decoded by the transport.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Terminal driver implementing the [`Driver`] trait.
pub struct TerminalDriver<R, W> {
    input: R,
    output: W,
    transport: Loopback,
}

impl<R: BufRead, W: Write> TerminalDriver<R, W> {
    /// Create a driver reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, transport: Loopback::new() }
    }

    /// Consume the driver, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Driver for TerminalDriver<R, W> {
    type Error = TerminalError;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        self.output.write_all(PROMPT.as_bytes())?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        // Invalid UTF-8 is replaced rather than ending the session
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn send(&mut self, message: Message) -> Result<(), Self::Error> {
        Ok(self.transport.send(&message)?)
    }

    fn recv(&mut self) -> Result<Option<Message>, Self::Error> {
        Ok(self.transport.recv()?)
    }

    fn render(&mut self, text: &str) -> Result<(), Self::Error> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Err(err) = self.output.flush() {
            tracing::warn!(error = %err, "failed to flush terminal output");
        }
    }
}
