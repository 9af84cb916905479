//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the session runtime from specific I/O
//! implementations. Each front-end implements the trait, while the generic
//! [`crate::Runtime`] handles all orchestration.

use clack_core::Message;

/// Abstracts I/O operations for the session runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs behind the terminal and in tests.
///
/// # Implementations
///
/// - **Terminal**: line-buffered stdin/stdout with a [`crate::Loopback`]
///   transport
/// - **Tests**: scripted input lines with captured output
pub trait Driver {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Read the next input line.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, Self::Error>;

    /// Hand a message to the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot accept the message.
    fn send(&mut self, message: Message) -> Result<(), Self::Error>;

    /// Take the next message delivered by the transport.
    ///
    /// Returns `None` if nothing is waiting.
    fn recv(&mut self) -> Result<Option<Message>, Self::Error>;

    /// Show a line of output to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn render(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Stop the session and clean up resources.
    fn stop(&mut self);
}
