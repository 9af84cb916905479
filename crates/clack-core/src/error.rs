//! Error types for the Clack protocol core.
//!
//! [`MessageError`] covers the message model: malformed constructor input and
//! the explicit file load/store steps. [`CodecError`] covers the wire codec.
//! The command grammar has no error type; it always yields a message.

use clack_crypto::CipherError;
use thiserror::Error;

/// Errors raised by message construction and file operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Malformed constructor or setter input
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input
        reason: String,
    },

    /// File to load does not exist or cannot be read
    #[error("file not found: {path}: {reason}")]
    NotFound {
        /// Source path that was requested
        path: String,
        /// Underlying cause
        reason: String,
    },

    /// File contents could not be stored
    #[error("I/O failure: {reason}")]
    IoFailure {
        /// Underlying cause
        reason: String,
    },
}

impl MessageError {
    /// Returns true if the session can report this error and carry on.
    ///
    /// Load and store failures depend on the file system and are reported to
    /// the user. Invalid arguments are programming errors in the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::IoFailure { .. })
    }
}

impl From<CipherError> for MessageError {
    fn from(err: CipherError) -> Self {
        Self::InvalidArgument { reason: err.to_string() }
    }
}

/// Errors from the CBOR wire codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Message could not be serialized
    #[error("CBOR encode failed: {0}")]
    Encode(String),

    /// Bytes are not a valid message
    #[error("CBOR decode failed: {0}")]
    Decode(String),
}
