//! Clack protocol core
//!
//! Message model, command grammar and wire codec for the Clack chat protocol.
//! Nothing in this crate performs network I/O; the only side effects are the
//! explicit file load/store operations on [`FileTransfer`].
//!
//! # Data Flow
//!
//! ```text
//! raw line ──► command::parse ──► Message ──► (cipher) ──► codec::encode ──► transport
//!                                                                              │
//!       dispatch by MessageKind ◄── (cipher) ◄── codec::decode ◄───────────────┘
//! ```
//!
//! # Components
//!
//! - [`Message`]: one closed message type; the [`Payload`] variant fixes the
//!   [`MessageKind`]
//! - [`FileTransfer`]: file payload with explicit load and store steps
//! - [`command`]: total grammar from a line of text to a [`Message`]
//! - [`codec`]: CBOR encoding for transports
//! - [`Environment`]: clock abstraction for deterministic timestamps

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
pub mod command;
pub mod env;
mod error;
mod file;
mod message;

pub use command::{COMMAND_SUMMARY, parse, parse_at};
pub use env::{Environment, FixedEnv, SystemEnv};
pub use error::{CodecError, MessageError};
pub use file::{FileName, FileTransfer};
pub use message::{EncryptionSetting, Message, MessageKind, Payload, TIMESTAMP_FORMAT};
