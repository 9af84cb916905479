//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User input lines and messages arriving from the transport.
//! - Outcomes of side effects the runtime performed on the App's behalf.

use std::path::PathBuf;

use clack_core::Message;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One line typed by the user.
    Input(String),

    /// Message delivered by the transport.
    Received(Message),

    /// Received file contents were written.
    FileStored {
        /// Path written.
        path: PathBuf,
    },

    /// A side effect failed.
    Error {
        /// Error description.
        message: String,
    },
}
