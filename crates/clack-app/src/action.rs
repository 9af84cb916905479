//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use clack_core::{FileTransfer, Message};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Show text to the user.
    Render(String),

    /// Hand a message to the transport. File payloads are loaded first.
    Send(Message),

    /// Write received file contents to the download directory.
    StoreFile(FileTransfer),

    /// Stop the session loop.
    Quit,
}
