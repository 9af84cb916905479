//! Session state machine.
//!
//! This module defines the [`App`] state machine, which turns typed lines into
//! outgoing messages and received messages into side effects, completely
//! decoupled from I/O.
//!
//! ```text
//! Input(line) ──► parse_at ──► encrypt text ──► Send
//!
//! Received(msg) ──► decrypt text ──► dispatch by kind
//!                                     ├─ Text        ──► Render(text)
//!                                     ├─ File        ──► StoreFile
//!                                     ├─ ListUsers   ──► Render(display form)
//!                                     ├─ Logout      ──► Render(GOODBYE), Quit
//!                                     ├─ Help        ──► Render(summary)
//!                                     └─ Encryption  ──► (nothing)
//! ```

use clack_core::{COMMAND_SUMMARY, Environment, Message, Payload, command};
use clack_crypto::Cipher;

use crate::{AppAction, AppEvent, SessionState};

/// Line rendered when a Logout is processed.
pub const GOODBYE: &str = "Goodbye.";

/// Session state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable with a fixed clock.
#[derive(Debug, Clone)]
pub struct App<E: Environment> {
    /// Clock used to stamp parsed messages.
    env: E,
    /// Sender name for outgoing messages.
    username: String,
    /// Lifecycle state.
    state: SessionState,
    /// Text payload cipher. `None` if text is sent as typed.
    cipher: Option<Cipher>,
}

impl<E: Environment> App<E> {
    /// Create a running session for `username`.
    pub fn new(env: E, username: impl Into<String>, cipher: Option<Cipher>) -> Self {
        Self { env, username: username.into(), state: SessionState::Running, cipher }
    }

    /// Process an event and return actions.
    ///
    /// Once terminated, every event is ignored.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        if self.state.is_terminated() {
            tracing::debug!(?event, "session terminated, event ignored");
            return vec![];
        }

        match event {
            AppEvent::Input(line) => self.handle_input(&line),
            AppEvent::Received(message) => self.dispatch(message),
            AppEvent::FileStored { path } => {
                vec![AppAction::Render(format!("Saved {}", path.display()))]
            },
            AppEvent::Error { message } => vec![AppAction::Render(format!("Error: {message}"))],
        }
    }

    fn handle_input(&self, line: &str) -> Vec<AppAction> {
        let message = command::parse_at(&self.env, &self.username, line);
        let message = match &self.cipher {
            Some(cipher) => message.map_text(|text| cipher.encrypt(text)),
            None => message,
        };
        vec![AppAction::Send(message)]
    }

    fn dispatch(&mut self, message: Message) -> Vec<AppAction> {
        let message = match &self.cipher {
            Some(cipher) => message.map_text(|text| cipher.decrypt(text)),
            None => message,
        };
        tracing::debug!(kind = %message.kind(), sender = message.sender(), "dispatching message");

        match message.payload() {
            Payload::Text(text) => vec![AppAction::Render(text.clone())],
            Payload::File(file) => vec![AppAction::StoreFile(file.clone())],
            Payload::ListUsers => vec![AppAction::Render(message.to_string())],
            Payload::Logout => {
                self.state = SessionState::Terminated;
                vec![AppAction::Render(GOODBYE.to_string()), AppAction::Quit]
            },
            Payload::Help => vec![AppAction::Render(COMMAND_SUMMARY.to_string())],
            Payload::Encryption(setting) => {
                tracing::debug!(%setting, "encryption settings are not negotiated");
                vec![]
            },
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a Logout has been processed.
    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    /// Sender name for outgoing messages.
    pub fn username(&self) -> &str {
        &self.username
    }
}
