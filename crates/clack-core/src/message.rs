//! Message model.
//!
//! A [`Message`] pairs the common fields (sender, timestamp) with a
//! [`Payload`]. The payload variant is the single source of truth for the
//! [`MessageKind`], so a consumer can narrow on the kind without any risk of
//! the two disagreeing.
//!
//! Messages are immutable after construction with two exceptions on the file
//! payload: the destination setter and the one-way load of contents. Cipher
//! transforms build a new message rather than editing one in place.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Environment, FileTransfer, MessageError, SystemEnv};

/// `strftime` format used for timestamps in the display form.
///
/// The fractional part is omitted when it is zero.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Message kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageKind {
    /// Encryption setting change (placeholder)
    Encryption,
    /// File transfer
    File,
    /// Request for the list of active users (placeholder)
    ListUsers,
    /// End of session
    Logout,
    /// Chat text
    Text,
    /// Command summary request
    Help,
}

impl MessageKind {
    /// Every kind, in code order.
    pub const ALL: [Self; 6] =
        [Self::Encryption, Self::File, Self::ListUsers, Self::Logout, Self::Text, Self::Help];

    /// Stable numeric code.
    pub fn code(self) -> u8 {
        match self {
            Self::Encryption => 0,
            Self::File => 10,
            Self::ListUsers => 20,
            Self::Logout => 30,
            Self::Text => 40,
            Self::Help => 50,
        }
    }

    /// Class name used in the display form.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Encryption => "EncryptionMessage",
            Self::File => "FileMessage",
            Self::ListUsers => "ListUsersMessage",
            Self::Logout => "LogoutMessage",
            Self::Text => "TextMessage",
            Self::Help => "HelpMessage",
        }
    }
}

impl TryFrom<u8> for MessageKind {
    type Error = MessageError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL.into_iter().find(|kind| kind.code() == code).ok_or_else(|| {
            MessageError::InvalidArgument { reason: format!("unknown message kind code {code}") }
        })
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Encryption => "ENCRYPTION",
            Self::File => "FILE",
            Self::ListUsers => "LIST_USERS",
            Self::Logout => "LOGOUT",
            Self::Text => "TEXT",
            Self::Help => "HELP",
        };
        f.write_str(name)
    }
}

/// Requested encryption setting.
///
/// Carried by the encryption placeholder message. No part of the session acts
/// on it yet; the cipher is configured when the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncryptionSetting {
    /// Turn payload encryption on
    On,
    /// Turn payload encryption off
    Off,
    /// Use a new key
    Key(i64),
}

impl fmt::Display for EncryptionSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
            Self::Key(key) => write!(f, "{key}"),
        }
    }
}

/// Kind-specific message data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payload {
    /// Encryption setting placeholder
    Encryption(EncryptionSetting),
    /// File transfer
    File(FileTransfer),
    /// List users placeholder
    ListUsers,
    /// Logout
    Logout,
    /// One line of chat text
    Text(String),
    /// Help request
    Help,
}

impl Payload {
    /// Kind tag of this payload.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Encryption(_) => MessageKind::Encryption,
            Self::File(_) => MessageKind::File,
            Self::ListUsers => MessageKind::ListUsers,
            Self::Logout => MessageKind::Logout,
            Self::Text(_) => MessageKind::Text,
            Self::Help => MessageKind::Help,
        }
    }
}

/// A Clack message.
///
/// Equality compares every field, timestamp included. Messages of different
/// kinds are never equal because their payload variants differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    sender: String,
    timestamp: NaiveDateTime,
    payload: Payload,
}

impl Message {
    /// Create a message stamped with the system clock.
    pub fn new(sender: impl Into<String>, payload: Payload) -> Self {
        Self::new_at(&SystemEnv, sender, payload)
    }

    /// Create a message stamped with the environment's clock.
    pub fn new_at(env: &impl Environment, sender: impl Into<String>, payload: Payload) -> Self {
        Self::with_timestamp(sender, env.now(), payload)
    }

    /// Create a message with an explicit timestamp.
    pub fn with_timestamp(
        sender: impl Into<String>,
        timestamp: NaiveDateTime,
        payload: Payload,
    ) -> Self {
        Self { sender: sender.into(), timestamp, payload }
    }

    /// Kind tag, fixed by the payload variant.
    pub fn kind(&self) -> MessageKind {
        self.payload.kind()
    }

    /// Originating user.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Construction time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Kind-specific data.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Ordered payload fields.
    ///
    /// Arity depends only on the kind: 3 for FILE (source, destination,
    /// contents or empty), 1 for TEXT and ENCRYPTION, 0 otherwise.
    pub fn data(&self) -> Vec<String> {
        match &self.payload {
            Payload::File(file) => file.data().to_vec(),
            Payload::Text(text) => vec![text.clone()],
            Payload::Encryption(setting) => vec![setting.to_string()],
            Payload::ListUsers | Payload::Logout | Payload::Help => Vec::new(),
        }
    }

    /// Text payload, if this is a TEXT message.
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// File payload, if this is a FILE message.
    pub fn as_file(&self) -> Option<&FileTransfer> {
        match &self.payload {
            Payload::File(file) => Some(file),
            _ => None,
        }
    }

    /// Mutable file payload, for the explicit load step.
    pub fn as_file_mut(&mut self) -> Option<&mut FileTransfer> {
        match &mut self.payload {
            Payload::File(file) => Some(file),
            _ => None,
        }
    }

    /// Rebuild the message with its text payload passed through `transform`.
    ///
    /// Sender and timestamp are kept. Messages of any other kind are returned
    /// unchanged.
    #[must_use]
    pub fn map_text(self, transform: impl FnOnce(&str) -> String) -> Self {
        match self.payload {
            Payload::Text(text) => Self { payload: Payload::Text(transform(&text)), ..self },
            payload => Self { payload, ..self },
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{class={}|timestamp={}|username={}",
            self.kind().class_name(),
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.sender
        )?;

        match &self.payload {
            Payload::Text(text) => write!(f, "|text={text}")?,
            Payload::File(file) => write!(
                f,
                "|source={}|destination={}|contents={}",
                file.source(),
                file.destination(),
                file.contents().unwrap_or_default()
            )?,
            Payload::Encryption(setting) => write!(f, "|setting={setting}")?,
            Payload::ListUsers | Payload::Logout | Payload::Help => {},
        }

        f.write_str("}")
    }
}
