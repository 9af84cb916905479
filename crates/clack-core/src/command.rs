//! Command grammar.
//!
//! Maps one line of user input to exactly one [`Message`]. The grammar is
//! total: every line, including the empty line, produces a message, so the
//! session never has to handle a parse failure.
//!
//! Keywords are matched case-insensitively on whitespace-separated tokens.
//! A line that starts like a command but does not complete it (e.g. `SEND
//! FILE` without a path) degrades to a help request. Only lines that match no
//! command keyword become text.
//!
//! ```text
//! LOGOUT                              → Logout
//! LIST USERS                          → ListUsers
//! SEND FILE <path>                    → File(path, path)
//! SEND FILE <path> AS <path>          → File(source, destination)
//! ENCRYPTION ON | OFF                 → Encryption
//! ENCRYPTION KEY <integer>            → Encryption
//! HELP, empty, incomplete command     → Help
//! anything else                       → Text(trimmed line)
//! ```

use crate::{EncryptionSetting, Environment, FileTransfer, Message, Payload, SystemEnv};

/// Static command summary rendered for a help request.
pub const COMMAND_SUMMARY: &str = "Command Options:
    LOGOUT
    LIST USERS
    SEND FILE <p1> {AS <p2>}
    ENCRYPTION
    ENCRYPTION KEY
    HELP";

/// Parse a line into a message from `username`, stamped with the system
/// clock.
pub fn parse(username: &str, line: &str) -> Message {
    parse_at(&SystemEnv, username, line)
}

/// Parse a line into a message from `username`, stamped with `env`'s clock.
pub fn parse_at(env: &impl Environment, username: &str, line: &str) -> Message {
    let payload = parse_payload(line);
    tracing::debug!(kind = %payload.kind(), "parsed command");
    Message::new_at(env, username, payload)
}

/// Parse a line into a payload.
pub fn parse_payload(line: &str) -> Payload {
    let line = line.trim();
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Payload::Help,
        [first, ..] if is(first, "LOGOUT") => Payload::Logout,
        [first, second, ..] if is(first, "LIST") && is(second, "USERS") => Payload::ListUsers,
        [first, second, args @ ..] if is(first, "SEND") && is(second, "FILE") => send_file(args),
        [first, ..] if is(first, "HELP") => Payload::Help,
        [first, args @ ..] if is(first, "ENCRYPTION") => encryption(args),
        _ => Payload::Text(line.to_string()),
    }
}

/// Arguments after `SEND FILE`.
fn send_file(args: &[&str]) -> Payload {
    let transfer = match args {
        [source] => FileTransfer::new(*source, source),
        [source, keyword, destination] if is(keyword, "AS") => {
            FileTransfer::new(*source, destination)
        },
        _ => return Payload::Help,
    };

    match transfer {
        Ok(transfer) => Payload::File(transfer),
        Err(err) => {
            tracing::debug!("file command degraded to help: {err}");
            Payload::Help
        },
    }
}

/// Arguments after `ENCRYPTION`.
fn encryption(args: &[&str]) -> Payload {
    match args {
        [setting] if is(setting, "ON") => Payload::Encryption(EncryptionSetting::On),
        [setting] if is(setting, "OFF") => Payload::Encryption(EncryptionSetting::Off),
        [keyword, key] if is(keyword, "KEY") => key
            .parse()
            .map_or(Payload::Help, |key| Payload::Encryption(EncryptionSetting::Key(key))),
        _ => Payload::Help,
    }
}

fn is(token: &str, keyword: &str) -> bool {
    token.eq_ignore_ascii_case(keyword)
}
