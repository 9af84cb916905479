//! Integration tests for the session runtime.
//!
//! A scripted driver feeds input lines and captures rendered output, with a
//! [`Loopback`] transport delivering every sent message back to the session.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - Rendered output matches what the dispatched kinds produce
//! - Session state reflects whether a Logout was processed
//! - Files land in the download directory with the loaded contents

#![allow(clippy::unwrap_used)]

use std::{collections::VecDeque, fs, io};

use clack_app::{DEFAULT_USERNAME, Driver, GOODBYE, Loopback, Runtime, SessionConfig};
use clack_core::{COMMAND_SUMMARY, FixedEnv, Message};
use clack_crypto::CipherConfig;

/// Driver with canned input lines and captured output.
#[derive(Default)]
struct ScriptedDriver {
    lines: VecDeque<String>,
    rendered: Vec<String>,
    sent: Vec<Message>,
    transport: Loopback,
    stopped: bool,
}

impl ScriptedDriver {
    fn new(lines: &[&str]) -> Self {
        Self { lines: lines.iter().map(|l| (*l).to_string()).collect(), ..Self::default() }
    }
}

impl Driver for ScriptedDriver {
    type Error = io::Error;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        Ok(self.lines.pop_front())
    }

    fn send(&mut self, message: Message) -> Result<(), Self::Error> {
        self.transport.send(&message).map_err(io::Error::other)?;
        self.sent.push(message);
        Ok(())
    }

    fn recv(&mut self) -> Result<Option<Message>, Self::Error> {
        self.transport.recv().map_err(io::Error::other)
    }

    fn render(&mut self, text: &str) -> Result<(), Self::Error> {
        self.rendered.push(text.to_string());
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

fn run(lines: &[&str], config: &SessionConfig) -> (ScriptedDriver, bool) {
    let mut runtime =
        Runtime::new(ScriptedDriver::new(lines), FixedEnv::default(), config).unwrap();
    runtime.run().unwrap();
    let terminated = runtime.app().is_terminated();
    (runtime.into_driver(), terminated)
}

#[test]
fn logout_ends_session() {
    let (driver, terminated) =
        run(&["hello", "LOGOUT", "never read"], &SessionConfig::new("alice"));

    assert!(terminated);
    assert!(driver.stopped);
    assert_eq!(driver.rendered, vec!["hello".to_string(), GOODBYE.to_string()]);
    assert_eq!(driver.lines, VecDeque::from(vec!["never read".to_string()]));
}

#[test]
fn end_of_input_stops_without_logout() {
    let (driver, terminated) = run(&["just talking"], &SessionConfig::default());

    assert!(!terminated);
    assert!(driver.stopped);
    assert_eq!(driver.sent.len(), 1);
    assert_eq!(driver.sent[0].sender(), DEFAULT_USERNAME);
}

#[test]
fn help_renders_summary() {
    let (driver, _) = run(&["", "HELP", "SEND FILE"], &SessionConfig::new("alice"));
    assert_eq!(driver.rendered, vec![COMMAND_SUMMARY.to_string(); 3]);
}

#[test]
fn encryption_commands_render_nothing() {
    let (driver, terminated) =
        run(&["ENCRYPTION ON", "ENCRYPTION KEY 9"], &SessionConfig::new("alice"));
    assert!(!terminated);
    assert!(driver.rendered.is_empty());
    assert_eq!(driver.sent.len(), 2);
}

#[test]
fn list_users_renders_display_form() {
    let (driver, _) = run(&["list users"], &SessionConfig::new("carol"));
    assert_eq!(
        driver.rendered,
        vec!["{class=ListUsersMessage|timestamp=1970-01-01T00:00:00|username=carol}".to_string()]
    );
}

#[test]
fn cipher_encrypts_on_the_wire() {
    let config = SessionConfig { cipher: Some(CipherConfig::new(3)), ..SessionConfig::new("alice") };
    let (driver, _) = run(&["Dog and Cat!"], &config);

    assert_eq!(driver.sent[0].text(), Some("Grj dqg Fdw!"));
    assert_eq!(driver.rendered, vec!["Dog and Cat!".to_string()]);
}

#[test]
fn invalid_cipher_alphabet_is_rejected() {
    let config = SessionConfig {
        cipher: Some(CipherConfig { key: 1, alphabet: String::new() }),
        ..SessionConfig::new("alice")
    };
    assert!(Runtime::new(ScriptedDriver::default(), FixedEnv::default(), &config).is_err());
}

#[test]
fn file_is_loaded_sent_and_stored() {
    let source_dir = tempfile::tempdir().unwrap();
    let download_dir = tempfile::tempdir().unwrap();
    let source = source_dir.path().join("notes.txt");
    fs::write(&source, "line one\nline two\n").unwrap();

    let config = SessionConfig {
        download_dir: download_dir.path().to_path_buf(),
        ..SessionConfig::new("alice")
    };
    let line = format!("SEND FILE {} AS copy.txt", source.display());
    let (driver, _) = run(&[line.as_str()], &config);

    let stored = download_dir.path().join("copy.txt");
    assert_eq!(fs::read_to_string(&stored).unwrap(), "line one\nline two\n");
    assert_eq!(driver.sent[0].as_file().and_then(|f| f.contents()), Some("line one\nline two\n"));
    assert_eq!(driver.rendered, vec![format!("Saved {}", stored.display())]);
}

#[test]
fn missing_file_is_reported_and_session_continues() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let line = format!("SEND FILE {}", missing.display());

    let (driver, terminated) = run(&[line.as_str(), "LOGOUT"], &SessionConfig::new("alice"));

    assert!(terminated);
    assert!(driver.sent.iter().all(|m| m.as_file().is_none()));
    assert_eq!(driver.rendered.len(), 2);
    assert!(driver.rendered[0].starts_with("Error: "));
    assert!(driver.rendered[0].contains("missing.txt"));
    assert_eq!(driver.rendered[1], GOODBYE);
}

#[test]
fn store_failure_is_reported() {
    let source_dir = tempfile::tempdir().unwrap();
    let source = source_dir.path().join("notes.txt");
    fs::write(&source, "data").unwrap();

    let config = SessionConfig {
        download_dir: source_dir.path().join("does-not-exist"),
        ..SessionConfig::new("alice")
    };
    let line = format!("SEND FILE {}", source.display());
    let (driver, terminated) = run(&[line.as_str()], &config);

    assert!(!terminated);
    assert_eq!(driver.sent.len(), 1);
    assert_eq!(driver.rendered.len(), 1);
    assert!(driver.rendered[0].starts_with("Error: "));
}
