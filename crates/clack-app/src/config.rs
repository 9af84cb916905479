//! Session configuration.

use std::{fmt, path::PathBuf};

use clack_crypto::CipherConfig;

/// Username used when the front-end does not supply one.
pub const DEFAULT_USERNAME: &str = "anonymous";

/// Server host used when none is given.
pub const DEFAULT_SERVER_NAME: &str = "localhost";

/// Server port used when none is given. Unassigned in the IANA registry.
pub const DEFAULT_SERVER_PORT: u16 = 15_744;

/// Settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name stamped on every outgoing message.
    pub username: String,
    /// Server host. Informational until a network transport exists.
    pub server_name: String,
    /// Server port. Informational until a network transport exists.
    pub server_port: u16,
    /// Directory received files are written to.
    pub download_dir: PathBuf,
    /// Text payload cipher. `None` sends text as typed.
    pub cipher: Option<CipherConfig>,
}

impl SessionConfig {
    /// Defaults for everything except the username.
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into(), ..Self::default() }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            download_dir: PathBuf::from("."),
            cipher: None,
        }
    }
}

impl fmt::Display for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{class=Session|username={}|serverName={}|serverPort={}|encrypted={}}}",
            self.username,
            self.server_name,
            self.server_port,
            self.cipher.is_some()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_defaults() {
        let config = SessionConfig::new("alice");
        assert_eq!(config.username, "alice");
        assert_eq!(config.server_name, DEFAULT_SERVER_NAME);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.download_dir, PathBuf::from("."));
        assert!(config.cipher.is_none());
    }

    #[test]
    fn display() {
        let config = SessionConfig { cipher: Some(CipherConfig::new(5)), ..SessionConfig::new("bob") };
        assert_eq!(
            config.to_string(),
            "{class=Session|username=bob|serverName=localhost|serverPort=15744|encrypted=true}"
        );
    }
}
