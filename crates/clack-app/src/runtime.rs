//! Generic runtime for session orchestration.
//!
//! The Runtime drives the session loop, coordinating between:
//! - [`App`]: session state machine
//! - [`Driver`]: Platform-specific I/O
//!
//! File contents are loaded before a file message is sent and stored when one
//! is received; both happen here so the App stays free of I/O.

use std::path::PathBuf;

use clack_core::{Environment, FileTransfer, MessageError};
use clack_crypto::CipherConfig;

use crate::{App, AppAction, AppEvent, Driver, SessionConfig};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `E`: Clock used to stamp outgoing messages
pub struct Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    driver: D,
    app: App<E>,
    download_dir: PathBuf,
}

impl<D, E> Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    /// Create a runtime for the given session settings.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument`: the configured cipher alphabet is unusable
    pub fn new(driver: D, env: E, config: &SessionConfig) -> Result<Self, MessageError> {
        let cipher = config.cipher.as_ref().map(CipherConfig::build).transpose()?;
        let app = App::new(env, config.username.clone(), cipher);
        Ok(Self { driver, app, download_dir: config.download_dir.clone() })
    }

    /// Run the session loop.
    ///
    /// Each cycle:
    /// 1. Reads one input line from the driver
    /// 2. Executes the actions the App produced for it
    /// 3. Drains delivered messages through the App
    ///
    /// Stops once a Logout has been processed or input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub fn run(&mut self) -> Result<(), D::Error> {
        tracing::info!(username = self.app.username(), "session started");

        while !self.app.is_terminated() {
            let Some(line) = self.driver.read_line()? else {
                tracing::debug!("end of input");
                break;
            };

            let actions = self.app.handle(AppEvent::Input(line));
            if self.process_actions(actions)? {
                break;
            }
            if self.drain_received()? {
                break;
            }
        }

        self.driver.stop();
        tracing::info!(username = self.app.username(), "session ended");
        Ok(())
    }

    /// Feed every waiting message to the App.
    ///
    /// Returns `true` if should quit.
    fn drain_received(&mut self) -> Result<bool, D::Error> {
        while let Some(message) = self.driver.recv()? {
            let actions = self.app.handle(AppEvent::Received(message));
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render(text) => self.driver.render(&text)?,
                    AppAction::Quit => return Ok(true),
                    AppAction::Send(mut message) => {
                        let loaded = message.as_file_mut().map_or(Ok(()), FileTransfer::load);
                        match loaded {
                            Ok(()) => self.driver.send(message)?,
                            Err(err) => pending_actions.extend(self.report("file not sent", &err)),
                        }
                    },
                    AppAction::StoreFile(file) => match file.store(&self.download_dir) {
                        Ok(path) => {
                            pending_actions.extend(self.app.handle(AppEvent::FileStored { path }));
                        },
                        Err(err) => pending_actions.extend(self.report("file not stored", &err)),
                    },
                }
            }
        }
        Ok(false)
    }

    /// Log a failed side effect and let the App report it.
    ///
    /// File system failures are expected and logged at warn; anything else
    /// means the runtime built a bad request and is logged at error. The
    /// session continues either way.
    fn report(&mut self, context: &str, err: &MessageError) -> Vec<AppAction> {
        if err.is_recoverable() {
            tracing::warn!(error = %err, "{context}");
        } else {
            tracing::error!(error = %err, "{context}");
        }
        self.app.handle(AppEvent::Error { message: err.to_string() })
    }

    /// Session state machine.
    pub fn app(&self) -> &App<E> {
        &self.app
    }

    /// Consume the runtime, returning the driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
