//! Application layer for Clack
//!
//! Pure session state machine and a generic synchronous runtime, so the same
//! orchestration code runs behind the terminal and inside tests.
//!
//! # Components
//!
//! - [`App`]: session state machine (parse input, dispatch received messages)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Orchestration loop using Driver
//! - [`Loopback`]: In-process transport delivering sent messages back
//! - [`SessionConfig`]: Session settings supplied by the front-end

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod config;
mod driver;
mod event;
mod loopback;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::{App, GOODBYE};
pub use config::{DEFAULT_SERVER_NAME, DEFAULT_SERVER_PORT, DEFAULT_USERNAME, SessionConfig};
pub use driver::Driver;
pub use event::AppEvent;
pub use loopback::Loopback;
pub use runtime::Runtime;
pub use state::SessionState;
