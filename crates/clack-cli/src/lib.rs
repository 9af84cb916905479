//! Terminal client for Clack
//!
//! A thin shell over [`clack_app::Driver`] that provides line-oriented
//! terminal I/O. All orchestration logic lives in the generic
//! [`clack_app::Runtime`].
//!
//! This crate only handles reading lines and writing output.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;

pub use clack_app::{App, AppAction, AppEvent, Driver, Runtime, SessionConfig};
pub use terminal::{PROMPT, TerminalDriver, TerminalError};
