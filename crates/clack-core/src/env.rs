//! Environment abstraction for deterministic timestamps.
//!
//! Decouples message construction from the system clock. Production code uses
//! [`SystemEnv`]; tests use [`FixedEnv`] so that display output and equality
//! checks are reproducible.

use chrono::{Local, NaiveDateTime};

/// Abstract environment providing the wall-clock time stamped on messages.
pub trait Environment {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Environment backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Environment whose clock never moves.
///
/// Every message built through the same `FixedEnv` carries the same
/// timestamp, which makes field-by-field equality observable in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedEnv {
    now: NaiveDateTime,
}

impl FixedEnv {
    /// Environment pinned to `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Environment for FixedEnv {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
