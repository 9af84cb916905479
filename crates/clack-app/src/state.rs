//! Session lifecycle state.

/// Session state.
///
/// ```text
/// Running ──(Logout processed)──► Terminated
/// ```
///
/// `Terminated` is absorbing: no event leads out of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Reading and dispatching messages.
    #[default]
    Running,
    /// Logout processed; no further input is read.
    Terminated,
}

impl SessionState {
    /// Whether the session has ended.
    pub fn is_terminated(self) -> bool {
        self == Self::Terminated
    }
}
