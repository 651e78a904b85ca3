//! What the dashboard should display for the current access state.

use crate::section::Section;
use crate::state::AccessState;

use std::fmt;

/// The outcome of resolving the current access state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// The authentication overlay is open and supersedes all content.
    Gate,

    /// The active section has not been unlocked in this session.
    Locked,

    /// The active section may be shown.
    Content(Section),
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gate => write!(f, "gate"),
            Self::Locked => write!(f, "locked"),
            Self::Content(section) => write!(f, "content({section})"),
        }
    }
}

/// Notification sent to subscribers after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewChange {
    /// The view resolved from the new state.
    pub view: View,

    /// Snapshot of the state the view was resolved from.
    pub state: AccessState,
}
