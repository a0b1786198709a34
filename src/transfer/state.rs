//! Transfer run-state definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Lifecycle of one transfer execution.
///
/// Terminal states: COMPLETED, FAILED. FAILED is re-enterable into RUNNING
/// via a retry, which restarts the whole step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RunState {
    /// Created but not yet started by the caller.
    NotStarted,

    /// Step timers are advancing the sequence.
    Running,

    /// Terminal: every step consumed, ready to finalize.
    Completed,

    /// Terminal: the bridge fault fired. Caller may retry or abandon.
    Failed,
}

impl RunState {
    /// Check if this is a terminal state (no more transitions without an
    /// explicit retry).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::NotStarted => "NOT_STARTED",
            RunState::Running => "RUNNING",
            RunState::Completed => "COMPLETED",
            RunState::Failed => "FAILED",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(RunState::Completed.is_terminal());
        assert!(RunState::Failed.is_terminal());

        assert!(!RunState::NotStarted.is_terminal());
        assert!(!RunState::Running.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(RunState::NotStarted.to_string(), "NOT_STARTED");
        assert_eq!(RunState::Running.to_string(), "RUNNING");
        assert_eq!(RunState::Completed.to_string(), "COMPLETED");
        assert_eq!(RunState::Failed.to_string(), "FAILED");
    }
}
