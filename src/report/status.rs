//! Action status and type parsing
//!
//! Providers report statuses as free-form strings. Only a few values carry
//! meaning for the verdict; the rest are kept verbatim for diagnostics.

use std::fmt;

/// Status of a single action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStatus {
    Success,
    Failed,
    Running,
    /// Any other status (queued, canceled, timedout, ...)
    Other(String),
}

impl ActionStatus {
    /// Parse a raw status string. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => ActionStatus::Success,
            "failed" => ActionStatus::Failed,
            "running" => ActionStatus::Running,
            other => ActionStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActionStatus::Success => "success",
            ActionStatus::Failed => "failed",
            ActionStatus::Running => "running",
            ActionStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of action, as far as the verdict cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Test,
    Other(String),
}

impl ActionKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "test" => ActionKind::Test,
            other => ActionKind::Other(other.to_string()),
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, ActionKind::Test)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Test => "test",
            ActionKind::Other(s) => s,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
