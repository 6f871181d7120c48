//! Verdict states and transitions
//!
//! The resolver is a small state machine. Its state is a [`Verdict`] and its
//! input is one [`ActionOutcome`] per action, in document order:
//!
//! | Outcome        | Next verdict    | Scan     |
//! |----------------|-----------------|----------|
//! | `Succeeded`    | `Success`       | continue |
//! | `Failed`       | `Failed`        | halt     |
//! | `TestsRunning` | unchanged       | halt     |
//! | `Undecided`    | `Indeterminate` | continue |

use std::fmt;

use super::result::HaltReason;
use crate::report::{ActionKind, ActionStatus};

/// Overall build verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// No action ever settled the verdict
    #[default]
    NoData,
    Success,
    Failed,
    Indeterminate,
}

impl Verdict {
    /// Numeric code, `None` for [`Verdict::NoData`]
    pub fn code(self) -> Option<i32> {
        match self {
            Verdict::NoData => None,
            Verdict::Success => Some(0),
            Verdict::Failed => Some(1),
            Verdict::Indeterminate => Some(-1),
        }
    }

    pub fn apply(self, outcome: ActionOutcome) -> Transition {
        match outcome {
            ActionOutcome::Succeeded => Transition::Continue(Verdict::Success),
            ActionOutcome::Failed => Transition::Halt(Verdict::Failed, HaltReason::Failed),
            ActionOutcome::TestsRunning => Transition::Halt(self, HaltReason::TestsRunning),
            ActionOutcome::Undecided => Transition::Continue(Verdict::Indeterminate),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{}", code),
            None => f.write_str("None"),
        }
    }
}

/// What a single action contributes to the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed,
    /// A test action still running
    TestsRunning,
    /// Anything else (queued, canceled, a running non-test action, ...)
    Undecided,
}

impl ActionOutcome {
    /// Success and failure win regardless of kind; only `running` looks at it.
    pub fn classify(status: &ActionStatus, kind: &ActionKind) -> Self {
        match status {
            ActionStatus::Success => ActionOutcome::Succeeded,
            ActionStatus::Failed => ActionOutcome::Failed,
            ActionStatus::Running if kind.is_test() => ActionOutcome::TestsRunning,
            _ => ActionOutcome::Undecided,
        }
    }
}

/// Result of feeding one outcome to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue(Verdict),
    Halt(Verdict, HaltReason),
}

impl Transition {
    pub fn verdict(self) -> Verdict {
        match self {
            Transition::Continue(v) | Transition::Halt(v, _) => v,
        }
    }
}
