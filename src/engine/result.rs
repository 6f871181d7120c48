//! Resolution result types

use super::error::Position;
use super::verdict::Verdict;

/// Why the scan stopped before the end of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// An action failed
    Failed,
    /// Tests were still running
    TestsRunning,
}

/// Where and why the scan stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt {
    pub position: Position,
    pub reason: HaltReason,
}

/// Result of resolving a build report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub verdict: Verdict,
    /// Number of actions classified before the scan ended
    pub actions_examined: usize,
    /// `None` when the scan ran to the end of the report
    pub halt: Option<Halt>,
}

impl Resolution {
    pub fn halted(&self) -> bool {
        self.halt.is_some()
    }
}
