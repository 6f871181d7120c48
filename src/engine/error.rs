//! Resolver error types

use std::fmt;

/// Location of an element inside a build report, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Report,
    Step { step: usize },
    Action { step: usize, action: usize },
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Report => write!(f, "report"),
            Position::Step { step } => write!(f, "steps[{}]", step),
            Position::Action { step, action } => write!(f, "steps[{}].actions[{}]", step, action),
        }
    }
}

/// Errors that can occur while resolving a build report
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Missing required key `{key}` on {position}")]
    MissingKey {
        key: &'static str,
        position: Position,
    },

    #[error("Invalid key `{key}` on {position}: expected {expected}, found {found}")]
    InvalidKey {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
        position: Position,
    },

    #[error("Invalid element at {position}: expected an object, found {found}")]
    InvalidElement {
        found: &'static str,
        position: Position,
    },
}
