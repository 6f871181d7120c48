//! Status resolution engine
//!
//! This module contains:
//! - `resolver` - Walks a build report and settles on a verdict
//! - `verdict` - Verdict states and the per-action transition rules
//! - `result` - Resolution and halt bookkeeping
//! - `error` - Resolver error types

pub mod error;
pub mod resolver;
pub mod result;
pub mod verdict;

pub use error::{Position, ResolveError};
pub use resolver::StatusResolver;
pub use result::{Halt, HaltReason, Resolution};
pub use verdict::{ActionOutcome, Transition, Verdict};
