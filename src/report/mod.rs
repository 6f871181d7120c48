//! Build report types and loading
//!
//! This module contains everything needed to get a build report into memory:
//! - `model` - BuildReport, Step, and Action
//! - `status` - ActionStatus and ActionKind for classifying raw strings
//! - `loader` - Load reports from files, strings, and readers

pub mod loader;
pub mod model;
pub mod status;

pub use loader::{LoadError, ReportLoader};
pub use model::{Action, BuildReport, Lenient, Step};
pub use status::{ActionKind, ActionStatus};
