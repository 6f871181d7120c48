//! # CI Build Status
//!
//! Reduce a CI provider's step-by-step build report to one verdict.
//!
//! The report is the JSON a build-status API returns for a single build: an
//! ordered list of steps, each holding an ordered list of actions with a
//! `status` and a `type`. The resolver walks that tree once and settles on:
//!
//! - **`0`** - the build succeeded (or its tests are running after an
//!   unbroken run of successes)
//! - **`1`** - an action failed; nothing after it is looked at
//! - **`-1`** - the last thing seen was neither a success nor a failure
//! - **`None`** - no action ever settled the verdict
//!
//! ## Quick Start
//!
//! ```rust
//! use ci_build_status::{ReportLoader, StatusResolver, Verdict};
//!
//! fn main() -> anyhow::Result<()> {
//!     let report = ReportLoader::from_json_str(r#"{
//!         "steps": [
//!             { "name": "build", "actions": [{ "step": 0, "type": "build", "status": "success" }] },
//!             { "name": "test",  "actions": [{ "step": 1, "type": "test",  "status": "running" }] }
//!         ]
//!     }"#)?;
//!
//!     let resolution = StatusResolver::resolve(&report)?;
//!     assert_eq!(resolution.verdict, Verdict::Success);
//!     println!("{}", resolution.verdict);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod engine;
pub mod report;

// Re-export main types
pub use config::{Config, ConfigError, ExitMode};
pub use engine::{
    ActionOutcome, Halt, HaltReason, Position, Resolution, ResolveError, StatusResolver, Verdict,
};
pub use report::{
    Action, ActionKind, ActionStatus, BuildReport, Lenient, LoadError, ReportLoader, Step,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, ExitMode};
    pub use crate::engine::{Resolution, ResolveError, StatusResolver, Verdict};
    pub use crate::report::{BuildReport, LoadError, ReportLoader};
}
