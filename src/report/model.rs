//! BuildReport, Step, and Action definitions
//!
//! These mirror the shape of a CI provider's build-status API response. Only
//! the keys the resolver reads are modelled; everything else in the document
//! is ignored on load.
//!
//! Keys the resolver depends on are wrapped in [`Lenient`] and kept as
//! `Option`, so a missing or wrongly typed key is reported by the resolver,
//! with its position, only if the scan actually reaches that element.
//! Informational keys are kept as raw JSON and only rendered for diagnostics.

use serde::Deserialize;
use serde_json::Value;

/// A value that either has the expected shape or is kept verbatim
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Valid(T),
    Invalid(Value),
}

impl<T> Lenient<T> {
    pub fn valid(&self) -> Result<&T, &Value> {
        match self {
            Lenient::Valid(v) => Ok(v),
            Lenient::Invalid(raw) => Err(raw),
        }
    }
}

/// JSON type name, for error messages
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Render an informational value, `fallback` when absent
pub fn render(value: &Option<Value>, fallback: &str) -> String {
    match value {
        None | Some(Value::Null) => fallback.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// ============================================================================
// BuildReport
// ============================================================================

/// A complete build report for one build
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildReport {
    /// Ordered build steps (required by the resolver)
    #[serde(default)]
    pub steps: Option<Lenient<Vec<Lenient<Step>>>>,

    /// Provider-reported outcome, informational only
    #[serde(default)]
    pub outcome: Option<Value>,

    /// Provider platform version, informational only
    #[serde(default)]
    pub platform: Option<Value>,

    /// Provider build number, informational only
    #[serde(default)]
    pub build_num: Option<Value>,
}

// ============================================================================
// Step
// ============================================================================

/// A named phase of a build
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub name: Option<Value>,

    /// Ordered actions (required by the resolver)
    #[serde(default)]
    pub actions: Option<Lenient<Vec<Lenient<Action>>>>,
}

impl Step {
    pub fn display_name(&self) -> String {
        render(&self.name, "<unnamed>")
    }
}

// ============================================================================
// Action
// ============================================================================

/// The smallest reported unit of work within a step
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Action {
    /// Step label as reported by the provider (usually an index)
    #[serde(default)]
    pub step: Option<Value>,

    #[serde(default, rename = "type")]
    pub action_type: Option<Lenient<String>>,

    #[serde(default)]
    pub status: Option<Lenient<String>>,
}

impl Action {
    /// Step label rendered for diagnostics
    pub fn step_label(&self) -> String {
        render(&self.step, "-")
    }
}
