//! Status resolver
//!
//! Walks the steps of a build report in document order, and the actions of
//! each step in document order, feeding every action to the verdict state
//! machine until it halts or the report runs out.

use crate::report::model::{json_type, render, Lenient};
use crate::report::{Action, ActionKind, ActionStatus, BuildReport};

use super::error::{Position, ResolveError};
use super::result::{Halt, Resolution};
use super::verdict::{ActionOutcome, Transition, Verdict};

pub struct StatusResolver;

impl StatusResolver {
    /// Resolve a report to a verdict.
    ///
    /// Required keys are only checked on elements the scan reaches, so a
    /// malformed step after a failure does not turn the result into an error.
    #[tracing::instrument(skip_all)]
    pub fn resolve(report: &BuildReport) -> Result<Resolution, ResolveError> {
        if report.outcome.is_some() {
            tracing::debug!(outcome = %render(&report.outcome, "-"), "Provider outcome");
        }
        if report.platform.is_some() {
            tracing::debug!(platform = %render(&report.platform, "-"), "Provider platform");
        }
        if report.build_num.is_some() {
            tracing::debug!(build_num = %render(&report.build_num, "-"), "Build number");
        }

        let steps = require(&report.steps, "steps", "an array", Position::Report)?;

        let mut verdict = Verdict::default();
        let mut actions_examined = 0;
        let mut halt = None;

        'steps: for (step_index, step) in steps.iter().enumerate() {
            let step_position = Position::Step { step: step_index };
            let step = element(step, step_position)?;
            tracing::debug!(step = step_index, name = %step.display_name(), "Step");

            let actions = require(&step.actions, "actions", "an array", step_position)?;

            for (action_index, action) in actions.iter().enumerate() {
                let position = Position::Action {
                    step: step_index,
                    action: action_index,
                };
                let action = element(action, position)?;
                let (status, kind) = Self::read(action, position)?;
                let outcome = ActionOutcome::classify(&status, &kind);
                actions_examined += 1;

                let transition = verdict.apply(outcome);
                tracing::debug!(
                    %position,
                    label = %action.step_label(),
                    %status,
                    %kind,
                    ?outcome,
                    from = %verdict,
                    to = %transition.verdict(),
                    "Action"
                );

                match transition {
                    Transition::Continue(next) => verdict = next,
                    Transition::Halt(next, reason) => {
                        verdict = next;
                        halt = Some(Halt { position, reason });
                        break 'steps;
                    }
                }
            }
        }

        let resolution = Resolution {
            verdict,
            actions_examined,
            halt,
        };

        tracing::debug!(
            verdict = %resolution.verdict,
            actions_examined = resolution.actions_examined,
            halt = ?resolution.halt,
            "Resolved build status"
        );

        Ok(resolution)
    }

    fn read(action: &Action, position: Position) -> Result<(ActionStatus, ActionKind), ResolveError> {
        let status = require(&action.status, "status", "a string", position)?;
        let kind = require(&action.action_type, "type", "a string", position)?;
        Ok((ActionStatus::parse(status), ActionKind::parse(kind)))
    }
}

fn require<'a, T>(
    field: &'a Option<Lenient<T>>,
    key: &'static str,
    expected: &'static str,
    position: Position,
) -> Result<&'a T, ResolveError> {
    match field {
        None => Err(ResolveError::MissingKey { key, position }),
        Some(value) => value.valid().map_err(|raw| ResolveError::InvalidKey {
            key,
            expected,
            found: json_type(raw),
            position,
        }),
    }
}

fn element<T>(value: &Lenient<T>, position: Position) -> Result<&T, ResolveError> {
    value.valid().map_err(|raw| ResolveError::InvalidElement {
        found: json_type(raw),
        position,
    })
}
