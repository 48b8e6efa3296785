pub mod model;

pub use model::*;

use crate::error::ReplayError;
use crate::wizard::{SubmitOutcome, WizardSession};
use tracing::{debug, info};

/// Replays a scenario against a session, step by step.
///
/// Returns the outcome of every submission step, in order; non-submitting
/// steps contribute nothing to the result. A malformed step, a sequence
/// fault or a driver fault aborts the replay at the offending step.
pub fn replay(
    scenario: &Scenario,
    session: &mut WizardSession,
) -> Result<Vec<SubmitOutcome>, ReplayError> {
    info!(name = %scenario.name, steps = scenario.steps.len(), "replaying scenario");
    let mut outcomes = Vec::new();
    for (index, step) in scenario.steps.iter().enumerate() {
        debug!(index, "replaying step");
        match step {
            ScenarioStep::Begin => session.begin()?,
            ScenarioStep::SubmitBasic(raw) => {
                outcomes.push(session.submit_stage(raw.clone().into_payload()?)?);
            }
            ScenarioStep::SubmitConnection(raw) => {
                outcomes.push(session.submit_stage(raw.clone().into_payload()?)?);
            }
            ScenarioStep::SubmitConfiguration(raw) => {
                outcomes.push(session.submit_stage(raw.clone().into_payload()?)?);
            }
            ScenarioStep::SubmitSchedule(raw) => {
                outcomes.push(session.submit_stage(raw.clone().into_payload()?)?);
            }
            ScenarioStep::RequestCancel => session.request_cancel()?,
            ScenarioStep::ConfirmCancel => session.confirm_cancel()?,
            ScenarioStep::AbortCancel => session.abort_cancel()?,
            ScenarioStep::ReturnToPrevious => session.return_to_previous()?,
        }
    }
    Ok(outcomes)
}
