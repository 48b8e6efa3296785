pub mod recording;

pub use recording::*;

use crate::error::DriverError;
use crate::fields::FieldName;
use crate::wizard::{ParameterizationDraft, Stage, StageFailures, WizardState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical names for the wizard's selectable (non-text) controls.
///
/// Adapters map these onto whatever their surface actually exposes (radio
/// groups, dropdowns, checkbox rows); the session never sees a locator.
pub mod controls {
    pub const CONNECTION_TYPE: &str = "connection-type";
    pub const CONFIG_MODE: &str = "config-mode";
    pub const STATUS: &str = "status";
    pub const PERIODICITY: &str = "periodicity";
    pub const MINUTE: &str = "minute";
    pub const HOUR_INTERVAL: &str = "hour-interval";
    pub const DAILY_VARIANT: &str = "daily-variant";
    pub const WEEKDAY: &str = "weekday";
    pub const DAY_OF_MONTH: &str = "day-of-month";
    pub const MONTH_INTERVAL: &str = "month-interval";
    pub const ORDINAL_SEQUENCE: &str = "ordinal-sequence";
    pub const ORDINAL_WEEKDAY: &str = "ordinal-weekday";
    pub const MONTH: &str = "month";
    pub const BEGIN_HOUR: &str = "begin-hour";
    pub const BEGIN_MINUTE: &str = "begin-minute";
}

/// The clickable flow controls of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Enter the wizard from the home screen.
    Begin,
    /// Commit the current stage and move on (stages one to three).
    Continue,
    /// Commit the final stage and create the parameterization.
    Create,
    /// Open the cancel confirmation dialog.
    Cancel,
    /// Answer the dialog with "yes, cancel".
    ConfirmCancel,
    /// Close the dialog and keep editing.
    AbortCancel,
    /// Leave the current stage for the home screen.
    Return,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Begin => "begin",
            Action::Continue => "continue",
            Action::Create => "create",
            Action::Cancel => "cancel",
            Action::ConfirmCancel => "confirm-cancel",
            Action::AbortCancel => "abort-cancel",
            Action::Return => "return",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emitted to the observation sink on every state change, with a snapshot of
/// the draft as it stands after the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub from: WizardState,
    pub to: WizardState,
    pub draft: ParameterizationDraft,
}

/// How the session reaches the outside world.
///
/// The session issues these calls as *intents*, always after it has already
/// decided locally that the data is valid; it never asks a driver whether
/// something is acceptable. `read_field_value` and `is_control_enabled` exist
/// for the surrounding test layer and are not called by the session itself.
///
/// Calls may suspend for as long as the adapter needs; timeout and retry
/// policy live entirely on the adapter side.
pub trait FormDriver: Send {
    fn set_field(&mut self, field: FieldName, value: &str) -> Result<(), DriverError>;

    fn select_option(&mut self, control: &'static str, value: &str) -> Result<(), DriverError>;

    fn click_action(&mut self, action: Action) -> Result<(), DriverError>;

    fn read_field_value(&mut self, field: FieldName) -> Result<String, DriverError>;

    fn is_control_enabled(&mut self, action: Action) -> Result<bool, DriverError>;
}

/// Receives what the session observed: completed transitions and refused
/// submissions.
pub trait ObservationSink: Send {
    fn transition(&mut self, event: TransitionEvent);

    /// A submission was refused; `blocked` names the control that must stay
    /// disabled until the payload is corrected.
    fn rejection(&mut self, stage: Stage, blocked: Action, failures: &StageFailures);
}

/// A driver that accepts every intent and does nothing, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDriver;

impl FormDriver for NullDriver {
    fn set_field(&mut self, _field: FieldName, _value: &str) -> Result<(), DriverError> {
        Ok(())
    }

    fn select_option(&mut self, _control: &'static str, _value: &str) -> Result<(), DriverError> {
        Ok(())
    }

    fn click_action(&mut self, _action: Action) -> Result<(), DriverError> {
        Ok(())
    }

    fn read_field_value(&mut self, _field: FieldName) -> Result<String, DriverError> {
        Ok(String::new())
    }

    fn is_control_enabled(&mut self, _action: Action) -> Result<bool, DriverError> {
        Ok(true)
    }
}

/// A sink that ignores every observation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ObservationSink for NullSink {
    fn transition(&mut self, _event: TransitionEvent) {}

    fn rejection(&mut self, _stage: Stage, _blocked: Action, _failures: &StageFailures) {}
}
