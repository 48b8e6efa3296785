use crate::fields::FieldName;
use crate::schedule::{PeriodicityField, PeriodicityMode};
use crate::wizard::{Stage, WizardState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways a single form field can fail its constraint check.
///
/// Every variant carries the field name so a caller can map the failure to a
/// user-facing message through a catalog of its choice.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    #[error("Field '{field}' is required but was left empty")]
    MissingRequired { field: FieldName },

    #[error("Field '{field}' must be at least {min} characters long, but has {actual}")]
    TooShort {
        field: FieldName,
        min: usize,
        actual: usize,
    },

    #[error("Field '{field}' must be at most {max} characters long, but has {actual}")]
    TooLong {
        field: FieldName,
        max: usize,
        actual: usize,
    },
}

impl FieldError {
    /// The field this failure belongs to.
    pub fn field(&self) -> FieldName {
        match self {
            FieldError::MissingRequired { field }
            | FieldError::TooShort { field, .. }
            | FieldError::TooLong { field, .. } => *field,
        }
    }
}

/// Errors produced while assembling a recurrence rule from a periodicity form.
///
/// All of these are recoverable: the caller fixes the form and submits again.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceError {
    #[error("Weekly periodicity requires at least one selected day")]
    EmptyDaySelection,

    #[error("Both the day-of-month and the ordinal sub-mode are populated for {mode} periodicity")]
    AmbiguousSubMode { mode: PeriodicityMode },

    #[error("The {mode} configuration is incomplete: missing {missing}")]
    IncompleteSubMode {
        mode: PeriodicityMode,
        missing: PeriodicityField,
    },

    #[error("{mode} periodicity requires a begin time (an hour and a minute)")]
    MissingBeginTime { mode: PeriodicityMode },

    #[error("The '{found}' field is populated, but it does not belong to {requested} periodicity")]
    ConflictingMode {
        requested: PeriodicityMode,
        found: PeriodicityField,
    },
}

/// Contract violations by the calling driver layer.
///
/// These are programmer faults, never user input problems, and they are
/// always fatal for the session: the machine refuses the call and the caller
/// must not retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("A {submitted} payload was submitted while the session is at {state}")]
    StageMismatch { submitted: Stage, state: WizardState },

    #[error("'{operation}' is not available while the session is at {state}")]
    UnavailableOperation {
        operation: &'static str,
        state: WizardState,
    },
}

/// An infrastructure failure reported by a driver adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Driver failed to {action}: {message}")]
pub struct DriverError {
    pub action: String,
    pub message: String,
}

impl DriverError {
    pub fn new(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            message: message.into(),
        }
    }
}

/// Fatal errors a session operation can return.
///
/// Validation failures are not in here: a rejected submission is a regular
/// [`SubmitOutcome`](crate::wizard::SubmitOutcome), not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// A discrete selector value outside its selectable option set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value} is not a selectable {option_set} (allowed {min}..={max})")]
pub struct OutOfRange {
    pub option_set: &'static str,
    pub value: u8,
    pub min: u8,
    pub max: u8,
}

/// A textual option that matches no known choice of an enumerated control.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a recognized {what}")]
pub struct UnknownOption {
    pub what: &'static str,
    pub value: String,
}

/// Errors raised when validating session configuration at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The configuration value '{0}' is required but was not provided")]
    Missing(&'static str),

    #[error("The configuration value '{0}' must not be blank")]
    Blank(&'static str),
}

/// Errors while loading or interpreting a scenario script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("Could not read scenario file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse scenario JSON: {0}")]
    Parse(String),

    #[error(transparent)]
    UnknownOption(#[from] UnknownOption),

    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

/// Errors while replaying a scenario against a live session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors around transcript artifact persistence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("Serialization failed: {0}")]
    Encode(String),

    #[error("Deserialization failed: {0}")]
    Decode(String),

    #[error("Could not access transcript file '{path}': {message}")]
    Io { path: String, message: String },
}
