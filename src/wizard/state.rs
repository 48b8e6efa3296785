use serde::{Deserialize, Serialize};
use std::fmt;

/// The four ordered data-entry stages of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    BasicData,
    ConnectionData,
    ConfigurationData,
    SchedulePeriodicity,
}

impl Stage {
    /// Every stage, in flow order.
    pub const ALL: [Stage; 4] = [
        Stage::BasicData,
        Stage::ConnectionData,
        Stage::ConfigurationData,
        Stage::SchedulePeriodicity,
    ];

    /// The stage that follows a successful submission, or `None` from the
    /// last stage (which completes the run instead).
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::BasicData => Some(Stage::ConnectionData),
            Stage::ConnectionData => Some(Stage::ConfigurationData),
            Stage::ConfigurationData => Some(Stage::SchedulePeriodicity),
            Stage::SchedulePeriodicity => None,
        }
    }

    /// The session state in which this stage accepts submissions.
    pub fn state(self) -> WizardState {
        match self {
            Stage::BasicData => WizardState::BasicData,
            Stage::ConnectionData => WizardState::ConnectionData,
            Stage::ConfigurationData => WizardState::ConfigurationData,
            Stage::SchedulePeriodicity => WizardState::SchedulePeriodicity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::BasicData => "basic data",
            Stage::ConnectionData => "connection data",
            Stage::ConfigurationData => "configuration data",
            Stage::SchedulePeriodicity => "schedule periodicity",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a session can be at any instant.
///
/// `Cancelling` remembers the data state the confirmation dialog was opened
/// from, so aborting the dialog can restore the screen exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardState {
    Start,
    BasicData,
    ConnectionData,
    ConfigurationData,
    SchedulePeriodicity,
    Completed,
    Cancelling { prior: Stage },
}

impl WizardState {
    /// The stage this state accepts submissions for, if it is a data state.
    pub fn stage(self) -> Option<Stage> {
        match self {
            WizardState::BasicData => Some(Stage::BasicData),
            WizardState::ConnectionData => Some(Stage::ConnectionData),
            WizardState::ConfigurationData => Some(Stage::ConfigurationData),
            WizardState::SchedulePeriodicity => Some(Stage::SchedulePeriodicity),
            WizardState::Start | WizardState::Completed | WizardState::Cancelling { .. } => None,
        }
    }

    /// True for the four states where a user is filling in a stage.
    pub fn is_data_entry(self) -> bool {
        self.stage().is_some()
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardState::Start => f.write_str("start"),
            WizardState::BasicData => f.write_str("basic data"),
            WizardState::ConnectionData => f.write_str("connection data"),
            WizardState::ConfigurationData => f.write_str("configuration data"),
            WizardState::SchedulePeriodicity => f.write_str("schedule periodicity"),
            WizardState::Completed => f.write_str("completed"),
            WizardState::Cancelling { prior } => write!(f, "cancelling (from {prior})"),
        }
    }
}
