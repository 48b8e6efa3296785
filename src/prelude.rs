//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the paramflow
//! crate. Import this module to assemble and drive a wizard session without
//! having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use paramflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Record everything the session does.
//! let sink = RecordingSink::new();
//! let transcript = sink.handle();
//! let mut session = WizardSession::builder().with_sink(sink).build();
//!
//! // Replay a scripted run against it.
//! let scenario = Scenario::from_file("path/to/scenario.json")?;
//! let outcomes = replay(&scenario, &mut session)?;
//! println!("{} submissions, final state: {}", outcomes.len(), session.state());
//!
//! // Render the observed run.
//! let report = TranscriptFormatter::default().render(&transcript.snapshot());
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

// Session machinery
pub use crate::wizard::{
    ActiveState, BasicData, ConfigMode, ConfigurationData, ConnectionData, ConnectionType,
    Parameterization, ParameterizationDraft, Stage, StageFailures, StagePayload, SubmitOutcome,
    WizardSession, WizardSessionBuilder, WizardState,
};

// Field validation
pub use crate::fields::{ConstraintCatalog, FieldConstraint, FieldName, ValidationVerdict};

// Periodicity
pub use crate::schedule::{
    BeginTime, DailyVariant, DayOfMonth, Hour, HourInterval, Minute, MonthInterval, MonthOfYear,
    MonthlyPattern, OrdinalWeek, PeriodicityField, PeriodicityForm, PeriodicityMode,
    RecurrenceRule, Weekday, YearlyPattern, build_rule,
};

// Driver and observation seams
pub use crate::driver::{
    Action, FormDriver, NullDriver, NullSink, ObservationSink, RecordingSink, TranscriptHandle,
    TransitionEvent,
};

// Scenarios and reporting
pub use crate::report::{RunTranscript, TranscriptEntry, TranscriptFormatter};
pub use crate::scenario::{Scenario, ScenarioStep, replay};

// Messages and configuration
pub use crate::config::SessionConfig;
pub use crate::messages::MessageCatalog;

// Error types
pub use crate::error::{FieldError, RecurrenceError, SequenceError, SessionError};

// Standard library re-exports commonly used with this crate
pub use std::collections::BTreeSet;

// Result type alias for convenience. The defaulted error parameter keeps
// explicit `Result<T, E>` spellings working alongside this glob import.
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
