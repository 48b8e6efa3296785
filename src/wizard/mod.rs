pub mod draft;
pub mod state;

pub use draft::*;
pub use state::*;

use crate::driver::{
    Action, FormDriver, NullDriver, NullSink, ObservationSink, TransitionEvent, controls,
};
use crate::error::{DriverError, FieldError, RecurrenceError, SequenceError, SessionError};
use crate::fields::{ConstraintCatalog, FieldName};
use crate::schedule::{PeriodicityForm, PeriodicityMode, build_rule};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Why a submission was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageFailures {
    /// One or more fields violated their constraints (first three stages).
    Fields(Vec<FieldError>),
    /// The periodicity form did not assemble into a rule (final stage).
    Schedule(RecurrenceError),
}

impl StageFailures {
    /// Number of individual failures carried; at least one by construction.
    pub fn len(&self) -> usize {
        match self {
            StageFailures::Fields(failures) => failures.len(),
            StageFailures::Schedule(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What a [`WizardSession::submit_stage`] call achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The stage committed and the session moved one stage forward.
    Advanced { from: Stage, to: Stage },
    /// The final stage committed; the run is complete.
    Completed(Parameterization),
    /// Validation refused the payload; the session did not move and the
    /// named control stays disabled.
    Rejected {
        stage: Stage,
        blocked: Action,
        failures: StageFailures,
    },
}

impl SubmitOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, SubmitOutcome::Rejected { .. })
    }
}

/// The state machine for one parameterization run.
///
/// A session owns its draft, its constraint catalog and the two boundary
/// objects: a [`FormDriver`] it issues intents to, and an [`ObservationSink`]
/// it reports transitions and rejections to. All validation is decided here,
/// before any driver call; a driver is never asked whether data is valid.
///
/// Calls are processed one at a time to completion. A session is `Send` and
/// may move between threads, but it is not meant to be shared: one run, one
/// session, serialized calls.
pub struct WizardSession {
    catalog: ConstraintCatalog,
    driver: Box<dyn FormDriver>,
    sink: Box<dyn ObservationSink>,
    state: WizardState,
    draft: ParameterizationDraft,
}

/// Assembles a [`WizardSession`]. Catalog, driver and sink all default to
/// inert stand-ins, so `WizardSession::builder().build()` gives a headless
/// session with the observed transfer constraints.
pub struct WizardSessionBuilder {
    catalog: ConstraintCatalog,
    driver: Box<dyn FormDriver>,
    sink: Box<dyn ObservationSink>,
}

impl WizardSessionBuilder {
    pub fn new() -> Self {
        Self {
            catalog: ConstraintCatalog::transfer_defaults(),
            driver: Box::new(NullDriver),
            sink: Box::new(NullSink),
        }
    }

    pub fn with_catalog(mut self, catalog: ConstraintCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_driver(mut self, driver: impl FormDriver + 'static) -> Self {
        self.driver = Box::new(driver);
        self
    }

    pub fn with_sink(mut self, sink: impl ObservationSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn build(self) -> WizardSession {
        WizardSession {
            catalog: self.catalog,
            driver: self.driver,
            sink: self.sink,
            state: WizardState::Start,
            draft: ParameterizationDraft::new(),
        }
    }
}

impl Default for WizardSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn builder() -> WizardSessionBuilder {
        WizardSessionBuilder::new()
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// The draft as it stands; callers get to look, never to touch.
    pub fn draft(&self) -> &ParameterizationDraft {
        &self.draft
    }

    /// Enters the wizard from the home screen (or restarts it after a
    /// completed run) with a fresh, empty draft.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        match self.state {
            WizardState::Start | WizardState::Completed => {}
            _ => return Err(self.unavailable("begin")),
        }
        self.driver.click_action(Action::Begin)?;
        let from = self.state;
        self.draft = ParameterizationDraft::new();
        self.state = WizardState::BasicData;
        self.emit_transition(from, self.state);
        Ok(())
    }

    /// Submits one stage payload.
    ///
    /// On success the payload is committed into the draft, the matching
    /// continue/create intent is clicked, and the session advances. On a
    /// validation failure nothing is committed, no driver intent is issued,
    /// and the rejection names the control that must stay disabled.
    ///
    /// Submitting the wrong stage, or submitting outside a data state, is a
    /// sequence fault: the session refuses the call and must be considered
    /// broken by its caller.
    pub fn submit_stage(&mut self, payload: StagePayload) -> Result<SubmitOutcome, SessionError> {
        let Some(current) = self.state.stage() else {
            return Err(self.unavailable("submit_stage"));
        };
        let submitted = payload.stage();
        if submitted != current {
            warn!(%submitted, state = %self.state, "stage submitted out of order");
            return Err(SequenceError::StageMismatch {
                submitted,
                state: self.state,
            }
            .into());
        }

        match payload {
            StagePayload::Basic(data) => self.submit_basic(data),
            StagePayload::Connection(data) => self.submit_connection(data),
            StagePayload::Configuration(data) => self.submit_configuration(data),
            StagePayload::Schedule { mode, form } => self.submit_schedule(mode, form),
        }
    }

    /// Opens the cancel confirmation dialog, remembering the screen it was
    /// opened from.
    pub fn request_cancel(&mut self) -> Result<(), SessionError> {
        let Some(prior) = self.state.stage() else {
            return Err(self.unavailable("request_cancel"));
        };
        self.driver.click_action(Action::Cancel)?;
        let from = self.state;
        self.state = WizardState::Cancelling { prior };
        self.emit_transition(from, self.state);
        Ok(())
    }

    /// Answers the dialog with "yes": the whole draft is discarded and the
    /// session is back at the home screen.
    pub fn confirm_cancel(&mut self) -> Result<(), SessionError> {
        if !matches!(self.state, WizardState::Cancelling { .. }) {
            return Err(self.unavailable("confirm_cancel"));
        }
        self.driver.click_action(Action::ConfirmCancel)?;
        let from = self.state;
        self.draft = ParameterizationDraft::new();
        self.state = WizardState::Start;
        self.emit_transition(from, self.state);
        Ok(())
    }

    /// Closes the dialog and restores the screen it was opened from, with
    /// the draft untouched.
    pub fn abort_cancel(&mut self) -> Result<(), SessionError> {
        let WizardState::Cancelling { prior } = self.state else {
            return Err(self.unavailable("abort_cancel"));
        };
        self.driver.click_action(Action::AbortCancel)?;
        let from = self.state;
        self.state = prior.state();
        self.emit_transition(from, self.state);
        Ok(())
    }

    /// Routes back to the home screen from any of the first three stages.
    ///
    /// Committed stages stay in the draft; whatever the current screen held
    /// was never committed and is simply gone. The observed product routes
    /// home, not one stage back, and this mirrors that.
    pub fn return_to_previous(&mut self) -> Result<(), SessionError> {
        match self.state {
            WizardState::BasicData
            | WizardState::ConnectionData
            | WizardState::ConfigurationData => {}
            _ => return Err(self.unavailable("return_to_previous")),
        }
        self.driver.click_action(Action::Return)?;
        let from = self.state;
        self.state = WizardState::Start;
        self.emit_transition(from, self.state);
        Ok(())
    }

    fn submit_basic(&mut self, data: BasicData) -> Result<SubmitOutcome, SessionError> {
        let failures = self.catalog.check_all(data.text_fields());
        if !failures.is_empty() {
            return Ok(self.reject(
                Stage::BasicData,
                Action::Continue,
                StageFailures::Fields(failures),
            ));
        }
        self.driver.set_field(FieldName::Name, &data.name)?;
        self.driver
            .select_option(controls::CONNECTION_TYPE, data.connection_type.as_str())?;
        self.driver
            .set_field(FieldName::Description, &data.description)?;
        self.driver.click_action(Action::Continue)?;
        self.draft.basic = Some(data);
        Ok(self.commit_and_advance(Stage::BasicData, Stage::ConnectionData))
    }

    fn submit_connection(&mut self, data: ConnectionData) -> Result<SubmitOutcome, SessionError> {
        let failures = self.catalog.check_all(data.text_fields());
        if !failures.is_empty() {
            return Ok(self.reject(
                Stage::ConnectionData,
                Action::Continue,
                StageFailures::Fields(failures),
            ));
        }
        for (field, value) in data.text_fields() {
            self.driver.set_field(field, value)?;
        }
        self.driver.click_action(Action::Continue)?;
        self.draft.connection = Some(data);
        Ok(self.commit_and_advance(Stage::ConnectionData, Stage::ConfigurationData))
    }

    fn submit_configuration(
        &mut self,
        data: ConfigurationData,
    ) -> Result<SubmitOutcome, SessionError> {
        let failures = self.catalog.check_all(data.text_fields());
        if !failures.is_empty() {
            return Ok(self.reject(
                Stage::ConfigurationData,
                Action::Continue,
                StageFailures::Fields(failures),
            ));
        }
        self.driver
            .select_option(controls::CONFIG_MODE, data.mode.as_str())?;
        self.driver.set_field(FieldName::Regex, &data.regex)?;
        self.driver
            .select_option(controls::STATUS, data.status.as_str())?;
        self.driver.click_action(Action::Continue)?;
        self.draft.configuration = Some(data);
        Ok(self.commit_and_advance(Stage::ConfigurationData, Stage::SchedulePeriodicity))
    }

    fn submit_schedule(
        &mut self,
        mode: PeriodicityMode,
        form: PeriodicityForm,
    ) -> Result<SubmitOutcome, SessionError> {
        let rule = match build_rule(mode, &form) {
            Ok(rule) => rule,
            Err(error) => {
                return Ok(self.reject(
                    Stage::SchedulePeriodicity,
                    Action::Create,
                    StageFailures::Schedule(error),
                ));
            }
        };
        self.drive_schedule(mode, &form)?;
        self.driver.click_action(Action::Create)?;
        self.draft.schedule = Some(rule);
        let from = self.state;
        self.state = WizardState::Completed;
        self.emit_transition(from, self.state);

        // Stages fill strictly in order, so a committed final stage implies
        // a fully populated draft.
        match self.draft.finish() {
            Some(parameterization) => Ok(SubmitOutcome::Completed(parameterization)),
            None => Err(SequenceError::UnavailableOperation {
                operation: "submit_stage",
                state: from,
            }
            .into()),
        }
    }

    /// Replays the form's selections onto the driver, screen order: the mode
    /// tab first, then every populated selector, begin time last.
    fn drive_schedule(
        &mut self,
        mode: PeriodicityMode,
        form: &PeriodicityForm,
    ) -> Result<(), DriverError> {
        self.driver
            .select_option(controls::PERIODICITY, mode.as_str())?;
        if let Some(minute) = form.minute() {
            self.driver
                .select_option(controls::MINUTE, &minute.to_string())?;
        }
        if let Some(interval) = form.hour_interval() {
            self.driver
                .select_option(controls::HOUR_INTERVAL, &interval.to_string())?;
        }
        if let Some(variant) = form.daily_variant() {
            self.driver
                .select_option(controls::DAILY_VARIANT, variant.as_str())?;
        }
        for day in form.days() {
            self.driver.select_option(controls::WEEKDAY, day.as_str())?;
        }
        if let Some(day) = form.day_of_month() {
            self.driver
                .select_option(controls::DAY_OF_MONTH, &day.to_string())?;
        }
        if let Some(interval) = form.month_interval() {
            self.driver
                .select_option(controls::MONTH_INTERVAL, &interval.to_string())?;
        }
        if let Some(sequence) = form.sequence() {
            self.driver
                .select_option(controls::ORDINAL_SEQUENCE, sequence.as_str())?;
        }
        if let Some(weekday) = form.ordinal_weekday() {
            self.driver
                .select_option(controls::ORDINAL_WEEKDAY, weekday.as_str())?;
        }
        if let Some(month) = form.month() {
            self.driver.select_option(controls::MONTH, month.as_str())?;
        }
        if let Some(hour) = form.begin_hour() {
            self.driver
                .select_option(controls::BEGIN_HOUR, &hour.to_string())?;
        }
        if let Some(minute) = form.begin_minute() {
            self.driver
                .select_option(controls::BEGIN_MINUTE, &minute.to_string())?;
        }
        Ok(())
    }

    fn commit_and_advance(&mut self, from: Stage, to: Stage) -> SubmitOutcome {
        let prior = self.state;
        self.state = to.state();
        self.emit_transition(prior, self.state);
        SubmitOutcome::Advanced { from, to }
    }

    fn reject(&mut self, stage: Stage, blocked: Action, failures: StageFailures) -> SubmitOutcome {
        debug!(%stage, %blocked, count = failures.len(), "submission rejected");
        self.sink.rejection(stage, blocked, &failures);
        SubmitOutcome::Rejected {
            stage,
            blocked,
            failures,
        }
    }

    fn emit_transition(&mut self, from: WizardState, to: WizardState) {
        info!(%from, %to, "session transition");
        self.sink.transition(TransitionEvent {
            from,
            to,
            draft: self.draft.clone(),
        });
    }

    fn unavailable(&self, operation: &'static str) -> SessionError {
        warn!(operation, state = %self.state, "operation refused");
        SequenceError::UnavailableOperation {
            operation,
            state: self.state,
        }
        .into()
    }
}
