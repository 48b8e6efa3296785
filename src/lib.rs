//! # Paramflow - Parameterization Wizard Engine
//!
//! **Paramflow** is a typed model of the four-stage "new parameterization"
//! wizard found in a managed file-transfer product: basic data, connection
//! data, configuration, and schedule periodicity. The crate owns every rule
//! of that flow. Field constraints, periodicity coherence, stage ordering and
//! cancellation semantics are all decided here, in one place, instead of
//! being scattered across screens.
//!
//! ## Core Workflow
//!
//! The engine is UI-agnostic. It consumes typed stage payloads and talks to
//! the outside world through two narrow seams:
//!
//! 1. **Assemble a session**: use `WizardSession::builder()` to pick a
//!    constraint catalog, a [`FormDriver`](driver::FormDriver) that carries
//!    validated intents to a concrete UI or API, and an
//!    [`ObservationSink`](driver::ObservationSink) that hears about every
//!    transition and rejection.
//! 2. **Drive the flow**: call `begin()`, then `submit_stage()` once per
//!    stage. Valid payloads commit and advance; invalid ones come back as
//!    [`SubmitOutcome::Rejected`](wizard::SubmitOutcome) with the exact
//!    failures, and nothing moves.
//! 3. **Branch off**: the cancel dialog (`request_cancel`, `confirm_cancel`,
//!    `abort_cancel`) and the return button (`return_to_previous`) are first
//!    class operations with the same state discipline.
//! 4. **Replay and report**: scripted runs load from JSON via
//!    [`scenario::replay`], and a [`RecordingSink`](driver::RecordingSink)
//!    accumulates a [`RunTranscript`](report::RunTranscript) that renders to
//!    a human-readable report or saves as a compact binary artifact.
//!
//! ## Quick Start
//!
//! The following example walks one complete run through all four stages.
//!
//! ```rust,no_run
//! use paramflow::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Observe the run through a recording sink.
//!     let sink = RecordingSink::new();
//!     let transcript = sink.handle();
//!
//!     let mut session = WizardSession::builder().with_sink(sink).build();
//!     session.begin()?;
//!
//!     // Stage one: basic data.
//!     let outcome = session.submit_stage(StagePayload::Basic(BasicData {
//!         name: "Transferencia Amarillo".to_string(),
//!         connection_type: ConnectionType::Sftp,
//!         description: "Recogida diaria de ficheros del origen Amarillo".to_string(),
//!     }))?;
//!     assert!(!outcome.is_rejected());
//!
//!     // Stage two: connection data.
//!     session.submit_stage(StagePayload::Connection(ConnectionData {
//!         host: "11.111.23.11".to_string(),
//!         port: "1523".to_string(),
//!         user: "Amarillo_1".to_string(),
//!         password: "Prueba01*$$$".to_string(),
//!         origin: "\\Amarillo\\Origen1".to_string(),
//!         destination: "\\Amarillo\\Destino2".to_string(),
//!     }))?;
//!
//!     // Stage three: configuration.
//!     session.submit_stage(StagePayload::Configuration(ConfigurationData {
//!         mode: ConfigMode::Reception,
//!         regex: "^.*\\.txt".to_string(),
//!         status: ActiveState::Active,
//!     }))?;
//!
//!     // Stage four: daily periodicity with a begin time of 06:30.
//!     let form = PeriodicityForm::new()
//!         .with_daily_variant(DailyVariant::EveryDay)
//!         .with_begin_time(Hour::try_from(6)?, Minute::try_from(30)?);
//!     let outcome = session.submit_stage(StagePayload::Schedule {
//!         mode: PeriodicityMode::Daily,
//!         form,
//!     })?;
//!
//!     if let SubmitOutcome::Completed(parameterization) = outcome {
//!         println!("-> Created: {}", parameterization.basic.name);
//!         println!("-> Schedule: {:?}", parameterization.schedule);
//!     }
//!
//!     // Render everything the sink observed.
//!     let report = TranscriptFormatter::default().render(&transcript.snapshot());
//!     println!("{}", report);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod fields;
pub mod messages;
pub mod prelude;
pub mod report;
pub mod scenario;
pub mod schedule;
pub mod wizard;
