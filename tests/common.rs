//! Common test utilities for building stage payloads and wizard sessions.
use paramflow::prelude::*;

/// The complete first-stage payload, using the values the observed product's
/// own test suite types in.
#[allow(dead_code)]
pub fn valid_basic() -> StagePayload {
    StagePayload::Basic(BasicData {
        name: "Transferencia Amarillo".to_string(),
        connection_type: ConnectionType::Sftp,
        description: "Recogida diaria de ficheros del origen Amarillo".to_string(),
    })
}

#[allow(dead_code)]
pub fn valid_connection() -> StagePayload {
    StagePayload::Connection(ConnectionData {
        host: "11.111.23.11".to_string(),
        port: "1523".to_string(),
        user: "Amarillo_1".to_string(),
        password: "Prueba01*$$$".to_string(),
        origin: "\\Amarillo\\Origen1".to_string(),
        destination: "\\Amarillo\\Destino2".to_string(),
    })
}

#[allow(dead_code)]
pub fn valid_configuration() -> StagePayload {
    StagePayload::Configuration(ConfigurationData {
        mode: ConfigMode::Reception,
        regex: "^.*\\.txt".to_string(),
        status: ActiveState::Active,
    })
}

/// Daily periodicity at 06:30, the simplest complete final stage.
#[allow(dead_code)]
pub fn daily_schedule() -> StagePayload {
    StagePayload::Schedule {
        mode: PeriodicityMode::Daily,
        form: PeriodicityForm::new()
            .with_daily_variant(DailyVariant::EveryDay)
            .with_begin_time(hour(6), minute(30)),
    }
}

/// A range-checked hour from a known-good test constant.
#[allow(dead_code)]
pub fn hour(value: u8) -> Hour {
    Hour::try_from(value).expect("hour within picker range")
}

#[allow(dead_code)]
pub fn minute(value: u8) -> Minute {
    Minute::try_from(value).expect("minute within picker range")
}

/// A headless session with the default transfer constraints.
#[allow(dead_code)]
pub fn new_session() -> WizardSession {
    WizardSession::builder().build()
}

/// A session wired to a recording sink, plus the handle to read it back.
#[allow(dead_code)]
pub fn recording_session() -> (WizardSession, TranscriptHandle) {
    let sink = RecordingSink::new();
    let handle = sink.handle();
    let session = WizardSession::builder().with_sink(sink).build();
    (session, handle)
}

/// Advances a fresh session through the first three stages.
#[allow(dead_code)]
pub fn advance_to_schedule(session: &mut WizardSession) {
    session.begin().expect("begin");
    for payload in [valid_basic(), valid_connection(), valid_configuration()] {
        let outcome = session.submit_stage(payload).expect("submit");
        assert!(!outcome.is_rejected(), "setup stage unexpectedly rejected");
    }
}
