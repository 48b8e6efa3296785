//! Integration tests for Paramflow
//!
//! End-to-end tests: scenario replay, transcript persistence, report output
//! and the user-facing message catalog.
//!
mod common;
use common::*;
use paramflow::error::{
    ConfigError, FieldError, OutOfRange, ReplayError, ScenarioError, TranscriptError,
    UnknownOption,
};
use paramflow::prelude::*;
use paramflow::scenario::{RawBasicData, RawSchedule};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_example_scenario_completes() {
        let mut session = new_session();
        let outcomes = replay(&Scenario::example(), &mut session).unwrap();

        assert_eq!(outcomes.len(), 4);
        match outcomes.last().unwrap() {
            SubmitOutcome::Completed(parameterization) => {
                assert_eq!(parameterization.basic.name, "Transferencia Amarillo");
                assert_eq!(parameterization.basic.connection_type, ConnectionType::Sftp);
                assert_eq!(parameterization.schedule.mode(), PeriodicityMode::Daily);
            }
            other => panic!("Expected completion, got {:?}", other),
        }
        assert_eq!(session.state(), WizardState::Completed);
    }

    #[test]
    fn test_camel_case_scenario_parses_and_completes() {
        let json = r#"{
            "name": "camel case run",
            "steps": [
                "begin",
                { "submitBasic": {
                    "name": "Transferencia Amarillo",
                    "connectionType": "FTP",
                    "description": "Recogida diaria de ficheros" } },
                { "submitConnection": {
                    "host": "11.111.23.11",
                    "port": "1523",
                    "user": "Amarillo_1",
                    "password": "Prueba01*$$$",
                    "origin": "\\Amarillo\\Origen1",
                    "destination": "\\Amarillo\\Destino2" } },
                { "submitConfiguration": { "regex": "^.*\\.txt" } },
                { "submitSchedule": {
                    "mode": "weekly",
                    "days": ["Monday", "Friday"],
                    "beginHour": 8,
                    "beginMinute": 15 } }
            ]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.name, "camel case run");
        assert_eq!(scenario.steps.len(), 5);

        let mut session = new_session();
        let outcomes = replay(&scenario, &mut session).unwrap();
        match outcomes.last().unwrap() {
            SubmitOutcome::Completed(parameterization) => {
                assert_eq!(parameterization.basic.connection_type, ConnectionType::Ftp);
                // The configuration stage fell back to the preselected values.
                assert_eq!(parameterization.configuration.mode, ConfigMode::Reception);
                assert_eq!(parameterization.configuration.status, ActiveState::Active);
                assert_eq!(parameterization.schedule.mode(), PeriodicityMode::Weekly);
            }
            other => panic!("Expected completion, got {:?}", other),
        }
    }

    #[test]
    fn test_rejection_scenario_records_the_failure() {
        let (mut session, handle) = recording_session();
        let scenario = Scenario {
            name: "undersized first attempt".to_string(),
            steps: vec![
                ScenarioStep::Begin,
                ScenarioStep::SubmitBasic(RawBasicData {
                    name: "testingcx".to_string(),
                    connection_type: "sftp".to_string(),
                    description: "lorem ips".to_string(),
                }),
                ScenarioStep::SubmitBasic(RawBasicData {
                    name: "Transferencia Amarillo".to_string(),
                    connection_type: "sftp".to_string(),
                    description: "Recogida diaria de ficheros del origen Amarillo".to_string(),
                }),
            ],
        };

        let outcomes = replay(&scenario, &mut session).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_rejected());
        assert!(!outcomes[1].is_rejected());

        let transcript = handle.snapshot();
        let rejected: Vec<(Stage, Action)> = transcript
            .rejections()
            .map(|(stage, blocked, _)| (stage, blocked))
            .collect();
        assert_eq!(rejected, vec![(Stage::BasicData, Action::Continue)]);
        assert_eq!(transcript.final_state(), Some(WizardState::ConnectionData));
    }

    #[test]
    fn test_cancel_scenario_ends_at_the_home_screen() {
        let mut session = new_session();
        let scenario = Scenario {
            name: "cancelled run".to_string(),
            steps: vec![
                ScenarioStep::Begin,
                ScenarioStep::SubmitBasic(RawBasicData {
                    name: "Transferencia Amarillo".to_string(),
                    connection_type: "sftp".to_string(),
                    description: "Recogida diaria de ficheros del origen Amarillo".to_string(),
                }),
                ScenarioStep::RequestCancel,
                ScenarioStep::AbortCancel,
                ScenarioStep::RequestCancel,
                ScenarioStep::ConfirmCancel,
            ],
        };

        let outcomes = replay(&scenario, &mut session).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(session.state(), WizardState::Start);
        assert!(session.draft().is_empty());
    }

    #[test]
    fn test_unknown_option_aborts_the_replay() {
        let mut session = new_session();
        let scenario = Scenario {
            name: String::new(),
            steps: vec![
                ScenarioStep::Begin,
                ScenarioStep::SubmitBasic(RawBasicData {
                    name: "Transferencia Amarillo".to_string(),
                    connection_type: "webdav".to_string(),
                    description: "Recogida diaria de ficheros".to_string(),
                }),
            ],
        };

        match replay(&scenario, &mut session) {
            Err(ReplayError::Scenario(ScenarioError::UnknownOption(UnknownOption {
                what,
                value,
            }))) => {
                assert_eq!(what, "connection type");
                assert_eq!(value, "webdav");
            }
            other => panic!("Expected UnknownOption, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_selector_is_refused_at_parse_time() {
        let raw = RawSchedule {
            mode: "minutes".to_string(),
            minute: Some(75),
            ..RawSchedule::default()
        };

        match raw.into_payload() {
            Err(ScenarioError::OutOfRange(OutOfRange {
                option_set, value, ..
            })) => {
                assert_eq!(option_set, "minute");
                assert_eq!(value, 75);
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_transcript_survives_a_save_and_reload() {
        let (mut session, handle) = recording_session();
        replay(&Scenario::example(), &mut session).unwrap();

        let transcript = handle.take();
        assert!(!transcript.is_empty());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.transcript");
        let path = path.to_str().unwrap();

        transcript.save(path).unwrap();
        let restored = RunTranscript::from_file(path).unwrap();
        assert_eq!(restored, transcript);
        assert_eq!(restored.final_state(), Some(WizardState::Completed));
    }

    #[test]
    fn test_corrupt_transcript_bytes_fail_to_decode() {
        match RunTranscript::from_bytes(&[0xff, 0x13, 0x37]) {
            Err(TranscriptError::Decode(_)) => {}
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn test_spanish_messages_match_the_product() {
        let catalog = MessageCatalog::spanish();

        assert_eq!(
            catalog.render(&FieldError::MissingRequired {
                field: FieldName::Host,
            }),
            "Campo obligatorio"
        );
        assert_eq!(
            catalog.render(&FieldError::TooShort {
                field: FieldName::Name,
                min: 10,
                actual: 9,
            }),
            "La longitud mínima permitida para el \"Nombre\" es de 10 caracteres"
        );
        assert_eq!(
            catalog.render(&FieldError::TooLong {
                field: FieldName::Password,
                max: 32,
                actual: 33,
            }),
            "La longitud máxima permitida para el \"Contraseña\" es de 32 caracteres"
        );

        assert_eq!(catalog.label(FieldName::User), "Usuario");
        assert_eq!(catalog.home_title(), "Nueva parametrización");
        assert_eq!(catalog.stage_title(Stage::BasicData), "Datos básicos");
        assert_eq!(
            catalog.stage_title(Stage::SchedulePeriodicity),
            "Programar periodicidad"
        );
        assert_eq!(catalog.periodicity_prompt(), "Programar periodicidad cada:");
        assert_eq!(
            catalog.cancel_prompt(),
            "¿Estás seguro de cancelar la creación de la parametrización?"
        );
    }

    #[test]
    fn test_report_quotes_failures_and_final_state() {
        let (mut session, handle) = recording_session();
        session.begin().unwrap();
        let undersized = StagePayload::Basic(BasicData {
            name: "testingcx".to_string(),
            connection_type: ConnectionType::Sftp,
            description: "lorem ips".to_string(),
        });
        assert!(session.submit_stage(undersized).unwrap().is_rejected());

        let report = TranscriptFormatter::default().render(&handle.snapshot());

        assert!(report.contains("======== WIZARD RUN (2 events) ========"));
        assert!(report.contains("000: start -> basic data"));
        assert!(report.contains("001: rejected at basic data ('continue' stays disabled)"));
        assert!(
            report.contains("La longitud mínima permitida para el \"Nombre\" es de 10 caracteres")
        );
        assert!(report.contains(
            "La longitud mínima permitida para el \"Descripción\" es de 10 caracteres"
        ));
        assert!(report.contains("final state: basic data"));
    }

    #[test]
    fn test_report_handles_an_empty_transcript() {
        let report = TranscriptFormatter::default().render(&RunTranscript::new());

        assert!(report.contains("(0 events)"));
        assert!(report.contains("final state: (no transitions recorded)"));
    }

    #[test]
    fn test_session_config_validation() {
        let config = SessionConfig::new("http://localhost:4200", "qa@example.com", "changeme");
        assert!(config.validate().is_ok());

        let missing = SessionConfig::new("", "qa@example.com", "changeme");
        assert_eq!(missing.validate(), Err(ConfigError::Missing("base_url")));

        let blank = SessionConfig::new("http://localhost:4200", "   ", "changeme");
        assert_eq!(blank.validate(), Err(ConfigError::Blank("user_mail")));
    }
}
