use crate::error::ScenarioError;
use crate::schedule::{
    DayOfMonth, Hour, HourInterval, Minute, MonthInterval, PeriodicityForm, PeriodicityMode,
};
use crate::wizard::{BasicData, ConfigurationData, ConnectionData, StagePayload};
use serde::{Deserialize, Serialize};

/// A scripted wizard run: a list of steps replayed against a session.
///
/// Scenarios load from JSON written by hand or by the generator tool. Field
/// names accept both snake_case and the camelCase spelling the observed
/// product's test suite uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Loads a scenario from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScenarioError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parses a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        serde_json::from_str(json).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    /// The canonical complete run: every stage filled with the values the
    /// observed product's own test suite types in, daily periodicity with a
    /// begin time.
    pub fn example() -> Self {
        Self {
            name: "canonical transfer".to_string(),
            steps: vec![
                ScenarioStep::Begin,
                ScenarioStep::SubmitBasic(RawBasicData {
                    name: "Transferencia Amarillo".to_string(),
                    connection_type: "sftp".to_string(),
                    description: "Recogida diaria de ficheros del origen Amarillo".to_string(),
                }),
                ScenarioStep::SubmitConnection(RawConnectionData {
                    host: "11.111.23.11".to_string(),
                    port: "1523".to_string(),
                    user: "Amarillo_1".to_string(),
                    password: "Prueba01*$$$".to_string(),
                    origin: "\\Amarillo\\Origen1".to_string(),
                    destination: "\\Amarillo\\Destino2".to_string(),
                }),
                ScenarioStep::SubmitConfiguration(RawConfigurationData {
                    mode: "reception".to_string(),
                    regex: "^.*\\.txt".to_string(),
                    status: "active".to_string(),
                }),
                ScenarioStep::SubmitSchedule(RawSchedule {
                    mode: "daily".to_string(),
                    daily_variant: Some("every day".to_string()),
                    begin_hour: Some(6),
                    begin_minute: Some(30),
                    ..RawSchedule::default()
                }),
            ],
        }
    }
}

/// One step of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScenarioStep {
    #[serde(rename = "begin")]
    Begin,
    #[serde(rename = "submit_basic", alias = "submitBasic")]
    SubmitBasic(RawBasicData),
    #[serde(rename = "submit_connection", alias = "submitConnection")]
    SubmitConnection(RawConnectionData),
    #[serde(rename = "submit_configuration", alias = "submitConfiguration")]
    SubmitConfiguration(RawConfigurationData),
    #[serde(rename = "submit_schedule", alias = "submitSchedule")]
    SubmitSchedule(RawSchedule),
    #[serde(rename = "request_cancel", alias = "requestCancel")]
    RequestCancel,
    #[serde(rename = "confirm_cancel", alias = "confirmCancel")]
    ConfirmCancel,
    #[serde(rename = "abort_cancel", alias = "abortCancel")]
    AbortCancel,
    #[serde(rename = "return_to_previous", alias = "returnToPrevious")]
    ReturnToPrevious,
}

/// Raw first-stage payload. Fields default to empty strings, so a scenario
/// can leave one out to provoke a required-field rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBasicData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[serde(alias = "connectionType")]
    pub connection_type: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConnectionData {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
}

/// Raw third-stage payload. Mode and status default to the selections the
/// product preselects on this screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConfigurationData {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub regex: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Default for RawConfigurationData {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            regex: String::new(),
            status: default_status(),
        }
    }
}

fn default_mode() -> String {
    "reception".to_string()
}

fn default_status() -> String {
    "active".to_string()
}

/// Raw periodicity payload: the mode plus whichever selectors the scenario
/// touches. Everything except `mode` is optional, so a scenario can express
/// incomplete and conflicting forms as easily as correct ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSchedule {
    pub mode: String,
    #[serde(default)]
    pub minute: Option<u8>,
    #[serde(default)]
    #[serde(alias = "hourInterval")]
    pub hour_interval: Option<u8>,
    #[serde(default)]
    #[serde(alias = "dailyVariant")]
    pub daily_variant: Option<String>,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    #[serde(alias = "dayOfMonth")]
    pub day_of_month: Option<u8>,
    #[serde(default)]
    #[serde(alias = "monthInterval")]
    pub month_interval: Option<u8>,
    #[serde(default)]
    pub sequence: Option<String>,
    #[serde(default)]
    #[serde(alias = "ordinalWeekday")]
    pub ordinal_weekday: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    #[serde(alias = "beginHour")]
    pub begin_hour: Option<u8>,
    #[serde(default)]
    #[serde(alias = "beginMinute")]
    pub begin_minute: Option<u8>,
}

impl RawBasicData {
    pub fn into_payload(self) -> Result<StagePayload, ScenarioError> {
        Ok(StagePayload::Basic(BasicData {
            name: self.name,
            connection_type: self.connection_type.parse()?,
            description: self.description,
        }))
    }
}

impl RawConnectionData {
    pub fn into_payload(self) -> Result<StagePayload, ScenarioError> {
        Ok(StagePayload::Connection(ConnectionData {
            host: self.host,
            port: self.port,
            user: self.user,
            password: self.password,
            origin: self.origin,
            destination: self.destination,
        }))
    }
}

impl RawConfigurationData {
    pub fn into_payload(self) -> Result<StagePayload, ScenarioError> {
        Ok(StagePayload::Configuration(ConfigurationData {
            mode: self.mode.parse()?,
            regex: self.regex,
            status: self.status.parse()?,
        }))
    }
}

impl RawSchedule {
    /// Parses and range-checks every populated selector into a typed form.
    /// Option values outside their selector's range fail here, exactly as a
    /// user could never have picked them.
    pub fn into_payload(self) -> Result<StagePayload, ScenarioError> {
        let mode: PeriodicityMode = self.mode.parse()?;
        let mut form = PeriodicityForm::new();
        if let Some(minute) = self.minute {
            form = form.with_minute(Minute::try_from(minute)?);
        }
        if let Some(interval) = self.hour_interval {
            form = form.with_hour_interval(HourInterval::try_from(interval)?);
        }
        if let Some(variant) = &self.daily_variant {
            form = form.with_daily_variant(variant.parse()?);
        }
        for day in &self.days {
            form = form.with_day(day.parse()?);
        }
        if let Some(day) = self.day_of_month {
            form = form.with_day_of_month(DayOfMonth::try_from(day)?);
        }
        if let Some(interval) = self.month_interval {
            form = form.with_month_interval(MonthInterval::try_from(interval)?);
        }
        if let Some(sequence) = &self.sequence {
            form = form.with_sequence(sequence.parse()?);
        }
        if let Some(weekday) = &self.ordinal_weekday {
            form = form.with_ordinal_weekday(weekday.parse()?);
        }
        if let Some(month) = &self.month {
            form = form.with_month(month.parse()?);
        }
        if let Some(hour) = self.begin_hour {
            form = form.with_begin_hour(Hour::try_from(hour)?);
        }
        if let Some(minute) = self.begin_minute {
            form = form.with_begin_minute(Minute::try_from(minute)?);
        }
        Ok(StagePayload::Schedule { mode, form })
    }
}
