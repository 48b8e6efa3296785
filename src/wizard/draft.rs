use crate::error::UnknownOption;
use crate::fields::FieldName;
use crate::schedule::{PeriodicityForm, PeriodicityMode, RecurrenceRule, units};
use crate::wizard::Stage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines a fieldless selection enum for the wizard's radio groups.
macro_rules! radio_enum {
    (
        $(#[$meta:meta])* $name:ident, $what:literal,
        $($variant:ident => $text:literal),+ $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = units::normalize(raw);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| units::normalize(choice.as_str()) == wanted)
                    .ok_or_else(|| UnknownOption {
                        what: $what,
                        value: raw.to_string(),
                    })
            }
        }
    };
}

radio_enum!(
    /// The transfer protocol radio group; exactly one is selected per run.
    ConnectionType, "connection type",
    Ftp => "FTP",
    Ftps => "FTPS",
    Sftp => "SFTP",
);

radio_enum!(
    /// Whether the parameterization receives files or sends them out.
    ConfigMode, "configuration mode",
    Reception => "reception",
    FileOutput => "file output",
);

radio_enum!(
    /// Whether the parameterization is live once created.
    ActiveState, "active state",
    Active => "active",
    Inactive => "inactive",
);

/// Payload for the first stage: identity of the parameterization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicData {
    pub name: String,
    pub connection_type: ConnectionType,
    pub description: String,
}

impl BasicData {
    /// The free-text inputs of this stage, in screen order.
    pub fn text_fields(&self) -> Vec<(FieldName, &str)> {
        vec![
            (FieldName::Name, self.name.as_str()),
            (FieldName::Description, self.description.as_str()),
        ]
    }
}

/// Payload for the second stage: where and how to connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionData {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub origin: String,
    pub destination: String,
}

impl ConnectionData {
    pub fn text_fields(&self) -> Vec<(FieldName, &str)> {
        vec![
            (FieldName::Host, self.host.as_str()),
            (FieldName::Port, self.port.as_str()),
            (FieldName::User, self.user.as_str()),
            (FieldName::Password, self.password.as_str()),
            (FieldName::Origin, self.origin.as_str()),
            (FieldName::Destination, self.destination.as_str()),
        ]
    }
}

/// Payload for the third stage: transfer direction, filename filter, status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationData {
    pub mode: ConfigMode,
    pub regex: String,
    pub status: ActiveState,
}

impl ConfigurationData {
    pub fn text_fields(&self) -> Vec<(FieldName, &str)> {
        vec![(FieldName::Regex, self.regex.as_str())]
    }
}

/// One stage submission, as handed to
/// [`WizardSession::submit_stage`](crate::wizard::WizardSession::submit_stage).
///
/// The schedule variant carries the raw form plus the mode tab the user is
/// on; cross-field checking happens inside the session, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StagePayload {
    Basic(BasicData),
    Connection(ConnectionData),
    Configuration(ConfigurationData),
    Schedule {
        mode: PeriodicityMode,
        form: PeriodicityForm,
    },
}

impl StagePayload {
    /// The stage this payload is meant for.
    pub fn stage(&self) -> Stage {
        match self {
            StagePayload::Basic(_) => Stage::BasicData,
            StagePayload::Connection(_) => Stage::ConnectionData,
            StagePayload::Configuration(_) => Stage::ConfigurationData,
            StagePayload::Schedule { .. } => Stage::SchedulePeriodicity,
        }
    }
}

/// The accumulating record of one wizard run.
///
/// Only the session mutates a draft; everything callers see is a snapshot.
/// Stages fill strictly in order, so `connection` is only ever present when
/// `basic` already is, and so on down the struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterizationDraft {
    pub basic: Option<BasicData>,
    pub connection: Option<ConnectionData>,
    pub configuration: Option<ConfigurationData>,
    pub schedule: Option<RecurrenceRule>,
}

impl ParameterizationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.basic.is_none()
            && self.connection.is_none()
            && self.configuration.is_none()
            && self.schedule.is_none()
    }

    /// How many stages have been committed so far.
    pub fn committed_stages(&self) -> usize {
        [
            self.basic.is_some(),
            self.connection.is_some(),
            self.configuration.is_some(),
            self.schedule.is_some(),
        ]
        .into_iter()
        .filter(|committed| *committed)
        .count()
    }

    /// The finished record, once every stage is committed.
    pub fn finish(&self) -> Option<Parameterization> {
        Some(Parameterization {
            basic: self.basic.clone()?,
            connection: self.connection.clone()?,
            configuration: self.configuration.clone()?,
            schedule: self.schedule.clone()?,
        })
    }
}

/// A finished parameterization: all four stages committed and checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameterization {
    pub basic: BasicData,
    pub connection: ConnectionData,
    pub configuration: ConfigurationData,
    pub schedule: RecurrenceRule,
}
