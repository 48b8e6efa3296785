use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical text fields of the wizard, across all stages.
///
/// These are domain identities, not locators: a driver adapter decides how a
/// `FieldName` maps onto a concrete input element or API attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    Name,
    Description,
    Host,
    Port,
    User,
    Password,
    Origin,
    Destination,
    Regex,
}

impl FieldName {
    /// Every field, in stage order.
    pub const ALL: [FieldName; 9] = [
        FieldName::Name,
        FieldName::Description,
        FieldName::Host,
        FieldName::Port,
        FieldName::User,
        FieldName::Password,
        FieldName::Origin,
        FieldName::Destination,
        FieldName::Regex,
    ];

    /// Stable lowercase identifier, used in message keys and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Description => "description",
            FieldName::Host => "host",
            FieldName::Port => "port",
            FieldName::User => "user",
            FieldName::Password => "password",
            FieldName::Origin => "origin",
            FieldName::Destination => "destination",
            FieldName::Regex => "regex",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
