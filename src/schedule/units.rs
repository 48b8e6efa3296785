use crate::error::{OutOfRange, UnknownOption};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines a range-checked selector value backed by a `u8`.
///
/// The wizard's pickers are discrete option lists, so construction is the
/// only validation these values ever need: a held value is in range by type.
macro_rules! selector_value {
    ($(#[$meta:meta])* $name:ident, $label:literal, $min:literal..=$max:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(try_from = "u8", into = "u8")]
        pub struct $name(u8);

        impl $name {
            pub const MIN: u8 = $min;
            pub const MAX: u8 = $max;

            /// Returns `None` when `value` is outside the selectable set.
            pub fn new(value: u8) -> Option<Self> {
                ($min..=$max).contains(&value).then_some(Self(value))
            }

            pub fn get(self) -> u8 {
                self.0
            }
        }

        impl TryFrom<u8> for $name {
            type Error = OutOfRange;

            fn try_from(value: u8) -> Result<Self, OutOfRange> {
                Self::new(value).ok_or(OutOfRange {
                    option_set: $label,
                    value,
                    min: $min,
                    max: $max,
                })
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

selector_value!(
    /// A minute of the hour. The minutes-mode picker and the begin-time
    /// minute picker share this option set.
    Minute, "minute", 0..=59
);

selector_value!(
    /// An hour of the day, as offered by the begin-time picker.
    Hour, "hour", 0..=23
);

selector_value!(
    /// "Every N hours" frequency.
    HourInterval, "hour interval", 1..=24
);

selector_value!(
    /// A calendar day used by the monthly and yearly day-of-month rows.
    DayOfMonth, "day of the month", 1..=31
);

selector_value!(
    /// "Every N months" frequency on the monthly rows.
    MonthInterval, "month interval", 1..=12
);

/// The moment of day a recurrence starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BeginTime {
    pub hour: Hour,
    pub minute: Minute,
}

impl BeginTime {
    pub fn new(hour: Hour, minute: Minute) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for BeginTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour.get(), self.minute.get())
    }
}

/// Normalizes user-supplied option text for matching: lowercase, letters and
/// digits only. "EveryHour", "every hour" and "every_hour" all compare equal.
pub(crate) fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Defines a fieldless choice enum with display names and forgiving parsing.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])* $name:ident, $what:literal,
        $($variant:ident => $text:literal),+ $(,)?
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
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
                let wanted = normalize(raw);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| normalize(choice.as_str()) == wanted)
                    .ok_or_else(|| UnknownOption {
                        what: $what,
                        value: raw.to_string(),
                    })
            }
        }
    };
}

choice_enum!(
    /// A day of the week, ordered Monday first as in the weekly checkbox row.
    Weekday, "weekday",
    Monday => "Monday",
    Tuesday => "Tuesday",
    Wednesday => "Wednesday",
    Thursday => "Thursday",
    Friday => "Friday",
    Saturday => "Saturday",
    Sunday => "Sunday",
);

choice_enum!(
    /// Which week of the month an ordinal rule refers to. The picker offers
    /// four weeks; there is no "last" entry.
    OrdinalWeek, "ordinal week",
    First => "first",
    Second => "second",
    Third => "third",
    Fourth => "fourth",
);

choice_enum!(
    /// A calendar month, for the yearly rows.
    MonthOfYear, "month",
    January => "January",
    February => "February",
    March => "March",
    April => "April",
    May => "May",
    June => "June",
    July => "July",
    August => "August",
    September => "September",
    October => "October",
    November => "November",
    December => "December",
);

choice_enum!(
    /// The two radio choices of the daily mode. `EveryDayOfWeek` applies to
    /// all days implicitly; unlike the weekly mode it carries no day set.
    DailyVariant, "daily variant",
    EveryDay => "every day",
    EveryDayOfWeek => "every day of the week",
);
