use crate::error::UnknownOption;
use crate::schedule::units::{
    BeginTime, DailyVariant, DayOfMonth, HourInterval, Minute, MonthInterval, MonthOfYear,
    OrdinalWeek, Weekday,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The six mutually exclusive periodicity kinds the wizard offers as tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodicityMode {
    Minutes,
    EveryHour,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl PeriodicityMode {
    pub const ALL: &'static [PeriodicityMode] = &[
        PeriodicityMode::Minutes,
        PeriodicityMode::EveryHour,
        PeriodicityMode::Daily,
        PeriodicityMode::Weekly,
        PeriodicityMode::Monthly,
        PeriodicityMode::Yearly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodicityMode::Minutes => "minutes",
            PeriodicityMode::EveryHour => "every hour",
            PeriodicityMode::Daily => "daily",
            PeriodicityMode::Weekly => "weekly",
            PeriodicityMode::Monthly => "monthly",
            PeriodicityMode::Yearly => "yearly",
        }
    }

    /// Whether rules of this mode carry a begin time.
    pub fn needs_begin_time(self) -> bool {
        !matches!(self, PeriodicityMode::Minutes | PeriodicityMode::EveryHour)
    }
}

impl fmt::Display for PeriodicityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodicityMode {
    type Err = UnknownOption;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = crate::schedule::units::normalize(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|mode| crate::schedule::units::normalize(mode.as_str()) == wanted)
            .ok_or_else(|| UnknownOption {
                what: "periodicity mode",
                value: raw.to_string(),
            })
    }
}

/// A fully assembled periodicity selection.
///
/// A value of this type is valid by construction: it only exists once
/// [`build_rule`](crate::schedule::build_rule) has accepted the underlying
/// form, so exactly one mode is populated and no stale sub-fields survive a
/// mode switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceRule {
    Minutes {
        minute: Minute,
    },
    EveryHour {
        interval: HourInterval,
    },
    Daily {
        variant: DailyVariant,
        begin: BeginTime,
    },
    Weekly {
        days: BTreeSet<Weekday>,
        begin: BeginTime,
    },
    Monthly {
        pattern: MonthlyPattern,
        begin: BeginTime,
    },
    Yearly {
        pattern: YearlyPattern,
        begin: BeginTime,
    },
}

impl RecurrenceRule {
    pub fn mode(&self) -> PeriodicityMode {
        match self {
            RecurrenceRule::Minutes { .. } => PeriodicityMode::Minutes,
            RecurrenceRule::EveryHour { .. } => PeriodicityMode::EveryHour,
            RecurrenceRule::Daily { .. } => PeriodicityMode::Daily,
            RecurrenceRule::Weekly { .. } => PeriodicityMode::Weekly,
            RecurrenceRule::Monthly { .. } => PeriodicityMode::Monthly,
            RecurrenceRule::Yearly { .. } => PeriodicityMode::Yearly,
        }
    }

    /// The begin time, for the modes that carry one.
    pub fn begin_time(&self) -> Option<BeginTime> {
        match self {
            RecurrenceRule::Minutes { .. } | RecurrenceRule::EveryHour { .. } => None,
            RecurrenceRule::Daily { begin, .. }
            | RecurrenceRule::Weekly { begin, .. }
            | RecurrenceRule::Monthly { begin, .. }
            | RecurrenceRule::Yearly { begin, .. } => Some(*begin),
        }
    }
}

/// The monthly sub-choice: a fixed calendar day or an ordinal weekday, each
/// repeating every `interval` months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthlyPattern {
    DayOfMonth {
        day: DayOfMonth,
        interval: MonthInterval,
    },
    Ordinal {
        sequence: OrdinalWeek,
        weekday: Weekday,
        interval: MonthInterval,
    },
}

/// The yearly sub-choice: like [`MonthlyPattern`] but pinned to one calendar
/// month instead of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearlyPattern {
    DayOfMonth {
        month: MonthOfYear,
        day: DayOfMonth,
    },
    Ordinal {
        sequence: OrdinalWeek,
        weekday: Weekday,
        month: MonthOfYear,
    },
}
