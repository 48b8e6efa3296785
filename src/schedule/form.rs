use crate::schedule::units::{
    DailyVariant, DayOfMonth, Hour, HourInterval, Minute, MonthInterval, MonthOfYear, OrdinalWeek,
    Weekday,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Names the individual selectors of the periodicity form, for error
/// reporting and conflict detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodicityField {
    Minute,
    HourInterval,
    DailyVariant,
    Days,
    DayOfMonth,
    MonthInterval,
    Sequence,
    OrdinalWeekday,
    Month,
    SubMode,
    BeginTime,
}

impl PeriodicityField {
    pub fn as_str(self) -> &'static str {
        match self {
            PeriodicityField::Minute => "minute selection",
            PeriodicityField::HourInterval => "hour interval",
            PeriodicityField::DailyVariant => "daily variant",
            PeriodicityField::Days => "day selection",
            PeriodicityField::DayOfMonth => "day of the month",
            PeriodicityField::MonthInterval => "month interval",
            PeriodicityField::Sequence => "ordinal sequence",
            PeriodicityField::OrdinalWeekday => "ordinal weekday",
            PeriodicityField::Month => "calendar month",
            PeriodicityField::SubMode => "sub-mode selection (day-of-month or ordinal)",
            PeriodicityField::BeginTime => "begin time",
        }
    }
}

impl fmt::Display for PeriodicityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The raw selections a user has made on the periodicity screen, before any
/// cross-field checking.
///
/// Every selector is optional here; [`build_rule`](crate::schedule::build_rule)
/// decides whether the populated subset makes a coherent rule for the
/// requested mode. Setters chain, so a form reads like the sequence of picks
/// it represents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicityForm {
    pub(super) minute: Option<Minute>,
    pub(super) hour_interval: Option<HourInterval>,
    pub(super) daily_variant: Option<DailyVariant>,
    pub(super) days: BTreeSet<Weekday>,
    pub(super) day_of_month: Option<DayOfMonth>,
    pub(super) month_interval: Option<MonthInterval>,
    pub(super) sequence: Option<OrdinalWeek>,
    pub(super) ordinal_weekday: Option<Weekday>,
    pub(super) month: Option<MonthOfYear>,
    pub(super) begin_hour: Option<Hour>,
    pub(super) begin_minute: Option<Minute>,
}

impl PeriodicityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minute(mut self, minute: Minute) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn with_hour_interval(mut self, interval: HourInterval) -> Self {
        self.hour_interval = Some(interval);
        self
    }

    pub fn with_daily_variant(mut self, variant: DailyVariant) -> Self {
        self.daily_variant = Some(variant);
        self
    }

    /// Ticks one weekday checkbox; repeated calls accumulate.
    pub fn with_day(mut self, day: Weekday) -> Self {
        self.days.insert(day);
        self
    }

    pub fn with_days<I: IntoIterator<Item = Weekday>>(mut self, days: I) -> Self {
        self.days.extend(days);
        self
    }

    pub fn with_day_of_month(mut self, day: DayOfMonth) -> Self {
        self.day_of_month = Some(day);
        self
    }

    pub fn with_month_interval(mut self, interval: MonthInterval) -> Self {
        self.month_interval = Some(interval);
        self
    }

    pub fn with_sequence(mut self, sequence: OrdinalWeek) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn with_ordinal_weekday(mut self, weekday: Weekday) -> Self {
        self.ordinal_weekday = Some(weekday);
        self
    }

    pub fn with_month(mut self, month: MonthOfYear) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_begin_time(mut self, hour: Hour, minute: Minute) -> Self {
        self.begin_hour = Some(hour);
        self.begin_minute = Some(minute);
        self
    }

    pub fn with_begin_hour(mut self, hour: Hour) -> Self {
        self.begin_hour = Some(hour);
        self
    }

    pub fn with_begin_minute(mut self, minute: Minute) -> Self {
        self.begin_minute = Some(minute);
        self
    }

    /// True when no selector has been touched.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn minute(&self) -> Option<Minute> {
        self.minute
    }

    pub fn hour_interval(&self) -> Option<HourInterval> {
        self.hour_interval
    }

    pub fn daily_variant(&self) -> Option<DailyVariant> {
        self.daily_variant
    }

    pub fn days(&self) -> &BTreeSet<Weekday> {
        &self.days
    }

    pub fn day_of_month(&self) -> Option<DayOfMonth> {
        self.day_of_month
    }

    pub fn month_interval(&self) -> Option<MonthInterval> {
        self.month_interval
    }

    pub fn sequence(&self) -> Option<OrdinalWeek> {
        self.sequence
    }

    pub fn ordinal_weekday(&self) -> Option<Weekday> {
        self.ordinal_weekday
    }

    pub fn month(&self) -> Option<MonthOfYear> {
        self.month
    }

    pub fn begin_hour(&self) -> Option<Hour> {
        self.begin_hour
    }

    pub fn begin_minute(&self) -> Option<Minute> {
        self.begin_minute
    }

    /// Which mode-owned selectors are populated, in declaration order. Begin
    /// time is deliberately absent: it never participates in conflict
    /// detection.
    pub(super) fn populated_fields(&self) -> Vec<PeriodicityField> {
        let mut populated = Vec::new();
        if self.minute.is_some() {
            populated.push(PeriodicityField::Minute);
        }
        if self.hour_interval.is_some() {
            populated.push(PeriodicityField::HourInterval);
        }
        if self.daily_variant.is_some() {
            populated.push(PeriodicityField::DailyVariant);
        }
        if !self.days.is_empty() {
            populated.push(PeriodicityField::Days);
        }
        if self.day_of_month.is_some() {
            populated.push(PeriodicityField::DayOfMonth);
        }
        if self.month_interval.is_some() {
            populated.push(PeriodicityField::MonthInterval);
        }
        if self.sequence.is_some() {
            populated.push(PeriodicityField::Sequence);
        }
        if self.ordinal_weekday.is_some() {
            populated.push(PeriodicityField::OrdinalWeekday);
        }
        if self.month.is_some() {
            populated.push(PeriodicityField::Month);
        }
        populated
    }
}
