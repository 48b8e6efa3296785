pub mod form;
pub mod rule;
pub mod units;

pub use form::*;
pub use rule::*;
pub use units::*;

use crate::error::RecurrenceError;
use tracing::debug;

/// Which modes a populated selector may belong to.
///
/// `day_of_month`, `sequence` and `ordinal_weekday` are shared between the
/// monthly and yearly screens; everything else is owned by a single mode.
fn owners(field: PeriodicityField) -> &'static [PeriodicityMode] {
    match field {
        PeriodicityField::Minute => &[PeriodicityMode::Minutes],
        PeriodicityField::HourInterval => &[PeriodicityMode::EveryHour],
        PeriodicityField::DailyVariant => &[PeriodicityMode::Daily],
        PeriodicityField::Days => &[PeriodicityMode::Weekly],
        PeriodicityField::DayOfMonth => &[PeriodicityMode::Monthly, PeriodicityMode::Yearly],
        PeriodicityField::MonthInterval => &[PeriodicityMode::Monthly],
        PeriodicityField::Sequence => &[PeriodicityMode::Monthly, PeriodicityMode::Yearly],
        PeriodicityField::OrdinalWeekday => &[PeriodicityMode::Monthly, PeriodicityMode::Yearly],
        PeriodicityField::Month => &[PeriodicityMode::Yearly],
        // Neither participates in conflict detection.
        PeriodicityField::SubMode | PeriodicityField::BeginTime => PeriodicityMode::ALL,
    }
}

/// Assembles a checked [`RecurrenceRule`] from the raw form selections, for
/// the requested mode.
///
/// Checks run in a fixed order, and the first violation wins:
///
/// 1. Every populated selector must belong to `mode`
///    ([`RecurrenceError::ConflictingMode`]); a foreign selector means the
///    caller switched tabs without clearing the previous tab's picks.
/// 2. For monthly and yearly, exactly one sub-mode may be populated
///    ([`RecurrenceError::AmbiguousSubMode`]).
/// 3. The chosen sub-mode's selectors must all be present
///    ([`RecurrenceError::IncompleteSubMode`], also used when a single-field
///    mode like minutes is missing its selection).
/// 4. Every mode except minutes and every-hour needs a complete begin time
///    ([`RecurrenceError::MissingBeginTime`]).
pub fn build_rule(
    mode: PeriodicityMode,
    form: &PeriodicityForm,
) -> Result<RecurrenceRule, RecurrenceError> {
    let result = assemble(mode, form);
    if let Err(error) = &result {
        debug!(%mode, %error, "periodicity form rejected");
    }
    result
}

fn assemble(
    mode: PeriodicityMode,
    form: &PeriodicityForm,
) -> Result<RecurrenceRule, RecurrenceError> {
    for field in form.populated_fields() {
        if !owners(field).contains(&mode) {
            return Err(RecurrenceError::ConflictingMode {
                requested: mode,
                found: field,
            });
        }
    }

    match mode {
        PeriodicityMode::Minutes => {
            let minute = form.minute().ok_or(RecurrenceError::IncompleteSubMode {
                mode,
                missing: PeriodicityField::Minute,
            })?;
            Ok(RecurrenceRule::Minutes { minute })
        }
        PeriodicityMode::EveryHour => {
            let interval = form
                .hour_interval()
                .ok_or(RecurrenceError::IncompleteSubMode {
                    mode,
                    missing: PeriodicityField::HourInterval,
                })?;
            Ok(RecurrenceRule::EveryHour { interval })
        }
        PeriodicityMode::Daily => {
            let variant = form
                .daily_variant()
                .ok_or(RecurrenceError::IncompleteSubMode {
                    mode,
                    missing: PeriodicityField::DailyVariant,
                })?;
            let begin = begin_time(mode, form)?;
            Ok(RecurrenceRule::Daily { variant, begin })
        }
        PeriodicityMode::Weekly => {
            if form.days().is_empty() {
                return Err(RecurrenceError::EmptyDaySelection);
            }
            let begin = begin_time(mode, form)?;
            Ok(RecurrenceRule::Weekly {
                days: form.days().clone(),
                begin,
            })
        }
        PeriodicityMode::Monthly => {
            let pattern = monthly_pattern(form)?;
            let begin = begin_time(mode, form)?;
            Ok(RecurrenceRule::Monthly { pattern, begin })
        }
        PeriodicityMode::Yearly => {
            let pattern = yearly_pattern(form)?;
            let begin = begin_time(mode, form)?;
            Ok(RecurrenceRule::Yearly { pattern, begin })
        }
    }
}

fn monthly_pattern(form: &PeriodicityForm) -> Result<MonthlyPattern, RecurrenceError> {
    let mode = PeriodicityMode::Monthly;
    let ordinal_style = form.sequence().is_some() || form.ordinal_weekday().is_some();

    match (form.day_of_month(), ordinal_style) {
        (Some(_), true) => Err(RecurrenceError::AmbiguousSubMode { mode }),
        (Some(day), false) => {
            let interval = require(form.month_interval(), mode, PeriodicityField::MonthInterval)?;
            Ok(MonthlyPattern::DayOfMonth { day, interval })
        }
        (None, true) => {
            let sequence = require(form.sequence(), mode, PeriodicityField::Sequence)?;
            let weekday = require(form.ordinal_weekday(), mode, PeriodicityField::OrdinalWeekday)?;
            let interval = require(form.month_interval(), mode, PeriodicityField::MonthInterval)?;
            Ok(MonthlyPattern::Ordinal {
                sequence,
                weekday,
                interval,
            })
        }
        (None, false) => Err(RecurrenceError::IncompleteSubMode {
            mode,
            missing: PeriodicityField::SubMode,
        }),
    }
}

fn yearly_pattern(form: &PeriodicityForm) -> Result<YearlyPattern, RecurrenceError> {
    let mode = PeriodicityMode::Yearly;
    let ordinal_style = form.sequence().is_some() || form.ordinal_weekday().is_some();

    match (form.day_of_month(), ordinal_style) {
        (Some(_), true) => Err(RecurrenceError::AmbiguousSubMode { mode }),
        (Some(day), false) => {
            let month = require(form.month(), mode, PeriodicityField::Month)?;
            Ok(YearlyPattern::DayOfMonth { month, day })
        }
        (None, true) => {
            let sequence = require(form.sequence(), mode, PeriodicityField::Sequence)?;
            let weekday = require(form.ordinal_weekday(), mode, PeriodicityField::OrdinalWeekday)?;
            let month = require(form.month(), mode, PeriodicityField::Month)?;
            Ok(YearlyPattern::Ordinal {
                sequence,
                weekday,
                month,
            })
        }
        (None, false) => Err(RecurrenceError::IncompleteSubMode {
            mode,
            missing: PeriodicityField::SubMode,
        }),
    }
}

fn require<T>(
    value: Option<T>,
    mode: PeriodicityMode,
    missing: PeriodicityField,
) -> Result<T, RecurrenceError> {
    value.ok_or(RecurrenceError::IncompleteSubMode { mode, missing })
}

fn begin_time(mode: PeriodicityMode, form: &PeriodicityForm) -> Result<BeginTime, RecurrenceError> {
    match (form.begin_hour(), form.begin_minute()) {
        (Some(hour), Some(minute)) => Ok(BeginTime::new(hour, minute)),
        _ => Err(RecurrenceError::MissingBeginTime { mode }),
    }
}
