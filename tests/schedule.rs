//! Tests for periodicity rule assembly and selector value parsing.
mod common;
use common::*;
use paramflow::error::{OutOfRange, RecurrenceError, UnknownOption};
use paramflow::prelude::*;

#[test]
fn test_minutes_rule() {
    let form = PeriodicityForm::new().with_minute(minute(15));

    let rule = build_rule(PeriodicityMode::Minutes, &form).unwrap();
    assert_eq!(rule, RecurrenceRule::Minutes { minute: minute(15) });
    assert_eq!(rule.mode(), PeriodicityMode::Minutes);
    assert_eq!(rule.begin_time(), None);
}

#[test]
fn test_every_hour_rule() {
    let interval = HourInterval::try_from(6).unwrap();
    let form = PeriodicityForm::new().with_hour_interval(interval);

    let rule = build_rule(PeriodicityMode::EveryHour, &form).unwrap();
    assert_eq!(rule, RecurrenceRule::EveryHour { interval });
    assert_eq!(rule.begin_time(), None);
}

#[test]
fn test_daily_rule_carries_begin_time() {
    let form = PeriodicityForm::new()
        .with_daily_variant(DailyVariant::EveryDay)
        .with_begin_time(hour(6), minute(30));

    let rule = build_rule(PeriodicityMode::Daily, &form).unwrap();
    assert_eq!(
        rule,
        RecurrenceRule::Daily {
            variant: DailyVariant::EveryDay,
            begin: BeginTime::new(hour(6), minute(30)),
        }
    );
    assert_eq!(rule.begin_time().unwrap().to_string(), "06:30");
}

#[test]
fn test_daily_every_day_of_week_needs_no_day_set() {
    // Unlike the weekly mode, the day-of-week variant is a radio choice and
    // carries no checkbox row.
    let form = PeriodicityForm::new()
        .with_daily_variant(DailyVariant::EveryDayOfWeek)
        .with_begin_time(hour(23), minute(59));

    let rule = build_rule(PeriodicityMode::Daily, &form).unwrap();
    assert_eq!(rule.mode(), PeriodicityMode::Daily);
}

#[test]
fn test_weekly_rule_collects_days_in_week_order() {
    let form = PeriodicityForm::new()
        .with_day(Weekday::Friday)
        .with_day(Weekday::Monday)
        .with_day(Weekday::Friday)
        .with_begin_time(hour(8), minute(0));

    match build_rule(PeriodicityMode::Weekly, &form).unwrap() {
        RecurrenceRule::Weekly { days, begin } => {
            let picked: Vec<Weekday> = days.iter().copied().collect();
            assert_eq!(picked, vec![Weekday::Monday, Weekday::Friday]);
            assert_eq!(begin, BeginTime::new(hour(8), minute(0)));
        }
        other => panic!("Expected a weekly rule, got {:?}", other),
    }
}

#[test]
fn test_monthly_day_of_month_rule() {
    let day = DayOfMonth::try_from(15).unwrap();
    let interval = MonthInterval::try_from(2).unwrap();
    let form = PeriodicityForm::new()
        .with_day_of_month(day)
        .with_month_interval(interval)
        .with_begin_time(hour(12), minute(0));

    let rule = build_rule(PeriodicityMode::Monthly, &form).unwrap();
    assert_eq!(
        rule,
        RecurrenceRule::Monthly {
            pattern: MonthlyPattern::DayOfMonth { day, interval },
            begin: BeginTime::new(hour(12), minute(0)),
        }
    );
}

#[test]
fn test_monthly_ordinal_rule() {
    let interval = MonthInterval::try_from(3).unwrap();
    let form = PeriodicityForm::new()
        .with_sequence(OrdinalWeek::Second)
        .with_ordinal_weekday(Weekday::Tuesday)
        .with_month_interval(interval)
        .with_begin_time(hour(9), minute(45));

    let rule = build_rule(PeriodicityMode::Monthly, &form).unwrap();
    assert_eq!(
        rule,
        RecurrenceRule::Monthly {
            pattern: MonthlyPattern::Ordinal {
                sequence: OrdinalWeek::Second,
                weekday: Weekday::Tuesday,
                interval,
            },
            begin: BeginTime::new(hour(9), minute(45)),
        }
    );
}

#[test]
fn test_yearly_day_of_month_rule() {
    let day = DayOfMonth::try_from(1).unwrap();
    let form = PeriodicityForm::new()
        .with_month(MonthOfYear::July)
        .with_day_of_month(day)
        .with_begin_time(hour(0), minute(0));

    let rule = build_rule(PeriodicityMode::Yearly, &form).unwrap();
    assert_eq!(
        rule,
        RecurrenceRule::Yearly {
            pattern: YearlyPattern::DayOfMonth {
                month: MonthOfYear::July,
                day,
            },
            begin: BeginTime::new(hour(0), minute(0)),
        }
    );
}

#[test]
fn test_yearly_ordinal_rule() {
    let form = PeriodicityForm::new()
        .with_sequence(OrdinalWeek::First)
        .with_ordinal_weekday(Weekday::Monday)
        .with_month(MonthOfYear::January)
        .with_begin_time(hour(7), minute(30));

    let rule = build_rule(PeriodicityMode::Yearly, &form).unwrap();
    assert_eq!(
        rule,
        RecurrenceRule::Yearly {
            pattern: YearlyPattern::Ordinal {
                sequence: OrdinalWeek::First,
                weekday: Weekday::Monday,
                month: MonthOfYear::January,
            },
            begin: BeginTime::new(hour(7), minute(30)),
        }
    );
}

#[test]
fn test_weekly_without_days_is_rejected() {
    let form = PeriodicityForm::new().with_begin_time(hour(8), minute(0));

    match build_rule(PeriodicityMode::Weekly, &form) {
        Err(RecurrenceError::EmptyDaySelection) => {}
        other => panic!("Expected EmptyDaySelection, got {:?}", other),
    }
}

#[test]
fn test_both_sub_modes_populated_is_ambiguous() {
    let form = PeriodicityForm::new()
        .with_day_of_month(DayOfMonth::try_from(10).unwrap())
        .with_sequence(OrdinalWeek::Third)
        .with_month_interval(MonthInterval::try_from(1).unwrap())
        .with_begin_time(hour(10), minute(0));

    match build_rule(PeriodicityMode::Monthly, &form) {
        Err(RecurrenceError::AmbiguousSubMode { mode }) => {
            assert_eq!(mode, PeriodicityMode::Monthly);
        }
        other => panic!("Expected AmbiguousSubMode, got {:?}", other),
    }

    // A stale day-of-month pick clashes with a yearly ordinal the same way.
    let yearly = PeriodicityForm::new()
        .with_day_of_month(DayOfMonth::try_from(10).unwrap())
        .with_ordinal_weekday(Weekday::Tuesday)
        .with_month(MonthOfYear::March)
        .with_begin_time(hour(10), minute(0));

    match build_rule(PeriodicityMode::Yearly, &yearly) {
        Err(RecurrenceError::AmbiguousSubMode { mode }) => {
            assert_eq!(mode, PeriodicityMode::Yearly);
        }
        other => panic!("Expected AmbiguousSubMode, got {:?}", other),
    }
}

#[test]
fn test_incomplete_forms_report_the_missing_selector() {
    let begin = PeriodicityForm::new().with_begin_time(hour(12), minute(0));

    let cases = [
        (
            PeriodicityMode::Minutes,
            PeriodicityForm::new(),
            PeriodicityField::Minute,
        ),
        (
            PeriodicityMode::EveryHour,
            PeriodicityForm::new(),
            PeriodicityField::HourInterval,
        ),
        (PeriodicityMode::Daily, begin.clone(), PeriodicityField::DailyVariant),
        (PeriodicityMode::Monthly, begin.clone(), PeriodicityField::SubMode),
        (
            PeriodicityMode::Monthly,
            begin
                .clone()
                .with_sequence(OrdinalWeek::First)
                .with_ordinal_weekday(Weekday::Friday),
            PeriodicityField::MonthInterval,
        ),
        (
            PeriodicityMode::Monthly,
            begin.clone().with_sequence(OrdinalWeek::First),
            PeriodicityField::OrdinalWeekday,
        ),
        (
            PeriodicityMode::Yearly,
            begin.clone().with_day_of_month(DayOfMonth::try_from(5).unwrap()),
            PeriodicityField::Month,
        ),
        (PeriodicityMode::Yearly, begin, PeriodicityField::SubMode),
    ];

    for (mode, form, expected) in cases {
        match build_rule(mode, &form) {
            Err(RecurrenceError::IncompleteSubMode {
                mode: reported,
                missing,
            }) => {
                assert_eq!(reported, mode);
                assert_eq!(missing, expected, "missing selector for {}", mode);
            }
            other => panic!("Expected IncompleteSubMode for {}, got {:?}", mode, other),
        }
    }
}

#[test]
fn test_missing_begin_time_is_rejected() {
    let form = PeriodicityForm::new().with_daily_variant(DailyVariant::EveryDay);

    match build_rule(PeriodicityMode::Daily, &form) {
        Err(RecurrenceError::MissingBeginTime { mode }) => {
            assert_eq!(mode, PeriodicityMode::Daily);
        }
        other => panic!("Expected MissingBeginTime, got {:?}", other),
    }

    // A begin hour alone is not enough.
    let partial = PeriodicityForm::new()
        .with_day(Weekday::Wednesday)
        .with_begin_hour(hour(8));

    match build_rule(PeriodicityMode::Weekly, &partial) {
        Err(RecurrenceError::MissingBeginTime { mode }) => {
            assert_eq!(mode, PeriodicityMode::Weekly);
        }
        other => panic!("Expected MissingBeginTime, got {:?}", other),
    }
}

#[test]
fn test_foreign_selector_conflicts_with_requested_mode() {
    let cases = [
        (
            PeriodicityMode::EveryHour,
            PeriodicityForm::new()
                .with_minute(minute(10))
                .with_hour_interval(HourInterval::try_from(2).unwrap()),
            PeriodicityField::Minute,
        ),
        (
            PeriodicityMode::Yearly,
            PeriodicityForm::new()
                .with_month(MonthOfYear::May)
                .with_day_of_month(DayOfMonth::try_from(3).unwrap())
                .with_month_interval(MonthInterval::try_from(6).unwrap())
                .with_begin_time(hour(6), minute(0)),
            PeriodicityField::MonthInterval,
        ),
        (
            PeriodicityMode::Monthly,
            PeriodicityForm::new()
                .with_day(Weekday::Monday)
                .with_day_of_month(DayOfMonth::try_from(3).unwrap())
                .with_month_interval(MonthInterval::try_from(1).unwrap())
                .with_begin_time(hour(6), minute(0)),
            PeriodicityField::Days,
        ),
    ];

    for (mode, form, expected) in cases {
        match build_rule(mode, &form) {
            Err(RecurrenceError::ConflictingMode { requested, found }) => {
                assert_eq!(requested, mode);
                assert_eq!(found, expected, "conflicting selector for {}", mode);
            }
            other => panic!("Expected ConflictingMode for {}, got {:?}", mode, other),
        }
    }
}

#[test]
fn test_conflict_wins_over_ambiguity() {
    // A stale minutes pick is reported before the monthly sub-mode clash.
    let form = PeriodicityForm::new()
        .with_minute(minute(5))
        .with_day_of_month(DayOfMonth::try_from(1).unwrap())
        .with_sequence(OrdinalWeek::First)
        .with_begin_time(hour(6), minute(0));

    match build_rule(PeriodicityMode::Monthly, &form) {
        Err(RecurrenceError::ConflictingMode { requested, found }) => {
            assert_eq!(requested, PeriodicityMode::Monthly);
            assert_eq!(found, PeriodicityField::Minute);
        }
        other => panic!("Expected ConflictingMode, got {:?}", other),
    }
}

#[test]
fn test_begin_time_never_conflicts() {
    // The begin pickers are visible in every tab, so stale begin values are
    // ignored rather than treated as a mode switch.
    let form = PeriodicityForm::new()
        .with_minute(minute(20))
        .with_begin_time(hour(6), minute(30));

    let rule = build_rule(PeriodicityMode::Minutes, &form).unwrap();
    assert_eq!(rule, RecurrenceRule::Minutes { minute: minute(20) });
}

#[test]
fn test_selector_values_are_range_checked() {
    assert!(Minute::new(59).is_some());
    assert!(Hour::new(24).is_none());

    match Minute::try_from(60) {
        Err(OutOfRange {
            option_set,
            value,
            min,
            max,
        }) => {
            assert_eq!(option_set, "minute");
            assert_eq!(value, 60);
            assert_eq!(min, 0);
            assert_eq!(max, 59);
        }
        other => panic!("Expected OutOfRange, got {:?}", other),
    }

    assert!(DayOfMonth::try_from(0).is_err());
    assert!(DayOfMonth::try_from(31).is_ok());
    assert!(DayOfMonth::try_from(32).is_err());
    assert!(HourInterval::try_from(0).is_err());
    assert!(HourInterval::try_from(24).is_ok());
    assert!(HourInterval::try_from(25).is_err());
    assert!(MonthInterval::try_from(0).is_err());
    assert!(MonthInterval::try_from(12).is_ok());
    assert!(MonthInterval::try_from(13).is_err());
}

#[test]
fn test_mode_parsing_is_forgiving() {
    for mode in PeriodicityMode::ALL {
        assert_eq!(mode.as_str().parse::<PeriodicityMode>().unwrap(), *mode);
    }

    assert_eq!(
        "Every Hour".parse::<PeriodicityMode>().unwrap(),
        PeriodicityMode::EveryHour
    );
    assert_eq!(
        "EVERY_HOUR".parse::<PeriodicityMode>().unwrap(),
        PeriodicityMode::EveryHour
    );
    assert_eq!(
        "everyDayOfWeek".parse::<DailyVariant>().unwrap(),
        DailyVariant::EveryDayOfWeek
    );

    match "fortnightly".parse::<PeriodicityMode>() {
        Err(UnknownOption { what, value }) => {
            assert_eq!(what, "periodicity mode");
            assert_eq!(value, "fortnightly");
        }
        other => panic!("Expected UnknownOption, got {:?}", other),
    }
}

#[test]
fn test_begin_time_is_ignored_by_modes_without_one() {
    assert!(PeriodicityMode::Daily.needs_begin_time());
    assert!(PeriodicityMode::Weekly.needs_begin_time());
    assert!(!PeriodicityMode::Minutes.needs_begin_time());
    assert!(!PeriodicityMode::EveryHour.needs_begin_time());
}
