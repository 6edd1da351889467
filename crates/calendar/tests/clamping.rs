use workday_calendar::{ClampRule, Date, DateTime, RawTimestamp, TimeOfDay, days_in_month};

#[test]
fn every_month_clamps_day_31_to_its_length() {
    for month in 1..=12u8 {
        let date = Date::new(2025, month, 31);
        let expected = days_in_month(2025, month).unwrap();
        assert_eq!(date.month(), month, "month {month} should be kept");
        assert_eq!(
            date.day(),
            expected,
            "day 31 in month {month} should clamp to {expected}"
        );
    }
}

#[test]
fn every_day_of_a_leap_february_survives() {
    for day in 1..=29u8 {
        assert_eq!(Date::new(2024, 2, day).day(), day);
    }
    assert_eq!(Date::new(2024, 2, 30).day(), 29);
}

#[test]
fn february_29_non_leap_clamps_to_28() {
    let value = DateTime::from_components(2025, 2, 29, 0, 0);
    assert_eq!(value.month(), 2);
    assert_eq!(value.day(), 28);
}

#[test]
fn hour_24_clamps_to_last_minute() {
    for minute in [0, 30, 59, 200] {
        let value = DateTime::from_components(2025, 1, 1, 24, minute);
        assert_eq!(
            (value.hour(), value.minute()),
            (23, 59),
            "hour 24, minute {minute}"
        );
    }
}

#[test]
fn minute_250_at_hour_23_clamps_to_59() {
    let value = DateTime::from_components(2025, 1, 1, 23, 250);
    assert_eq!((value.hour(), value.minute()), (23, 59));
}

#[test]
fn valid_components_pass_through_unchanged() {
    let (value, fired) = RawTimestamp::new(2021, 3, 29, 3, 33).normalize_with_report();
    assert!(fired.is_empty());
    assert_eq!(value.date(), Date::new(2021, 3, 29));
    assert_eq!(value.time(), TimeOfDay::new(3, 33));
}

#[test]
fn month_rule_runs_after_day_rules() {
    // Day 0 is repaired first, then the month turns into January.
    let (value, fired) = RawTimestamp::new(2025, 14, 0, 12, 0).normalize_with_report();
    assert_eq!(fired, vec![ClampRule::DayZero, ClampRule::MonthOutOfRange]);
    assert_eq!(value.date(), Date::new(2025, 1, 1));

    // Month 13 counts 30 days; the day is not re-checked against January.
    let (value, fired) = RawTimestamp::new(2025, 13, 45, 12, 0).normalize_with_report();
    assert_eq!(
        fired,
        vec![ClampRule::DayPastMonthEnd, ClampRule::MonthOutOfRange]
    );
    assert_eq!(value.date(), Date::new(2025, 1, 30));

    let (value, fired) = RawTimestamp::new(2025, 14, 31, 12, 0).normalize_with_report();
    assert_eq!(fired, vec![ClampRule::MonthOutOfRange]);
    assert_eq!(value.date(), Date::new(2025, 1, 31));
}

#[test]
fn extreme_years_are_representable() {
    let latest = DateTime::from_components(i16::MAX, 12, 31, 23, 59);
    assert_eq!(latest.year(), 32767);
    let earliest = DateTime::from_components(i16::MIN, 1, 1, 0, 0);
    assert_eq!(earliest.year(), -32768);
}

#[test]
fn fully_zeroed_components_make_a_valid_value() {
    let value = DateTime::from_components(0, 0, 0, 0, 0);
    assert_eq!(value.date(), Date::new(0, 1, 1));
    assert_eq!(value.time(), TimeOfDay::MIDNIGHT);
}
