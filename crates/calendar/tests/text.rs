use workday_calendar::{CalendarError, DateTime, DateTimeFormat};

#[test]
fn display_parse_round_trip() {
    for input in [
        "2004-05-24 18:05",
        "2020-12-31 08:00",
        "0001-01-01 00:00",
        "2024-02-29 23:59",
    ] {
        let value: DateTime = input.parse().unwrap();
        assert_eq!(value.to_string(), input);
    }
}

#[test]
fn parsed_text_is_clamped() {
    let value: DateTime = "2025-04-31 24:00".parse().unwrap();
    assert_eq!(value.to_string(), "2025-04-30 23:59");
}

#[test]
fn format_matches_demo_pattern() {
    let format = DateTimeFormat::new("%d-%m-%Y %H:%M").unwrap();
    let start: DateTime = "2004-05-24 18:05".parse().unwrap();
    assert_eq!(format.format(&start), "24-05-2004 18:05");
}

#[test]
fn format_errors_are_reported_up_front() {
    let err = DateTimeFormat::new("%Y-%m-%d %Z").unwrap_err();
    assert!(matches!(err, CalendarError::InvalidFormat { .. }));
}
