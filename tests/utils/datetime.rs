use chrono::{Local, NaiveDate, TimeZone, Timelike, Utc};
use itask::utils::datetime;

#[test]
fn test_days_in_month() {
    assert_eq!(datetime::days_in_month(2024, 1), 31);
    assert_eq!(datetime::days_in_month(2024, 2), 29);
    assert_eq!(datetime::days_in_month(2023, 2), 28);
    assert_eq!(datetime::days_in_month(1900, 2), 28);
    assert_eq!(datetime::days_in_month(2000, 2), 29);
    assert_eq!(datetime::days_in_month(2024, 4), 30);
    assert_eq!(datetime::days_in_month(2024, 12), 31);
}

#[test]
fn test_month_name() {
    assert_eq!(datetime::month_name(1), "January");
    assert_eq!(datetime::month_name(12), "December");
    assert_eq!(datetime::month_name(0), "");
    assert_eq!(datetime::month_name(13), "");
}

#[test]
fn test_format_deadline_default() {
    let deadline = Local.with_ymd_and_hms(2024, 2, 10, 14, 30, 0).unwrap();

    assert_eq!(
        datetime::format_deadline(&deadline, datetime::DEFAULT_DEADLINE_FORMAT),
        "Feb 10, 2024, 02:30 PM"
    );
    assert_eq!(datetime::format_deadline(&deadline, "%Y-%m-%d %H:%M"), "2024-02-10 14:30");
}

#[test]
fn test_format_clock_default() {
    let now = Local.with_ymd_and_hms(2024, 2, 10, 0, 5, 9).unwrap();

    assert_eq!(datetime::format_clock(&now, datetime::DEFAULT_CLOCK_FORMAT), "12:05:09 AM");
}

#[test]
fn test_to_iso_string_matches_browser_output() {
    let instant = Utc.with_ymd_and_hms(2024, 2, 10, 14, 30, 0).unwrap().with_timezone(&Local);

    assert_eq!(datetime::to_iso_string(&instant), "2024-02-10T14:30:00.000Z");
}

#[test]
fn test_parse_iso_accepts_offsets() {
    let expected = Utc.with_ymd_and_hms(2024, 2, 10, 14, 30, 0).unwrap();

    for input in [
        "2024-02-10T14:30:00.000Z",
        "2024-02-10T14:30:00Z",
        "2024-02-10T16:30:00+02:00",
    ] {
        let parsed = datetime::parse_iso(input).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), expected, "input {input}");
    }
}

#[test]
fn test_parse_iso_naive_is_local_wall_clock() {
    let parsed = datetime::parse_iso("2024-02-10T14:30:00").unwrap();

    assert_eq!(
        parsed.naive_local(),
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap().and_hms_opt(14, 30, 0).unwrap()
    );
}

#[test]
fn test_parse_iso_rejects_garbage() {
    assert!(datetime::parse_iso("tomorrow").is_err());
    assert!(datetime::parse_iso("").is_err());
    assert!(datetime::parse_iso("2024-13-01T00:00:00Z").is_err());
}

#[test]
fn test_truncate_to_minute() {
    let dt = NaiveDate::from_ymd_opt(2024, 2, 10)
        .unwrap()
        .and_hms_milli_opt(14, 30, 59, 999)
        .unwrap();

    let truncated = datetime::truncate_to_minute(dt);

    assert_eq!(truncated.minute(), 30);
    assert_eq!(truncated.second(), 0);
    assert_eq!(truncated.nanosecond(), 0);
}

#[test]
fn test_local_from_naive_keeps_wall_clock() {
    let naive = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap().and_hms_opt(9, 15, 0).unwrap();

    assert_eq!(datetime::local_from_naive(naive).naive_local(), naive);
}

#[test]
fn test_is_valid_format() {
    assert!(datetime::is_valid_format(datetime::DEFAULT_DEADLINE_FORMAT));
    assert!(datetime::is_valid_format(datetime::DEFAULT_CLOCK_FORMAT));
    assert!(datetime::is_valid_format("%Y-%m-%d"));
    assert!(!datetime::is_valid_format("%Q"));
}

#[test]
fn test_weekday_header() {
    assert_eq!(datetime::DAYS_OF_WEEK.join(" "), "Sun Mon Tue Wed Thu Fri Sat");
}
