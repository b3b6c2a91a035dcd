use chrono::{NaiveDate, NaiveDateTime, Timelike};
use itask::pickers::{DeadlinePicker, DialMode, Period, PickerPane};
use itask::utils::datetime::local_from_naive;

fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn test_open_truncates_to_minute() {
    let initial = local_from_naive(at(2, 10, 14, 30).with_second(45).unwrap());

    let picker = DeadlinePicker::open(Some(initial));

    assert_eq!(picker.value(), at(2, 10, 14, 30));
    assert_eq!(picker.focus(), PickerPane::Calendar);
    assert_eq!(picker.clock().mode(), DialMode::Hour);
}

#[test]
fn test_open_without_initial_uses_current_minute() {
    let picker = DeadlinePicker::open(None);

    assert_eq!(picker.value().second(), 0);
    assert_eq!(picker.value().nanosecond(), 0);
}

#[test]
fn test_date_change_keeps_time() {
    let mut picker = DeadlinePicker::from_naive(at(2, 10, 14, 30));

    picker.change_month(1);
    assert!(picker.select_day(15));

    assert_eq!(picker.value(), at(3, 15, 14, 30));
}

#[test]
fn test_picked_day_becomes_keyboard_cursor() {
    let mut picker = DeadlinePicker::from_naive(at(2, 10, 14, 30));

    assert!(picker.select_day(20));
    picker.move_calendar_cursor(1);
    assert!(picker.select_calendar_cursor());

    assert_eq!(picker.calendar().cursor_day(), 21);
    assert_eq!(picker.value(), at(2, 21, 14, 30));
}

#[test]
fn test_missing_day_leaves_value_unchanged() {
    let mut picker = DeadlinePicker::from_naive(at(2, 10, 14, 30));
    picker.change_month(2);

    assert!(!picker.select_day(31));

    assert_eq!(picker.value(), at(2, 10, 14, 30));
}

#[test]
fn test_time_change_keeps_date() {
    let mut picker = DeadlinePicker::from_naive(at(2, 10, 14, 30));

    picker.select_hour(9);
    picker.select_minute_tick(45);

    assert_eq!(picker.value(), at(2, 10, 21, 45));

    picker.set_period(Period::Am);
    assert_eq!(picker.value(), at(2, 10, 9, 45));
}

#[test]
fn test_keyboard_selection() {
    let mut picker = DeadlinePicker::from_naive(at(2, 10, 14, 30));

    picker.move_calendar_cursor(7);
    assert!(picker.select_calendar_cursor());
    assert_eq!(picker.value(), at(2, 17, 14, 30));

    picker.toggle_focus();
    assert_eq!(picker.focus(), PickerPane::Clock);
    picker.move_clock_cursor(1);
    picker.select_clock_cursor();
    assert_eq!(picker.value(), at(2, 17, 15, 30));
    assert_eq!(picker.clock().mode(), DialMode::Minute);
}

#[test]
fn test_dial_clicks_pick_hour_then_minute() {
    let mut picker = DeadlinePicker::from_naive(at(2, 10, 14, 30));

    picker.select_dial_index(3);
    picker.select_dial_index(9);

    assert_eq!(picker.value(), at(2, 10, 15, 45));
}

#[test]
fn test_switch_mode_keeps_value() {
    let mut picker = DeadlinePicker::from_naive(at(2, 10, 14, 30));

    picker.switch_mode(DialMode::Minute);

    assert_eq!(picker.clock().mode(), DialMode::Minute);
    assert_eq!(picker.value(), at(2, 10, 14, 30));
}

#[test]
fn test_confirm_returns_local_instant() {
    let mut picker = DeadlinePicker::from_naive(at(2, 10, 14, 30));
    picker.select_day(12);

    let confirmed = picker.confirm();

    assert_eq!(confirmed.naive_local(), at(2, 12, 14, 30));
}
