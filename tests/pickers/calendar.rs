use chrono::{NaiveDate, NaiveDateTime, Timelike};
use itask::pickers::{CalendarCell, CalendarPicker, ViewMonth};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_grid_starts_on_weekday_of_first() {
    // February 1st 2024 is a Thursday
    let picker = CalendarPicker::new(date(2024, 2, 10));
    let grid = picker.grid(date(2024, 2, 10), date(2024, 2, 14));

    assert_eq!(grid.len(), 4 + 29);
    assert!(grid[..4].iter().all(|c| *c == CalendarCell::Blank));
    assert_eq!(
        grid[4],
        CalendarCell::Day {
            day: 1,
            is_today: false,
            is_selected: false
        }
    );
    assert_eq!(
        grid[4 + 9],
        CalendarCell::Day {
            day: 10,
            is_today: false,
            is_selected: true
        }
    );
    assert_eq!(
        grid[4 + 13],
        CalendarCell::Day {
            day: 14,
            is_today: true,
            is_selected: false
        }
    );
}

#[test]
fn test_grid_without_leading_blanks() {
    // September 1st 2024 is a Sunday
    let picker = CalendarPicker::new(date(2024, 9, 1));
    let grid = picker.grid(date(2024, 9, 1), date(2024, 9, 1));

    assert_eq!(grid.len(), 30);
    assert!(matches!(grid[0], CalendarCell::Day { day: 1, .. }));
}

#[test]
fn test_selection_outside_view_month_is_not_highlighted() {
    let mut picker = CalendarPicker::new(date(2024, 2, 10));
    picker.change_month(1);

    let grid = picker.grid(date(2024, 2, 10), date(2024, 2, 10));

    assert!(grid
        .iter()
        .all(|c| !matches!(c, CalendarCell::Day { is_selected: true, .. } | CalendarCell::Day { is_today: true, .. })));
}

#[test]
fn test_change_month_crosses_years() {
    let mut picker = CalendarPicker::new(date(2024, 1, 15));

    picker.change_month(-1);
    assert_eq!(picker.view_month(), ViewMonth::new(2023, 12));

    picker.change_month(2);
    assert_eq!(picker.view_month(), ViewMonth::new(2024, 2));

    assert_eq!(ViewMonth::new(2024, 12).offset(1), ViewMonth::new(2025, 1));
    assert_eq!(ViewMonth::new(2024, 3).offset(-15), ViewMonth::new(2022, 12));
}

#[test]
fn test_change_month_clamps_cursor() {
    let mut picker = CalendarPicker::new(date(2024, 1, 31));

    picker.change_month(1);

    assert_eq!(picker.cursor_day(), 29);
}

#[test]
fn test_move_cursor_rolls_into_next_month() {
    let mut picker = CalendarPicker::new(date(2024, 1, 31));

    picker.move_cursor(1);
    assert_eq!(picker.view_month(), ViewMonth::new(2024, 2));
    assert_eq!(picker.cursor_day(), 1);

    picker.move_cursor(-7);
    assert_eq!(picker.view_month(), ViewMonth::new(2024, 1));
    assert_eq!(picker.cursor_day(), 25);
}

#[test]
fn test_select_day_keeps_time() {
    let mut picker = CalendarPicker::new(date(2024, 2, 10));
    picker.change_month(1);

    let selected = picker.select_day(15, at(2024, 2, 10, 14, 30)).unwrap();

    assert_eq!(selected, at(2024, 3, 15, 14, 30));
    assert_eq!(selected.minute(), 30);
}

#[test]
fn test_select_day_moves_cursor() {
    let mut picker = CalendarPicker::new(date(2024, 2, 10));

    picker.select_day(20, at(2024, 2, 10, 9, 0)).unwrap();
    assert_eq!(picker.cursor_day(), 20);

    picker.move_cursor(1);
    assert_eq!(picker.cursor_day(), 21);
}

#[test]
fn test_select_day_rejects_missing_days() {
    let mut picker = CalendarPicker::new(date(2023, 2, 1));

    assert!(picker.select_day(29, at(2023, 2, 1, 9, 0)).is_none());
    assert!(picker.select_day(0, at(2023, 2, 1, 9, 0)).is_none());
    assert_eq!(picker.cursor_day(), 1);
}

#[test]
fn test_grid_february_non_leap() {
    // February 1st 2023 is a Wednesday
    let picker = CalendarPicker::new(date(2023, 2, 14));
    let grid = picker.grid(date(2023, 2, 14), date(2023, 2, 28));

    assert_eq!(grid.len(), 3 + 28);
    assert!(grid[..3].iter().all(|c| *c == CalendarCell::Blank));
    assert!(matches!(grid[3], CalendarCell::Day { day: 1, .. }));
    assert_eq!(
        grid[3 + 13],
        CalendarCell::Day {
            day: 14,
            is_today: false,
            is_selected: true
        }
    );
    assert_eq!(
        grid.last(),
        Some(&CalendarCell::Day {
            day: 28,
            is_today: true,
            is_selected: false
        })
    );
}

#[test]
fn test_day_at_cell() {
    let picker = CalendarPicker::new(date(2024, 2, 10));

    assert_eq!(picker.day_at_cell(0), None);
    assert_eq!(picker.day_at_cell(3), None);
    assert_eq!(picker.day_at_cell(4), Some(1));
    assert_eq!(picker.day_at_cell(32), Some(29));
    assert_eq!(picker.day_at_cell(33), None);
}

#[test]
fn test_view_month_title() {
    assert_eq!(ViewMonth::new(2024, 2).title(), "February 2024");
    assert_eq!(ViewMonth::of(date(1999, 12, 31)).title(), "December 1999");
}
