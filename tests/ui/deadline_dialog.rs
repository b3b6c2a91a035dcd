use super::{buffer_text, ch, key, left_click, test_terminal};
use crossterm::event::KeyCode;
use chrono::{NaiveDate, NaiveDateTime};
use itask::icons::IconService;
use itask::pickers::{DeadlinePicker, DialMode};
use itask::ui::components::dialogs::deadline_dialog::{render_deadline_dialog, DeadlineDialogAreas};
use itask::ui::components::DialogComponent;
use itask::ui::core::{Action, Component};
use itask::utils::datetime::local_from_naive;

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
}

fn render_areas(picker: &DeadlinePicker) -> (DeadlineDialogAreas, String) {
    let mut terminal = test_terminal();
    let mut areas = DeadlineDialogAreas::default();
    terminal
        .draw(|f| areas = render_deadline_dialog(f, f.area(), &IconService::default(), picker, today()))
        .unwrap();
    (areas, buffer_text(&terminal))
}

/// Terminal cell showing `day` of February 2024 (the 1st falls on Thursday)
fn day_cell(areas: &DeadlineDialogAreas, day: u32) -> (u16, u16) {
    let index = day as u16 + 3;
    (
        areas.calendar_days.x + (index % 7) * 4 + 1,
        areas.calendar_days.y + index / 7,
    )
}

#[test]
fn test_render_shows_month_and_readout() {
    let picker = DeadlinePicker::from_naive(at(10, 14, 30));

    let (_, text) = render_areas(&picker);

    assert!(text.contains("Set Deadline"));
    assert!(text.contains("February 2024"));
    assert!(text.contains("Sat Feb 10, 2024"));
    assert!(text.contains(" Sun Mon Tue Wed Thu Fri Sat"));
    assert!(text.contains("Hour"));
}

#[test]
fn test_calendar_hit_testing() {
    let picker = DeadlinePicker::from_naive(at(10, 14, 30));
    let (areas, _) = render_areas(&picker);

    let (column, row) = day_cell(&areas, 1);
    assert_eq!(areas.calendar_cell_at(column, row), Some(4));
    assert_eq!(picker.calendar().day_at_cell(4), Some(1));

    let (column, row) = day_cell(&areas, 20);
    let cell = areas.calendar_cell_at(column, row).unwrap();
    assert_eq!(picker.calendar().day_at_cell(cell), Some(20));

    assert_eq!(areas.calendar_cell_at(areas.dialog.x, areas.dialog.y), None);
}

#[test]
fn test_dial_hit_testing() {
    let picker = DeadlinePicker::from_naive(at(10, 14, 30));
    let (areas, _) = render_areas(&picker);
    let dial = areas.dial;

    let (dx, dy) = areas.dial_offset_at(dial.x + dial.width / 2, dial.y).unwrap();
    assert!(dx.abs() < 0.1);
    assert!(dy < -0.5);

    assert_eq!(areas.dial_offset_at(dial.x + dial.width, dial.y), None);
}

#[test]
fn test_clicks_pick_day_and_time() {
    let initial = at(10, 14, 30);
    let mut dialog = DialogComponent::new();
    dialog.update(Action::OpenDeadlinePicker(Some(local_from_naive(initial))));

    let mut terminal = test_terminal();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    let (areas, _) = render_areas(&DeadlinePicker::from_naive(initial));

    let (column, row) = day_cell(&areas, 20);
    assert!(matches!(dialog.handle_mouse_events(left_click(column, row)), Action::None));
    assert_eq!(dialog.deadline_picker().unwrap().value(), at(20, 14, 30));

    // Top of the face is 12 o'clock
    let dial = areas.dial;
    dialog.handle_mouse_events(left_click(dial.x + dial.width / 2, dial.y));
    assert_eq!(dialog.deadline_picker().unwrap().value(), at(20, 12, 30));
    assert_eq!(dialog.deadline_picker().unwrap().clock().mode(), DialMode::Minute);

    // Right edge, halfway down, is a quarter past
    dialog.handle_mouse_events(left_click(dial.x + dial.width - 1, dial.y + dial.height / 2));
    assert_eq!(dialog.deadline_picker().unwrap().value(), at(20, 12, 15));
    assert!(dialog.is_visible());
}

#[test]
fn test_clicked_day_is_keyboard_cursor() {
    let initial = at(10, 14, 30);
    let mut dialog = DialogComponent::new();
    dialog.update(Action::OpenDeadlinePicker(Some(local_from_naive(initial))));

    let mut terminal = test_terminal();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    let (areas, _) = render_areas(&DeadlinePicker::from_naive(initial));

    let (column, row) = day_cell(&areas, 20);
    dialog.handle_mouse_events(left_click(column, row));
    assert_eq!(dialog.deadline_picker().unwrap().calendar().cursor_day(), 20);

    dialog.handle_key_events(key(KeyCode::Right));
    dialog.handle_key_events(ch(' '));
    assert_eq!(dialog.deadline_picker().unwrap().value(), at(21, 14, 30));
}
