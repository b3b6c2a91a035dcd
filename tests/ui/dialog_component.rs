use super::{ch, key, left_click, test_terminal};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use crossterm::event::KeyCode;
use itask::pickers::{DialMode, PickerPane};
use itask::tasks::TaskId;
use itask::ui::components::DialogComponent;
use itask::ui::core::{Action, Component, DialogType, PendingAction};
use itask::utils::datetime::local_from_naive;

fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn initial() -> DateTime<Local> {
    local_from_naive(at(2, 10, 14, 30))
}

fn open(dialog: &mut DialogComponent, dialog_type: DialogType) {
    dialog.update(Action::ShowDialog(dialog_type));
    assert!(dialog.is_visible());
}

fn open_picker(dialog: &mut DialogComponent) {
    let action = dialog.update(Action::OpenDeadlinePicker(Some(initial())));
    assert!(matches!(
        action,
        Action::ShowDialog(DialogType::DeadlinePicker { initial: Some(_) })
    ));
}

fn picker_value(dialog: &DialogComponent) -> NaiveDateTime {
    dialog.deadline_picker().unwrap().value()
}

#[test]
fn test_dialog_starts_hidden() {
    let mut dialog = DialogComponent::new();

    assert!(!dialog.is_visible());
    assert!(matches!(dialog.handle_key_events(ch('y')), Action::None));
}

#[test]
fn test_confirm_delete_task() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Confirm(PendingAction::DeleteTask(TaskId(5))));

    assert!(matches!(dialog.handle_key_events(ch('y')), Action::DeleteTask(TaskId(5))));
    assert!(!dialog.is_visible());
}

#[test]
fn test_confirm_delete_all_with_enter() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Confirm(PendingAction::DeleteAll));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::DeleteAll));
    assert!(!dialog.is_visible());
}

#[test]
fn test_cancel_confirmation() {
    for cancel in [ch('n'), ch('N'), key(KeyCode::Esc)] {
        let mut dialog = DialogComponent::new();
        open(&mut dialog, DialogType::Confirm(PendingAction::DeleteAll));

        let action = dialog.handle_key_events(cancel);
        assert!(matches!(action, Action::HideDialog));

        dialog.update(action);
        assert!(!dialog.is_visible());
    }
}

#[test]
fn test_other_keys_keep_confirmation_open() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Confirm(PendingAction::DeleteAll));

    assert!(matches!(dialog.handle_key_events(ch('x')), Action::None));
    assert!(dialog.is_visible());
}

#[test]
fn test_open_deadline_picker_on_initial_value() {
    let mut dialog = DialogComponent::new();
    open_picker(&mut dialog);

    assert!(dialog.is_visible());
    assert_eq!(picker_value(&dialog), at(2, 10, 14, 30));
}

#[test]
fn test_deadline_picker_keyboard_flow() {
    let mut dialog = DialogComponent::new();
    open_picker(&mut dialog);

    dialog.handle_key_events(key(KeyCode::Right));
    dialog.handle_key_events(ch(' '));
    assert_eq!(picker_value(&dialog), at(2, 11, 14, 30));

    dialog.handle_key_events(key(KeyCode::Tab));
    assert_eq!(dialog.deadline_picker().unwrap().focus(), PickerPane::Clock);

    dialog.handle_key_events(ch('a'));
    assert_eq!(picker_value(&dialog), at(2, 11, 2, 30));

    dialog.handle_key_events(ch('m'));
    assert_eq!(dialog.deadline_picker().unwrap().clock().mode(), DialMode::Minute);
    dialog.handle_key_events(key(KeyCode::Right));
    dialog.handle_key_events(ch(' '));
    assert_eq!(picker_value(&dialog), at(2, 11, 2, 35));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::DeadlineConfirmed(deadline) => assert_eq!(deadline.naive_local(), at(2, 11, 2, 35)),
        other => panic!("expected DeadlineConfirmed, got {other:?}"),
    }
    assert!(!dialog.is_visible());
    assert!(dialog.deadline_picker().is_none());
}

#[test]
fn test_month_navigation_keeps_time() {
    let mut dialog = DialogComponent::new();
    open_picker(&mut dialog);

    dialog.handle_key_events(key(KeyCode::PageDown));
    dialog.handle_key_events(ch(' '));

    assert_eq!(picker_value(&dialog), at(3, 10, 14, 30));
}

#[test]
fn test_cancel_deadline_picker_discards_changes() {
    let mut dialog = DialogComponent::new();
    open_picker(&mut dialog);
    dialog.handle_key_events(ch('a'));

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
    dialog.update(action);

    assert!(!dialog.is_visible());
    assert!(dialog.deadline_picker().is_none());

    // Reopening starts from the caller's value again
    open_picker(&mut dialog);
    assert_eq!(picker_value(&dialog), at(2, 10, 14, 30));
}

#[test]
fn test_help_dialog_scrolls_and_closes() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Help);

    assert!(matches!(dialog.handle_key_events(ch('j')), Action::None));
    assert!(matches!(dialog.handle_key_events(ch('?')), Action::HideDialog));
}

#[test]
fn test_logs_dialog_close_keys() {
    for close in [ch('G'), ch('q'), key(KeyCode::Esc)] {
        let mut dialog = DialogComponent::new();
        open(&mut dialog, DialogType::Logs);

        assert!(matches!(dialog.handle_key_events(close), Action::HideDialog));
    }
}

#[test]
fn test_click_outside_cancels_dialog() {
    let mut dialog = DialogComponent::new();
    open(&mut dialog, DialogType::Confirm(PendingAction::DeleteAll));

    // Nothing rendered yet, so there is nothing to hit test
    assert!(matches!(dialog.handle_mouse_events(left_click(0, 0)), Action::None));

    let mut terminal = test_terminal();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();

    assert!(matches!(dialog.handle_mouse_events(left_click(50, 20)), Action::None));
    assert!(dialog.is_visible());

    assert!(matches!(dialog.handle_mouse_events(left_click(0, 0)), Action::HideDialog));
}

#[test]
fn test_click_outside_deadline_picker_cancels_it() {
    let mut dialog = DialogComponent::new();
    open_picker(&mut dialog);
    let mut terminal = test_terminal();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();

    let action = dialog.handle_mouse_events(left_click(0, 39));
    assert!(matches!(action, Action::HideDialog));
}
