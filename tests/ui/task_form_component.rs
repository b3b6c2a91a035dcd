use super::{ch, key};
use chrono::{Local, TimeZone};
use crossterm::event::KeyCode;
use itask::tasks::{EditDraft, Task, TaskId};
use itask::ui::components::TaskFormComponent;
use itask::ui::core::{Action, Component};

fn focused_form() -> TaskFormComponent {
    let mut form = TaskFormComponent::new("%Y-%m-%d %H:%M");
    form.update(Action::FocusForm);
    form
}

fn type_text(form: &mut TaskFormComponent, text: &str) {
    for c in text.chars() {
        form.handle_key_events(ch(c));
    }
}

fn draft() -> EditDraft {
    let deadline = Local.with_ymd_and_hms(2024, 2, 10, 14, 30, 0).unwrap();
    EditDraft {
        text: "Call mom".to_string(),
        deadline: Some(deadline),
        original: Task::new(TaskId(7), "Call mom".to_string(), Some(deadline)),
        position: 2,
    }
}

#[test]
fn test_unfocused_form_ignores_keys() {
    let mut form = TaskFormComponent::new("%Y");

    assert!(matches!(form.handle_key_events(ch('x')), Action::None));
    assert!(matches!(form.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(form.input_buffer.is_empty());
}

#[test]
fn test_submit_emits_add_and_clears() {
    let mut form = focused_form();
    type_text(&mut form, "Buy milk");

    match form.handle_key_events(key(KeyCode::Enter)) {
        Action::AddTask { text, deadline } => {
            assert_eq!(text, "Buy milk");
            assert!(deadline.is_none());
        }
        other => panic!("expected AddTask, got {other:?}"),
    }
    assert!(form.input_buffer.is_empty());
    assert_eq!(form.cursor_position, 0);
    assert!(form.focused);
}

#[test]
fn test_submit_ignores_blank_text() {
    let mut form = focused_form();
    type_text(&mut form, "   ");

    assert!(matches!(form.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert_eq!(form.input_buffer, "   ");
}

#[test]
fn test_tab_opens_deadline_picker() {
    let mut form = focused_form();
    assert!(matches!(
        form.handle_key_events(key(KeyCode::Tab)),
        Action::OpenDeadlinePicker(None)
    ));

    let deadline = Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    form.update(Action::DeadlineConfirmed(deadline));

    assert_eq!(form.deadline, Some(deadline));
    assert!(matches!(
        form.handle_key_events(key(KeyCode::Tab)),
        Action::OpenDeadlinePicker(Some(d)) if d == deadline
    ));
}

#[test]
fn test_submit_carries_staged_deadline() {
    let mut form = focused_form();
    let deadline = Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    form.update(Action::DeadlineConfirmed(deadline));
    type_text(&mut form, "Pay rent");

    assert!(matches!(
        form.handle_key_events(key(KeyCode::Enter)),
        Action::AddTask { deadline: Some(d), .. } if d == deadline
    ));
    assert!(form.deadline.is_none(), "deadline resets after saving");
}

#[test]
fn test_escape_without_edit_leaves_form() {
    let mut form = focused_form();

    assert!(matches!(form.handle_key_events(key(KeyCode::Esc)), Action::FocusList));

    form.update(Action::FocusList);
    assert!(!form.focused);
}

#[test]
fn test_load_draft_prefills_form() {
    let mut form = TaskFormComponent::new("%Y");
    let draft = draft();

    form.load_draft(draft.clone());

    assert!(form.focused);
    assert!(form.is_editing());
    assert_eq!(form.input_buffer, "Call mom");
    assert_eq!(form.cursor_position, 8);
    assert_eq!(form.deadline, draft.deadline);
}

#[test]
fn test_escape_during_edit_cancels_it() {
    let mut form = TaskFormComponent::new("%Y");
    form.load_draft(draft());

    match form.handle_key_events(key(KeyCode::Esc)) {
        Action::CancelEdit(returned) => assert_eq!(returned, draft()),
        other => panic!("expected CancelEdit, got {other:?}"),
    }
    assert!(!form.is_editing());
    assert!(form.input_buffer.is_empty());
    assert!(form.deadline.is_none());
}

#[test]
fn test_saving_edit_drops_draft() {
    let mut form = TaskFormComponent::new("%Y");
    form.load_draft(draft());
    type_text(&mut form, "!");

    assert!(matches!(
        form.handle_key_events(key(KeyCode::Enter)),
        Action::AddTask { ref text, .. } if text == "Call mom!"
    ));
    assert!(form.take_draft().is_none());
}

#[test]
fn test_cursor_editing() {
    let mut form = focused_form();
    type_text(&mut form, "ac");

    form.handle_key_events(key(KeyCode::Left));
    form.handle_key_events(ch('b'));
    assert_eq!(form.input_buffer, "abc");

    form.handle_key_events(key(KeyCode::Home));
    form.handle_key_events(key(KeyCode::Delete));
    assert_eq!(form.input_buffer, "bc");

    form.handle_key_events(key(KeyCode::End));
    form.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(form.input_buffer, "b");
}

#[test]
fn test_multibyte_input() {
    let mut form = focused_form();
    type_text(&mut form, "café");

    form.handle_key_events(key(KeyCode::Backspace));
    form.handle_key_events(ch('e'));

    assert_eq!(form.input_buffer, "cafe");
    assert_eq!(form.cursor_position, 4);
}
