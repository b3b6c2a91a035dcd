//! Modal dialog component.
//!
//! Hosts every modal of the app: delete confirmations, the deadline picker,
//! and the help and logs panels. At most one dialog is open at a time.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::pickers::time::dial_index_at;
use crate::pickers::{DeadlinePicker, DialMode, Period, PickerPane};
use crate::tasks::Task;
use crate::ui::components::dialogs::deadline_dialog::DeadlineDialogAreas;
use crate::ui::components::dialogs::scroll_behavior::DialogScroll;
use crate::ui::components::dialogs::{confirm_dialog, deadline_dialog, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType, PendingAction},
    Component,
};
use crate::ui::layout::LayoutManager;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    deadline_picker: Option<DeadlinePicker>,
    scroll: DialogScroll,
    tasks: Vec<Task>,
    logger: Option<Logger>,
    // Areas from the last render, for mouse hit testing
    dialog_area: Option<Rect>,
    deadline_areas: Option<DeadlineDialogAreas>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            deadline_picker: None,
            scroll: DialogScroll::default(),
            tasks: Vec::new(),
            logger: None,
            dialog_area: None,
            deadline_areas: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    /// Tasks used to preview the one a confirmation refers to
    pub fn update_data(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Working state of the open deadline picker
    pub fn deadline_picker(&self) -> Option<&DeadlinePicker> {
        self.deadline_picker.as_ref()
    }

    fn open(&mut self, dialog_type: DialogType) {
        self.clear_dialog();
        if let DialogType::DeadlinePicker { initial } = &dialog_type {
            self.deadline_picker = Some(DeadlinePicker::open(*initial));
        }
        self.dialog_type = Some(dialog_type);
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        if let Some(picker) = self.deadline_picker.take() {
            picker.cancel();
        }
        self.scroll.reset();
        self.dialog_area = None;
        self.deadline_areas = None;
    }

    /// Emit the action bound to the open confirmation
    fn confirm(&mut self, pending: PendingAction) -> Action {
        self.clear_dialog();
        match pending {
            PendingAction::DeleteTask(id) => Action::DeleteTask(id),
            PendingAction::DeleteAll => Action::DeleteAll,
        }
    }

    fn confirm_deadline(&mut self) -> Action {
        let Some(picker) = self.deadline_picker.take() else {
            return Action::HideDialog;
        };
        let deadline = picker.confirm();
        self.clear_dialog();
        Action::DeadlineConfirmed(deadline)
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, pending: PendingAction) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm(pending),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn handle_deadline_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => return self.confirm_deadline(),
            KeyCode::Esc => return Action::HideDialog,
            _ => {}
        }

        let Some(picker) = self.deadline_picker.as_mut() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => picker.toggle_focus(),
            KeyCode::PageUp | KeyCode::Char('<') => picker.change_month(-1),
            KeyCode::PageDown | KeyCode::Char('>') => picker.change_month(1),
            KeyCode::Char('h') => picker.switch_mode(DialMode::Hour),
            KeyCode::Char('m') => picker.switch_mode(DialMode::Minute),
            KeyCode::Char('a') => picker.set_period(Period::Am),
            KeyCode::Char('p') => picker.set_period(Period::Pm),
            KeyCode::Char(' ') => match picker.focus() {
                PickerPane::Calendar => {
                    picker.select_calendar_cursor();
                }
                PickerPane::Clock => picker.select_clock_cursor(),
            },
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                let step: i64 = match key.code {
                    KeyCode::Left => -1,
                    KeyCode::Right => 1,
                    KeyCode::Up if picker.focus() == PickerPane::Calendar => -7,
                    KeyCode::Down if picker.focus() == PickerPane::Calendar => 7,
                    KeyCode::Up => -1,
                    _ => 1,
                };
                match picker.focus() {
                    PickerPane::Calendar => picker.move_calendar_cursor(step),
                    PickerPane::Clock => picker.move_clock_cursor(step as i32),
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_scroll_key(&mut self, key: KeyEvent, close_keys: &[KeyCode]) -> Action {
        if close_keys.contains(&key.code) {
            return Action::HideDialog;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.scroll_to_top(),
            KeyCode::End => self.scroll.scroll_to_bottom(),
            _ => {}
        }
        Action::None
    }

    /// A click on the calendar or the clock face of the deadline picker
    fn handle_deadline_click(&mut self, column: u16, row: u16) -> Action {
        let (Some(areas), Some(picker)) = (self.deadline_areas, self.deadline_picker.as_mut()) else {
            return Action::None;
        };

        if let Some(cell) = areas.calendar_cell_at(column, row) {
            if let Some(day) = picker.calendar().day_at_cell(cell) {
                picker.select_day(day);
            }
        } else if let Some(index) = areas
            .dial_offset_at(column, row)
            .and_then(|(dx, dy)| dial_index_at(dx, dy))
        {
            picker.select_dial_index(index);
        }
        Action::None
    }

    fn task_preview(&self, pending: PendingAction) -> Option<&str> {
        match pending {
            PendingAction::DeleteTask(id) => self
                .tasks
                .iter()
                .find(|task| task.id == id)
                .map(|task| task.text.as_str()),
            PendingAction::DeleteAll => None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.dialog_type.clone() {
            None => Action::None,
            Some(DialogType::Confirm(pending)) => self.handle_confirm_key(key, pending),
            Some(DialogType::DeadlinePicker { .. }) => self.handle_deadline_key(key),
            Some(DialogType::Help) => self.handle_scroll_key(key, &[KeyCode::Esc, KeyCode::Char('?')]),
            Some(DialogType::Logs) => {
                self.handle_scroll_key(key, &[KeyCode::Esc, KeyCode::Char('G'), KeyCode::Char('q')])
            }
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.is_visible() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        let Some(area) = self.dialog_area else {
            return Action::None;
        };

        // Clicking outside the dialog is the same as cancelling it
        if !LayoutManager::contains(area, mouse.column, mouse.row) {
            return Action::HideDialog;
        }

        if matches!(self.dialog_type, Some(DialogType::DeadlinePicker { .. })) {
            return self.handle_deadline_click(mouse.column, mouse.row);
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(ref dialog_type) => {
                self.open(dialog_type.clone());
                action
            }
            Action::OpenDeadlinePicker(initial) => {
                let dialog_type = DialogType::DeadlinePicker { initial };
                self.open(dialog_type.clone());
                Action::ShowDialog(dialog_type)
            }
            Action::HideDialog => {
                self.clear_dialog();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = match self.dialog_type.clone() {
            None => return,
            Some(DialogType::Confirm(pending)) => {
                let preview = self.task_preview(pending).map(str::to_owned);
                confirm_dialog::render_confirm_dialog(f, rect, &self.icons, pending, preview.as_deref())
            }
            Some(DialogType::DeadlinePicker { .. }) => {
                let Some(picker) = self.deadline_picker.as_ref() else {
                    return;
                };
                let today = Local::now().date_naive();
                let areas = deadline_dialog::render_deadline_dialog(f, rect, &self.icons, picker, today);
                self.deadline_areas = Some(areas);
                areas.dialog
            }
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            Some(DialogType::Logs) => {
                system_dialogs::render_logs_dialog(f, rect, self.logger.as_ref(), &mut self.scroll)
            }
        };
        self.dialog_area = Some(area);
    }
}
