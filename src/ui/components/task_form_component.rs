//! Add/edit form above the task list.

use crate::constants::{INPUT_PLACEHOLDER, NO_DEADLINE_LABEL};
use crate::icons::IconService;
use crate::tasks::EditDraft;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Text input plus the deadline staged for the next save.
///
/// While an edit is in progress the form keeps the [`EditDraft`] so the
/// task can be put back if the user abandons the edit.
pub struct TaskFormComponent {
    pub input_buffer: String,
    pub cursor_position: usize,
    pub deadline: Option<DateTime<Local>>,
    pub editing: Option<EditDraft>,
    pub focused: bool,
    pub icons: IconService,
    deadline_format: String,
}

impl TaskFormComponent {
    pub fn new(deadline_format: impl Into<String>) -> Self {
        Self {
            input_buffer: String::new(),
            cursor_position: 0,
            deadline: None,
            editing: None,
            focused: false,
            icons: IconService::default(),
            deadline_format: deadline_format.into(),
        }
    }

    /// Prefill the form from a task taken out for editing
    pub fn load_draft(&mut self, draft: EditDraft) {
        self.input_buffer = draft.text.clone();
        self.cursor_position = self.input_buffer.chars().count();
        self.deadline = draft.deadline;
        self.editing = Some(draft);
        self.focused = true;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Hand back an unfinished edit, leaving the form empty
    pub fn take_draft(&mut self) -> Option<EditDraft> {
        let draft = self.editing.take();
        if draft.is_some() {
            self.clear();
        }
        draft
    }

    pub fn clear(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.deadline = None;
        self.editing = None;
    }

    fn handle_submit(&mut self) -> Action {
        if self.input_buffer.trim().is_empty() {
            return Action::None;
        }

        let action = Action::AddTask {
            text: self.input_buffer.clone(),
            deadline: self.deadline,
        };
        // The draft is superseded by the saved task
        self.clear();
        action
    }

    fn byte_position(&self, char_index: usize) -> usize {
        self.input_buffer
            .chars()
            .take(char_index)
            .map(char::len_utf8)
            .sum()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_position(self.cursor_position);
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    fn backspace(&mut self) {
        if self.cursor_position > 0 {
            let byte_pos = self.byte_position(self.cursor_position - 1);
            self.input_buffer.remove(byte_pos);
            self.cursor_position -= 1;
        }
    }

    fn delete(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            let byte_pos = self.byte_position(self.cursor_position);
            self.input_buffer.remove(byte_pos);
        }
    }

    fn deadline_label(&self) -> String {
        match &self.deadline {
            Some(deadline) => datetime::format_deadline(deadline, &self.deadline_format),
            None => NO_DEADLINE_LABEL.to_string(),
        }
    }
}

impl Component for TaskFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Tab => Action::OpenDeadlinePicker(self.deadline),
            KeyCode::Esc => match self.take_draft() {
                Some(draft) => Action::CancelEdit(draft),
                None => Action::FocusList,
            },
            KeyCode::Char(c) => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.backspace();
                Action::None
            }
            KeyCode::Delete => {
                self.delete();
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FocusForm => {
                self.on_focus();
                Action::None
            }
            Action::FocusList => {
                self.on_blur();
                Action::None
            }
            Action::DeadlineConfirmed(deadline) => {
                self.deadline = Some(deadline);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [input_area, deadline_area] = Layout::horizontal([Constraint::Min(20), Constraint::Length(30)]).areas(rect);

        let title = if self.is_editing() { " Edit task " } else { " Add a task " };
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::White))
            .style(Style::default().fg(border_color));

        let input_line = if self.input_buffer.is_empty() && !self.focused {
            Line::from(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(self.input_buffer.as_str(), Style::default().fg(Color::White)))
        };
        f.render_widget(Paragraph::new(input_line).block(input_block), input_area);

        if self.focused {
            let prefix: String = self.input_buffer.chars().take(self.cursor_position).collect();
            let offset = Line::from(prefix).width() as u16;
            let max_x = input_area.x + input_area.width.saturating_sub(2);
            f.set_cursor_position(((input_area.x + 1 + offset).min(max_x), input_area.y + 1));
        }

        let deadline_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Tab: deadline ")
            .title_style(Style::default().fg(Color::White))
            .style(Style::default().fg(Color::Gray));
        let deadline_color = if self.deadline.is_some() { Color::Rgb(255, 165, 0) } else { Color::DarkGray };
        let deadline_line = Line::from(vec![
            Span::styled(format!("{} ", self.icons.deadline()), Style::default().fg(deadline_color)),
            Span::styled(self.deadline_label(), Style::default().fg(deadline_color)),
        ]);
        f.render_widget(Paragraph::new(deadline_line).block(deadline_block), deadline_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
        self.cursor_position = self.input_buffer.chars().count();
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
