use crate::constants::{ALL_FINISHED_HIDDEN_MESSAGE, EMPTY_LIST_MESSAGE, SHOW_FINISHED_LABEL};
use crate::icons::IconService;
use crate::tasks::{Task, TaskId};
use crate::ui::components::badge::create_filter_badge;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, DialogType, PendingAction},
    Component,
};
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Task rows filtered by the "show finished" toggle.
pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub total_tasks: usize,
    pub selected_index: usize,
    pub list_state: ListState,
    pub show_finished: bool,
    pub icons: IconService,
    deadline_format: String,
    scrollbar: ScrollbarHelper,
}

impl TaskListComponent {
    pub fn new(deadline_format: impl Into<String>, show_finished: bool) -> Self {
        Self {
            tasks: Vec::new(),
            total_tasks: 0,
            selected_index: 0,
            list_state: ListState::default(),
            show_finished,
            icons: IconService::default(),
            deadline_format: deadline_format.into(),
            scrollbar: ScrollbarHelper::new(),
        }
    }

    /// Replace the visible rows; `total_tasks` counts hidden ones too
    pub fn update_data(&mut self, tasks: Vec<Task>, total_tasks: usize) {
        self.tasks = tasks;
        self.total_tasks = total_tasks;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.get_selected_task().map(|task| task.id)
    }

    fn create_task_item<'a>(&self, task: &'a Task) -> ListItem<'a> {
        let mut line_spans = Vec::new();

        let (status_icon, status_style) = if task.is_completed {
            (self.icons.task_completed(), Style::default().fg(Color::Green))
        } else {
            (self.icons.task_pending(), Style::default().fg(Color::White))
        };
        line_spans.push(Span::styled(format!("{} ", status_icon), status_style));

        let content_style = if task.is_completed {
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(task.text.as_str(), content_style));

        if let Some(deadline) = &task.deadline {
            line_spans.push(Span::raw("  "));
            line_spans.push(Span::styled(
                format!(
                    "{} {}",
                    self.icons.deadline(),
                    datetime::format_deadline(deadline, &self.deadline_format)
                ),
                Style::default().fg(Color::Rgb(255, 165, 0)),
            ));
        }

        ListItem::new(Line::from(line_spans))
    }

    fn title(&self) -> Line<'static> {
        Line::from(vec![
            Span::raw(format!(" {} Tasks ", self.icons.tasks_title())),
            create_filter_badge(SHOW_FINISHED_LABEL, self.show_finished),
            Span::raw(" "),
        ])
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Char(' ') => self.selected_id().map_or(Action::None, Action::ToggleTask),
            KeyCode::Char('e') => self.selected_id().map_or(Action::None, Action::EditTask),
            KeyCode::Char('d') => self.selected_id().map_or(Action::None, |id| {
                Action::ShowDialog(DialogType::Confirm(PendingAction::DeleteTask(id)))
            }),
            KeyCode::Char('D') if self.total_tasks > 0 => {
                Action::ShowDialog(DialogType::Confirm(PendingAction::DeleteAll))
            }
            KeyCode::Char('f') => Action::ToggleShowFinished,
            KeyCode::Char('a') | KeyCode::Enter => Action::FocusForm,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            Action::ToggleShowFinished => {
                self.show_finished = !self.show_finished;
                // The app still needs to refresh the rows
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title());

        if self.tasks.is_empty() {
            let message = if self.total_tasks == 0 {
                EMPTY_LIST_MESSAGE
            } else {
                ALL_FINISHED_HIDDEN_MESSAGE
            };
            let empty = Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(empty, rect);
            return;
        }

        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, self.tasks.len());
        let items: Vec<ListItem> = self.tasks.iter().map(|task| self.create_task_item(task)).collect();
        let tasks_list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let mut list_state = self.list_state.clone();
        f.render_stateful_widget(tasks_list, list_area, &mut list_state);
        self.list_state = list_state;

        let viewport = rect.height.saturating_sub(2) as usize;
        self.scrollbar
            .update_state(self.tasks.len(), self.selected_index, viewport);
        self.scrollbar.render(f, scrollbar_area);
    }
}
