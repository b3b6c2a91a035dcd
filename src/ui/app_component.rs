use crate::config::Config;
use crate::constants::FOOTER_HINTS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::tasks::{TaskId, TaskStore};
use crate::ui::components::badge::{create_delete_all_badge, create_remaining_badge};
use crate::ui::components::{DialogComponent, HeaderComponent, TaskFormComponent, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct AppComponent {
    // Component composition
    header: HeaderComponent,
    form: TaskFormComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    store: TaskStore,
    icons: IconService,

    // Services
    logger: Logger,

    // Simple UI state
    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: TaskStore, config: &Config, logger: Logger) -> Self {
        let mut app = Self {
            header: HeaderComponent::new(config.display.clock_format.clone()),
            form: TaskFormComponent::new(config.display.deadline_format.clone()),
            task_list: TaskListComponent::new(config.display.deadline_format.clone(), config.ui.show_finished),
            dialog: DialogComponent::new(),
            store,
            icons: IconService::new(config.ui.icon_theme),
            logger,
            should_quit: false,
        };
        app.dialog.set_logger(app.logger.clone());
        app.apply_icon_theme();
        app.sync_component_data();
        app.logger
            .log(format!("AppComponent: Started with {} tasks", app.store.len()));
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn form(&self) -> &TaskFormComponent {
        &self.form
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Refresh the header clock; returns true when a redraw is needed
    pub fn tick(&mut self) -> bool {
        self.header.tick(Local::now())
    }

    fn apply_icon_theme(&mut self) {
        self.header.icons = self.icons.clone();
        self.form.icons = self.icons.clone();
        self.task_list.icons = self.icons.clone();
        self.dialog.icons = self.icons.clone();
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let visible = self
            .store
            .visible(self.task_list.show_finished)
            .into_iter()
            .cloned()
            .collect();
        self.task_list.update_data(visible, self.store.len());
        self.dialog.update_data(self.store.tasks().to_vec());
    }

    /// Put back a task whose edit was never saved
    async fn restore_pending_edit(&mut self) {
        if let Some(draft) = self.form.take_draft() {
            let id = draft.original.id;
            if self.store.restore(draft).await {
                self.logger.log(format!("Task: Restored task {} after abandoned edit", id));
            }
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.restore_pending_edit().await;
                self.should_quit = true;
                Action::None
            }
            Action::AddTask { text, deadline } => {
                match self.store.add(&text, deadline).await {
                    Some(id) => self.logger.log(format!("Task: Added task {} '{}'", id, text)),
                    None => self.logger.log("Task: Ignored blank task".to_string()),
                }
                Action::None
            }
            Action::ToggleTask(id) => {
                if self.store.toggle_complete(id).await {
                    let state = match self.store.get(id) {
                        Some(task) if task.is_completed => "completed",
                        _ => "pending",
                    };
                    self.logger.log(format!("Task: Marked task {} as {}", id, state));
                }
                Action::None
            }
            Action::EditTask(id) => {
                self.restore_pending_edit().await;
                match self.store.begin_edit(id).await {
                    Some(draft) => {
                        self.logger.log(format!("Task: Editing task {} '{}'", id, draft.text));
                        let deadline = draft.deadline;
                        self.form.load_draft(draft);
                        if let Action::ShowDialog(dialog_type) =
                            self.dialog.update(Action::OpenDeadlinePicker(deadline))
                        {
                            self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                        }
                    }
                    None => self.log_missing(id, "edit"),
                }
                Action::None
            }
            Action::CancelEdit(draft) => {
                let id = draft.original.id;
                if self.store.restore(draft).await {
                    self.logger.log(format!("Task: Edit of task {} abandoned, restored", id));
                }
                self.form.on_blur();
                Action::None
            }
            Action::DeleteTask(id) => {
                match self.store.remove(id).await {
                    Some(task) => self.logger.log(format!("Task: Deleted task {} '{}'", id, task.text)),
                    None => self.log_missing(id, "delete"),
                }
                Action::None
            }
            Action::DeleteAll => {
                let removed = self.store.remove_all().await;
                self.logger.log(format!("Task: Deleted all {} tasks", removed));
                Action::None
            }
            Action::ToggleShowFinished => {
                self.logger.log(format!(
                    "Filter: {} finished tasks",
                    if self.task_list.show_finished { "Showing" } else { "Hiding" }
                ));
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.apply_icon_theme();
                self.logger
                    .log(format!("UI: Icon theme changed to {:?}", self.icons.theme()));
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                Action::None
            }
            Action::HideDialog => {
                self.logger.log("Dialog: Hiding current dialog".to_string());
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    fn log_missing(&self, id: TaskId, operation: &str) {
        self.logger
            .log(format!("Task: Cannot {} task {}, it no longer exists", operation, id));
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else if self.form.focused {
                    // The form swallows every key while typing
                    self.form.handle_key_events(key)
                } else {
                    let task_list_action = self.task_list.handle_key_events(key);

                    if !matches!(task_list_action, Action::None) {
                        task_list_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Mouse(mouse) => self.dialog.handle_mouse_events(mouse),
            EventType::Tick => {
                self.tick();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        // Process action through component hierarchy
        let action = self.update(action);

        // Handle app-level actions
        let _final_action = self.handle_app_action(action).await;

        // Update component data after any changes
        self.sync_component_data();

        Ok(())
    }

    fn render_footer(&self, f: &mut Frame, rect: Rect) {
        let hints = Line::from(Span::styled(FOOTER_HINTS, Style::default().fg(Color::DarkGray)));
        let [badge_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints.width() as u16)]).areas(rect);

        if !self.store.is_empty() {
            let badges = Line::from(vec![
                create_remaining_badge(self.store.remaining()),
                Span::raw(" "),
                create_delete_all_badge(),
            ]);
            f.render_widget(Paragraph::new(badges), badge_area);
        }

        f.render_widget(Paragraph::new(hints).alignment(Alignment::Right), hints_area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.form.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.header.render(f, areas.header);
        self.form.render(f, areas.form);
        self.task_list.render(f, areas.list);
        self.render_footer(f, areas.footer);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
