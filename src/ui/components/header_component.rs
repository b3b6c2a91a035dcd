//! Application header with the live clock.

use crate::constants::{APP_NAME, APP_TAGLINE};
use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component};
use crate::utils::datetime;
use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct HeaderComponent {
    pub icons: IconService,
    clock_format: String,
    now: DateTime<Local>,
}

impl HeaderComponent {
    pub fn new(clock_format: impl Into<String>) -> Self {
        Self {
            icons: IconService::default(),
            clock_format: clock_format.into(),
            now: Local::now(),
        }
    }

    /// Refresh the clock; returns true when the displayed text changed
    pub fn tick(&mut self, now: DateTime<Local>) -> bool {
        let changed = self.clock_text() != datetime::format_clock(&now, &self.clock_format);
        self.now = now;
        changed
    }

    pub fn clock_text(&self) -> String {
        datetime::format_clock(&self.now, &self.clock_format)
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Blue));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [title_area, clock_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(inner);

        let title = Line::from(vec![
            Span::styled(
                format!("{} {}", self.icons.app_title(), APP_NAME),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", APP_TAGLINE), Style::default().fg(Color::Gray)),
        ]);
        f.render_widget(Paragraph::new(title), title_area);

        let clock = Line::from(vec![
            Span::styled(format!("{} ", self.icons.clock()), Style::default().fg(Color::Cyan)),
            Span::styled(
                self.clock_text(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]);
        f.render_widget(Paragraph::new(clock).alignment(Alignment::Right), clock_area);
    }
}
