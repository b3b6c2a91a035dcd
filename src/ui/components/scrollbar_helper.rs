//! Scrollbar shared by the task list and the scrollable dialogs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar state with current content information.
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_height: usize) {
        self.state = self
            .state
            .content_length(total_items)
            .viewport_content_length(viewport_height)
            .position(current_position);
    }

    /// Split a bordered area into the content area and, when the items overflow,
    /// a one column scrollbar track inside the right border.
    pub fn calculate_areas(rect: Rect, total_items: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize;
        if total_items <= available_height {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            f.render_stateful_widget(Self::widget(Color::DarkGray), area, &mut self.state);
        }
    }

    /// Vertical scrollbar styled the same everywhere in the app
    pub fn widget(thumb: Color) -> Scrollbar<'static> {
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(Color::DarkGray))
            .thumb_style(Style::default().fg(thumb))
    }
}
