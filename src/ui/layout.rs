//! Layout management and calculations

use crate::constants::{FOOTER_HEIGHT, FORM_HEIGHT, HEADER_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas of the main view, top to bottom
#[derive(Debug, Clone, Copy)]
pub struct MainAreas {
    pub header: Rect,
    pub form: Rect,
    pub list: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header, add form, task list and footer
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        MainAreas {
            header: chunks[0],
            form: chunks[1],
            list: chunks[2],
            footer: chunks[3],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle of fixed size, shrunk to fit small terminals
    #[must_use]
    pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
        let width = width.min(r.width);
        let height = height.min(r.height);
        Rect::new(
            r.x + (r.width - width) / 2,
            r.y + (r.height - height) / 2,
            width,
            height,
        )
    }

    /// Whether a terminal cell lies inside the rectangle
    #[must_use]
    pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
    }
}
