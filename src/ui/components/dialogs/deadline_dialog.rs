//! Deadline picker modal: month calendar on the left, analog clock on the right.

use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::{DEADLINE_DIALOG_HEIGHT, DEADLINE_DIALOG_TITLE, DEADLINE_DIALOG_WIDTH};
use crate::icons::IconService;
use crate::pickers::time::{dial_position, digital_readout, period_of, DIAL_RADIUS};
use crate::pickers::{CalendarCell, DeadlinePicker, DialMode, Period, PickerPane};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::DAYS_OF_WEEK;
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

/// Width of one calendar cell in columns
pub const CALENDAR_CELL_WIDTH: u16 = 4;

/// Half extent of the clock canvas; the face has radius 0.5
const DIAL_BOUND: f64 = 0.55;
const FACE_RADIUS: f64 = 0.5;
const HAND_LENGTH: f64 = 0.3;

/// Screen areas of the rendered deadline dialog, kept for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeadlineDialogAreas {
    pub dialog: Rect,
    /// Day rows of the calendar, below the weekday header
    pub calendar_days: Rect,
    pub dial: Rect,
}

impl DeadlineDialogAreas {
    /// Grid cell index under a terminal cell of the calendar
    pub fn calendar_cell_at(&self, column: u16, row: u16) -> Option<usize> {
        if !LayoutManager::contains(self.calendar_days, column, row) {
            return None;
        }
        let col = (column - self.calendar_days.x) / CALENDAR_CELL_WIDTH;
        if col >= 7 {
            return None;
        }
        let line = row - self.calendar_days.y;
        Some(usize::from(line) * 7 + usize::from(col))
    }

    /// Offset of a terminal cell from the dial center, in dial units (y down)
    pub fn dial_offset_at(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        if !LayoutManager::contains(self.dial, column, row) || self.dial.width == 0 || self.dial.height == 0 {
            return None;
        }
        let span = DIAL_BOUND * 2.0;
        let dx = (f64::from(column - self.dial.x) + 0.5) / f64::from(self.dial.width) * span - DIAL_BOUND;
        let dy = (f64::from(row - self.dial.y) + 0.5) / f64::from(self.dial.height) * span - DIAL_BOUND;
        Some((dx, dy))
    }
}

pub fn render_deadline_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    picker: &DeadlinePicker,
    today: NaiveDate,
) -> DeadlineDialogAreas {
    let dialog_area = LayoutManager::centered_rect_fixed(DEADLINE_DIALOG_WIDTH, DEADLINE_DIALOG_HEIGHT, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} {} ", icons.deadline(), DEADLINE_DIALOG_TITLE), Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let [readout_area, panes_area, instructions_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(2)]).areas(inner);
    let [calendar_area, clock_area] =
        Layout::horizontal([Constraint::Length(7 * CALENDAR_CELL_WIDTH + 2), Constraint::Min(0)]).areas(panes_area);

    render_readout(f, readout_area, picker);
    let calendar_days = render_calendar(f, calendar_area, icons, picker, today);
    let dial = render_clock(f, clock_area, icons, picker);

    let instructions = create_instructions_paragraph(&[
        shortcuts::TAB_SWITCH,
        shortcuts::SEPARATOR,
        shortcuts::SPACE_PICK,
        shortcuts::SEPARATOR,
        shortcuts::MONTH_NAV,
        shortcuts::SEPARATOR,
        shortcuts::DIAL_MODE,
        shortcuts::SEPARATOR,
        shortcuts::PERIOD,
    ]);
    let confirm = create_instructions_paragraph(&[shortcuts::ENTER_OK, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]);
    let [first, second] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(instructions_area);
    f.render_widget(instructions, first);
    f.render_widget(confirm, second);

    DeadlineDialogAreas {
        dialog: dialog_area,
        calendar_days,
        dial,
    }
}

fn render_readout(f: &mut Frame, area: Rect, picker: &DeadlinePicker) {
    let value = picker.value();
    let time = value.time();
    let (hour, minute) = digital_readout(time);
    let period = period_of(time);

    let active = Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let (hour_style, minute_style) = match picker.clock().mode() {
        DialMode::Hour => (active, idle),
        DialMode::Minute => (idle, active),
    };
    let period_style = |p: Period| if p == period { active } else { Style::default().fg(Color::DarkGray) };

    let line = Line::from(vec![
        Span::styled(value.format("%a %b %-d, %Y  ").to_string(), Style::default().fg(Color::Gray)),
        Span::styled(hour, hour_style),
        Span::styled(":", idle),
        Span::styled(minute, minute_style),
        Span::raw(" "),
        Span::styled("AM", period_style(Period::Am)),
        Span::raw(" "),
        Span::styled("PM", period_style(Period::Pm)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let color = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .style(Style::default().fg(color))
}

/// Draw the month grid; returns the area of the day rows
fn render_calendar(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    picker: &DeadlinePicker,
    today: NaiveDate,
) -> Rect {
    let calendar = picker.calendar();
    let focused = picker.focus() == PickerPane::Calendar;
    let view = calendar.view_month();

    let block = pane_block(format!(" {} ◀ {} ▶ ", icons.calendar(), view.title()), focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    lines.push(Line::from(
        DAYS_OF_WEEK
            .iter()
            .map(|name| Span::styled(format!("{name:>4}"), Style::default().fg(Color::Gray)))
            .collect::<Vec<_>>(),
    ));

    let cells = calendar.grid(picker.value().date(), today);
    for week in cells.chunks(7) {
        let spans = week
            .iter()
            .map(|cell| match *cell {
                CalendarCell::Blank => Span::raw("    "),
                CalendarCell::Day {
                    day,
                    is_today,
                    is_selected,
                } => {
                    let mut style = Style::default().fg(Color::White);
                    // Selected wins over today
                    if is_selected {
                        style = style.fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD);
                    } else if is_today {
                        style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                    }
                    if focused && day == calendar.cursor_day() {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
                    }
                    Span::styled(format!("{day:>3} "), style)
                }
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);

    Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    }
}

/// Draw the analog clock face; returns the canvas area
fn render_clock(f: &mut Frame, area: Rect, icons: &IconService, picker: &DeadlinePicker) -> Rect {
    let clock = picker.clock();
    let focused = picker.focus() == PickerPane::Clock;
    let time = picker.value().time();

    let mode = match clock.mode() {
        DialMode::Hour => "Hour",
        DialMode::Minute => "Minute",
    };
    let block = pane_block(format!(" {} {} ", icons.clock(), mode), focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let values = clock.dial_values();
    let selected = clock.selected_value(time);
    let cursor = clock.cursor();
    // Canvas y grows upwards, dial positions grow downwards
    let (hand_x, hand_y) = dial_position(clock.hand_angle(time), (0.0, 0.0), HAND_LENGTH);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-DIAL_BOUND, DIAL_BOUND])
        .y_bounds([-DIAL_BOUND, DIAL_BOUND])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: FACE_RADIUS,
                color: Color::DarkGray,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: hand_x,
                y2: -hand_y,
                color: Color::LightBlue,
            });
            ctx.layer();

            for (index, value) in values.iter().enumerate() {
                let angle = crate::pickers::TimePicker::value_angle(index);
                let (x, y) = dial_position(angle, (0.0, 0.0), DIAL_RADIUS);
                let mut style = Style::default().fg(Color::White);
                if *value == selected {
                    style = style.fg(Color::Black).bg(Color::LightBlue).add_modifier(Modifier::BOLD);
                }
                if focused && index == cursor {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED);
                }
                let label = if clock.mode() == DialMode::Minute {
                    format!("{value:02}")
                } else {
                    value.to_string()
                };
                // Nudge two-character labels left so they sit on their position
                let nudge = if label.len() > 1 { 0.03 } else { 0.0 };
                ctx.print(x - nudge, -y, Span::styled(label, style));
            }
            ctx.print(0.0, 0.0, Span::styled("•", Style::default().fg(Color::LightBlue)));
        });
    f.render_widget(canvas, inner);

    inner
}
