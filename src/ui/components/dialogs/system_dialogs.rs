use super::scroll_behavior::DialogScroll;
use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const HELP_CONTENT: &str = r"
ITASK - Your Productivity Companion
===================================

ADDING TASKS
------------
a / Enter   Focus the add form
Enter       Save the task (ignored while the text is blank)
Tab         Set a deadline with the calendar and clock
Esc         Leave the form (an abandoned edit puts the task back)

TASK LIST
---------
j/k ↑↓      Move the selection
Space       Toggle task completion
e           Edit selected task
d           Delete task (with confirmation)
D           Delete all tasks (with confirmation)
f           Show/hide finished tasks

DEADLINE PICKER
---------------
Tab         Switch between calendar and clock
←→↑↓        Move the day cursor / dial cursor
PgUp/PgDn   Previous/next month
Space       Pick the highlighted day or dial value
h/m         Hour or minute dial
a/p         AM or PM
Enter       OK, keep the deadline
Esc         Cancel, discard changes

GENERAL CONTROLS
----------------
?           Toggle help panel
G           Show logs
i           Change icon theme
q           Quit application
Ctrl+C      Quit application

Clicking outside a dialog cancels it.

Press 'Esc' or '?' to close this help panel
";

/// Render a bordered block of scrollable text, returning the area it covers
fn render_scrollable_text(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut DialogScroll) -> Rect {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        dialog_area.x + margin_x,
        dialog_area.y + margin_y,
        dialog_area.width.saturating_sub(margin_x * 2),
        dialog_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let visible_text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        f.render_stateful_widget(ScrollbarHelper::widget(Color::White), content_area, &mut scroll.state);
    }

    content_area
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) -> Rect {
    render_scrollable_text(
        f,
        area,
        "📖 Help - Press 'Esc' or '?' to close",
        HELP_CONTENT,
        scroll,
    )
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: Option<&Logger>, scroll: &mut DialogScroll) -> Rect {
    let logs = logger.map(Logger::get_logs).unwrap_or_default();
    let logs_content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_text(f, area, DIALOG_TITLE_LOGS, &logs_content, scroll)
}
