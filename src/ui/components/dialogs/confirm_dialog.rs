use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::{
    CONFIRM_DELETE_ALL_MESSAGE, CONFIRM_DELETE_ALL_TITLE, CONFIRM_DELETE_MESSAGE, CONFIRM_DELETE_TITLE,
};
use crate::icons::IconService;
use crate::ui::core::PendingAction;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Title and question for a pending destructive action
pub fn confirm_text(pending: PendingAction) -> (&'static str, &'static str) {
    match pending {
        PendingAction::DeleteTask(_) => (CONFIRM_DELETE_TITLE, CONFIRM_DELETE_MESSAGE),
        PendingAction::DeleteAll => (CONFIRM_DELETE_ALL_TITLE, CONFIRM_DELETE_ALL_MESSAGE),
    }
}

/// Render the confirmation dialog and return the area it occupies
pub fn render_confirm_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    pending: PendingAction,
    task_preview: Option<&str>,
) -> Rect {
    let height = if task_preview.is_some() { 8 } else { 7 };
    let dialog_area = LayoutManager::centered_rect_lines(50, height, area);
    f.render_widget(Clear, dialog_area);

    let (title, message) = confirm_text(pending);
    let block = create_dialog_block(format!(" {} {} ", icons.warning(), title), Color::Red);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let [message_area, preview_area, _, instructions_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(if task_preview.is_some() { 1 } else { 0 }),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message_paragraph, message_area);

    if let Some(preview) = task_preview {
        let preview = if preview.chars().count() > 40 {
            format!("\"{}...\"", preview.chars().take(37).collect::<String>())
        } else {
            format!("\"{preview}\"")
        };
        let preview_paragraph = Paragraph::new(preview)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(preview_paragraph, preview_area);
    }

    let instructions = create_instructions_paragraph(&[
        shortcuts::Y_CONFIRM,
        shortcuts::SEPARATOR,
        shortcuts::N_CANCEL,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, instructions_area);

    dialog_area
}
