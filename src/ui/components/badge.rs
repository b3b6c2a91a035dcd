use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// "N tasks left" badge for the footer
#[must_use]
pub fn create_remaining_badge(remaining: usize) -> Span<'static> {
    Span::styled(
        format!(" {remaining} tasks left "),
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    )
}

/// Red "Delete All" hint shown next to the remaining badge
#[must_use]
pub fn create_delete_all_badge() -> Span<'static> {
    Span::styled(
        " D Delete All ",
        Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
    )
}

/// Checkbox-style indicator for the "show finished" filter
#[must_use]
pub fn create_filter_badge(label: &str, enabled: bool) -> Span<'static> {
    let mark = if enabled { "[x]" } else { "[ ]" };
    let color = if enabled { Color::Green } else { Color::Gray };
    Span::styled(format!("{mark} {label}"), Style::default().fg(color))
}
