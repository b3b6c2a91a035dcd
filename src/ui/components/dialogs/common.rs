use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const N_CANCEL: InstructionShortcut = ("n", Color::Red, " Cancel");
    pub const Y_CONFIRM: InstructionShortcut = ("y", Color::Green, " Confirm");
    pub const ENTER_OK: InstructionShortcut = ("Enter", Color::Green, " OK");
    pub const TAB_SWITCH: InstructionShortcut = ("Tab", Color::Cyan, " Switch pane");
    pub const SPACE_PICK: InstructionShortcut = ("Space", Color::Cyan, " Pick");
    pub const MONTH_NAV: InstructionShortcut = ("PgUp/PgDn", Color::Cyan, " Month");
    pub const DIAL_MODE: InstructionShortcut = ("h/m", Color::Cyan, " Hour/Minute");
    pub const PERIOD: InstructionShortcut = ("a/p", Color::Cyan, " AM/PM");
}
