//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Task checkbox icons
#[derive(Debug, Clone)]
pub struct TaskStatusIcons {
    pub pending: &'static str,
    pub completed: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub app_title: &'static str,
    pub tasks_title: &'static str,
    pub warning: &'static str,
}

/// Deadline related icons
#[derive(Debug, Clone)]
pub struct DeadlineIcons {
    pub deadline: &'static str,
    pub calendar: &'static str,
    pub clock: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_status: TaskStatusIcons,
    pub ui: UiIcons,
    pub deadline: DeadlineIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "🔳",
                completed: "✅",
            },
            ui: UiIcons {
                app_title: "📝",
                tasks_title: "📋",
                warning: "⚠️",
            },
            deadline: DeadlineIcons {
                deadline: "⏰",
                calendar: "📅",
                clock: "🕒",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "□",
                completed: "✓",
            },
            ui: UiIcons {
                app_title: "◆",
                tasks_title: "▶",
                warning: "⚠",
            },
            deadline: DeadlineIcons {
                deadline: "◷",
                calendar: "▦",
                clock: "◴",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_status: TaskStatusIcons {
                pending: "[ ]",
                completed: "[X]",
            },
            ui: UiIcons {
                app_title: "#",
                tasks_title: ">",
                warning: "!",
            },
            deadline: DeadlineIcons {
                deadline: "@",
                calendar: "D",
                clock: "T",
            },
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn task_pending(&self) -> &'static str {
        self.icons().task_status.pending
    }

    #[must_use]
    pub fn task_completed(&self) -> &'static str {
        self.icons().task_status.completed
    }

    #[must_use]
    pub fn app_title(&self) -> &'static str {
        self.icons().ui.app_title
    }

    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        self.icons().ui.tasks_title
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn deadline(&self) -> &'static str {
        self.icons().deadline.deadline
    }

    #[must_use]
    pub fn calendar(&self) -> &'static str {
        self.icons().deadline.calendar
    }

    #[must_use]
    pub fn clock(&self) -> &'static str {
        self.icons().deadline.clock
    }
}
