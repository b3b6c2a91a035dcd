//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

/// Application name shown in the header
pub const APP_NAME: &str = "iTask";
pub const APP_TAGLINE: &str = "Your Productivity Companion";

/// Key under which the task snapshot is stored
pub const DEFAULT_STORAGE_KEY: &str = "todos";
/// Largest id a saved record may carry (the browser stores ids as JS numbers)
pub const MAX_TASK_ID: u64 = (1 << 53) - 1;

/// Directory name used under the platform config and data directories
pub const APP_DIR_NAME: &str = "itask";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "itask.toml";
pub const DATABASE_FILE_NAME: &str = "itask.db";
pub const LOG_FILE_NAME: &str = "itask.log";

// UI Text
pub const INPUT_PLACEHOLDER: &str = "What needs to be done?";
pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Add one above! 🎉";
pub const ALL_FINISHED_HIDDEN_MESSAGE: &str = "All remaining tasks are finished and hidden (press f to show)";
pub const SHOW_FINISHED_LABEL: &str = "Show Finished Tasks";
pub const NO_DEADLINE_LABEL: &str = "No deadline";
pub const CONFIRM_DELETE_TITLE: &str = "Confirm Delete";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this task?";
pub const CONFIRM_DELETE_ALL_TITLE: &str = "Confirm Delete All";
pub const CONFIRM_DELETE_ALL_MESSAGE: &str = "Are you sure you want to delete all tasks?";
pub const DEADLINE_DIALOG_TITLE: &str = "Set Deadline";

// Status Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// Timing
/// Event loop tick; the header clock is refreshed from it
pub const TICK_INTERVAL_MS: u64 = 100;

// UI Layout Constants
/// Height of the header (app name + clock)
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the add-task form
pub const FORM_HEIGHT: u16 = 3;
/// Height of the footer (remaining badge + delete-all hint)
pub const FOOTER_HEIGHT: u16 = 1;
/// Width of the deadline dialog in columns
pub const DEADLINE_DIALOG_WIDTH: u16 = 72;
/// Height of the deadline dialog in lines
pub const DEADLINE_DIALOG_HEIGHT: u16 = 20;

/// Key hints shown at the right of the footer
pub const FOOTER_HINTS: &str = "a Add • f Filter • ? Help • q Quit";
