use crate::tasks::{EditDraft, TaskId};
use chrono::{DateTime, Local};

/// Destructive operation waiting for the user's confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteTask(TaskId),
    DeleteAll,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    FocusForm,
    FocusList,

    // Task operations
    AddTask {
        text: String,
        deadline: Option<DateTime<Local>>,
    },
    ToggleTask(TaskId),
    EditTask(TaskId),
    CancelEdit(EditDraft),
    DeleteTask(TaskId),
    DeleteAll,
    ToggleShowFinished,

    // Deadline picker
    OpenDeadlinePicker(Option<DateTime<Local>>),
    DeadlineConfirmed(DateTime<Local>),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Confirm(PendingAction),
    DeadlinePicker { initial: Option<DateTime<Local>> },
    Help,
    Logs,
}
