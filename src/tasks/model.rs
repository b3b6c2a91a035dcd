use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::utils::datetime;

/// Task identifier: milliseconds since the Unix epoch at creation, kept
/// strictly increasing by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do item.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub is_completed: bool,
    pub deadline: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(id: TaskId, text: String, deadline: Option<DateTime<Local>>) -> Self {
        Self {
            id,
            text,
            is_completed: false,
            deadline,
        }
    }
}

/// A task taken out of the list for editing.
///
/// `text` and `deadline` prefill the add form; `original` and `position`
/// allow the task to be put back untouched if the edit is abandoned.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub text: String,
    pub deadline: Option<DateTime<Local>>,
    pub original: Task,
    pub position: usize,
}

/// Persisted shape of a task: `{id, todo, isCompleted, deadline?}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskRecord {
    pub id: u64,
    pub todo: String,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            todo: task.text.clone(),
            is_completed: task.is_completed,
            deadline: task.deadline.as_ref().map(datetime::to_iso_string),
        }
    }
}
