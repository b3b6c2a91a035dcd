//! In-memory task collection with write-through persistence.
//!
//! The whole collection is stored as one JSON array under a single key.
//! Every mutating operation writes the snapshot before returning; storage
//! failures are logged and otherwise ignored, and a malformed snapshot at
//! startup yields an empty list.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use log::{info, warn};

use super::model::{EditDraft, Task, TaskId, TaskRecord};
use crate::constants::MAX_TASK_ID;
use crate::storage::{KeyValueStore, StorageError};
use crate::utils::datetime;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Corrupt task record: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Invalid deadline '{value}' on task {id}")]
    InvalidDeadline { id: u64, value: String },

    #[error("Duplicate task id {0}")]
    DuplicateId(u64),

    #[error("Task id {0} is out of range")]
    IdOutOfRange(u64),
}

/// Ordered task collection synchronized to a [`KeyValueStore`].
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Arc<dyn KeyValueStore>,
    storage_key: String,
    last_id: u64,
}

impl TaskStore {
    /// Empty store that has not read anything from storage
    pub fn new(storage: Arc<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        Self {
            tasks: Vec::new(),
            storage,
            storage_key: storage_key.into(),
            last_id: 0,
        }
    }

    /// Load the persisted snapshot.
    ///
    /// A missing record, an unreadable store or a malformed payload all
    /// produce an empty collection. Nothing is written back.
    pub async fn hydrate(storage: Arc<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, storage_key);

        let payload = match store.storage.get(&store.storage_key).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to read saved tasks, starting empty: {}", e);
                None
            }
        };

        if let Some(payload) = payload {
            match Self::decode(&payload) {
                Ok(tasks) => {
                    info!("Hydrated {} tasks", tasks.len());
                    store.last_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
                    store.tasks = tasks;
                }
                Err(e) => warn!("Saved tasks are malformed, starting empty: {}", e),
            }
        }

        store
    }

    /// Serialize the current collection to storage
    pub async fn persist(&self) -> Result<(), StoreError> {
        let payload = Self::encode(&self.tasks)?;
        self.storage.set(&self.storage_key, &payload).await?;
        Ok(())
    }

    async fn write_through(&self) {
        if let Err(e) = self.persist().await {
            warn!("Failed to persist tasks: {}", e);
        }
    }

    /// Add a task. Blank text is ignored.
    ///
    /// Returns the new id, or `None` when nothing was added.
    pub async fn add(&mut self, text: &str, deadline: Option<DateTime<Local>>) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.next_id();
        let has_deadline = deadline.is_some();
        self.tasks.push(Task::new(id, text.to_string(), deadline));
        if has_deadline {
            sort_by_deadline(&mut self.tasks);
        }

        self.write_through().await;
        Some(id)
    }

    /// Flip the completion flag. Returns `false` if the id is unknown.
    pub async fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.is_completed = !task.is_completed;

        self.write_through().await;
        true
    }

    /// Delete one task, returning it
    pub async fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        let task = self.tasks.remove(index);

        self.write_through().await;
        Some(task)
    }

    /// Delete every task, returning how many were removed
    pub async fn remove_all(&mut self) -> usize {
        let removed = self.tasks.len();
        if removed == 0 {
            return 0;
        }
        self.tasks.clear();

        self.write_through().await;
        removed
    }

    /// Take a task out of the list and hand back its values for re-entry.
    pub async fn begin_edit(&mut self, id: TaskId) -> Option<EditDraft> {
        let position = self.position(id)?;
        let original = self.tasks.remove(position);

        self.write_through().await;
        Some(EditDraft {
            text: original.text.clone(),
            deadline: original.deadline,
            original,
            position,
        })
    }

    /// Put back a task taken out by [`begin_edit`](Self::begin_edit).
    ///
    /// Returns `false` if a task with the same id exists again.
    pub async fn restore(&mut self, draft: EditDraft) -> bool {
        if self.position(draft.original.id).is_some() {
            return false;
        }

        let has_deadline = draft.original.deadline.is_some();
        let index = draft.position.min(self.tasks.len());
        self.tasks.insert(index, draft.original);
        if has_deadline {
            sort_by_deadline(&mut self.tasks);
        }

        self.write_through().await;
        true
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks not yet completed
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_completed).count()
    }

    /// Tasks to show, hiding completed ones unless `show_finished`
    pub fn visible(&self, show_finished: bool) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| show_finished || !t.is_completed)
            .collect()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Encode tasks as the persisted JSON array
    pub fn encode(tasks: &[Task]) -> Result<String, StoreError> {
        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        Ok(serde_json::to_string(&records)?)
    }

    /// Decode the persisted JSON array
    pub fn decode(payload: &str) -> Result<Vec<Task>, StoreError> {
        let records: Vec<TaskRecord> = serde_json::from_str(payload)?;
        let mut seen = HashSet::new();
        let mut tasks = Vec::with_capacity(records.len());

        for record in records {
            if record.id > MAX_TASK_ID {
                return Err(StoreError::IdOutOfRange(record.id));
            }
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }

            let deadline = match record.deadline {
                Some(value) => Some(
                    datetime::parse_iso(&value).map_err(|_| StoreError::InvalidDeadline { id: record.id, value })?,
                ),
                None => None,
            };

            tasks.push(Task {
                id: TaskId(record.id),
                text: record.todo,
                is_completed: record.is_completed,
                deadline,
            });
        }

        Ok(tasks)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn next_id(&mut self) -> TaskId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last_id.saturating_add(1));
        if id <= MAX_TASK_ID {
            self.last_id = id;
            return TaskId(id);
        }

        // Counter past MAX_TASK_ID: reuse the lowest free id
        let taken: HashSet<u64> = self.tasks.iter().map(|t| t.id.0).collect();
        TaskId((1..=MAX_TASK_ID).find(|id| !taken.contains(id)).unwrap_or(MAX_TASK_ID))
    }
}

/// Stable ascending sort of the tasks that carry a deadline.
///
/// Only the slots already holding deadline tasks are rewritten, so tasks
/// without a deadline never move.
fn sort_by_deadline(tasks: &mut [Task]) {
    let slots: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.deadline.is_some())
        .map(|(i, _)| i)
        .collect();

    let mut dated: Vec<Task> = slots.iter().map(|&i| tasks[i].clone()).collect();
    dated.sort_by_key(|t| t.deadline);

    for (slot, task) in slots.into_iter().zip(dated) {
        tasks[slot] = task;
    }
}
