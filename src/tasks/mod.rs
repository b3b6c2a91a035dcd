//! Task model and the write-through task store.

pub mod model;
pub mod store;

pub use model::{EditDraft, Task, TaskId};
pub use store::{StoreError, TaskStore};
