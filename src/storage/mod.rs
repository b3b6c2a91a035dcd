//! Durable key-value storage.
//!
//! Tasks are kept as a single serialized snapshot under a fixed key, so the
//! storage layer only needs string values addressed by string keys:
//! - [`LocalStorage`] - SQLite database through SeaORM
//! - [`MemoryStorage`] - in-process map for tests and ephemeral runs

use async_trait::async_trait;

pub mod db;
pub mod memory;

pub use db::LocalStorage;
pub use memory::MemoryStorage;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// String-keyed durable storage.
///
/// Writes complete before the returned future resolves; there is no
/// batching or queueing behind this interface.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
