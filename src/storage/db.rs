use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    Schema,
};

use super::{KeyValueStore, StorageError};
use crate::entities::storage_entry;

/// SQLite-backed key-value storage
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (creating if needed) the database file at `path`
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let database_url = format!("sqlite://{}?mode=rwc", path.display());
        Self::connect(&database_url)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))
    }

    /// Open a private in-memory database
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    async fn connect(database_url: &str) -> Result<Self> {
        // A single connection keeps writes ordered and an in-memory database alive.
        let mut options = ConnectOptions::new(database_url.to_string());
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let storage = LocalStorage { conn };
        storage.init_schema().await?;

        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut create_entries = schema.create_table_from_entity(storage_entry::Entity);
        create_entries.if_not_exists();
        self.conn.execute(backend.build(&create_entries)).await?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entry = storage_entry::Entity::find_by_id(key.to_string()).one(&self.conn).await?;
        Ok(entry.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let entry = storage_entry::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        };

        storage_entry::Entity::insert(entry)
            .on_conflict(
                OnConflict::column(storage_entry::Column::Key)
                    .update_column(storage_entry::Column::Value)
                    .to_owned(),
            )
            .exec(&self.conn)
            .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        storage_entry::Entity::delete_by_id(key.to_string()).exec(&self.conn).await?;
        Ok(())
    }
}
