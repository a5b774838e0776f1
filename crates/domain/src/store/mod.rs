//! Storage seams used by the configurators.
//!
//! The settings store holds operator-editable documents; the news and stats
//! stores are the relational tables other server subsystems read at runtime.

pub mod memory;

pub use memory::{InMemoryNewsStore, InMemorySettingsStore, InMemoryStatsStore, NewsStoreCall};

use serde_json::Value;

use crate::models::{NewsItemRow, NewsItemTextRow, NewsRow};

/// Error types for storage collaborators.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to access settings '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings '{name}' is not valid JSON: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No stats_global row for key '{0}'")]
    MissingKey(String),
}

/// Named settings documents.
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    /// Store `value` under `name` unless a document already exists.
    ///
    /// Returns `true` if the document was created by this call.
    async fn create_default(&self, name: &str, value: &Value) -> Result<bool, StoreError>;

    /// Read the document stored under `name`, if any.
    async fn read(&self, name: &str) -> Result<Option<Value>, StoreError>;
}

/// The `news`, `news_items` and `news_item_text` tables.
#[async_trait::async_trait]
pub trait NewsStore: Send + Sync {
    /// Delete every row of the three news tables.
    async fn delete_all_news(&self) -> Result<(), StoreError>;

    /// Insert `news` rows. Returns the number of rows written.
    async fn create_news(&self, rows: &[NewsRow]) -> Result<u64, StoreError>;

    async fn create_news_items(&self, rows: &[NewsItemRow]) -> Result<u64, StoreError>;

    async fn create_news_item_texts(&self, rows: &[NewsItemTextRow]) -> Result<u64, StoreError>;
}

/// The `stats_global` key/value table.
#[async_trait::async_trait]
pub trait StatsStore: Send + Sync {
    /// Set the value of an existing key.
    ///
    /// Fails with [`StoreError::MissingKey`] when no row has `key`.
    async fn update_value(&self, key: &str, value: f64) -> Result<(), StoreError>;
}
