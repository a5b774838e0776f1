//! In-memory stores for development and testing.
//!
//! These keep table contents in process and record every call, so the
//! configurators can be exercised without a database or settings directory.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use super::{NewsStore, SettingsStore, StatsStore, StoreError};
use crate::models::{NewsItemRow, NewsItemTextRow, NewsRow};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Settings documents held in a map.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    documents: Mutex<HashMap<String, Value>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `value` under `name`.
    pub fn with_document(name: &str, value: Value) -> Self {
        let store = Self::new();
        store.insert(name, value);
        store
    }

    /// Replace the document under `name`, as an operator edit would.
    pub fn insert(&self, name: &str, value: Value) {
        lock(&self.documents).insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        lock(&self.documents).get(name).cloned()
    }
}

#[async_trait::async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn create_default(&self, name: &str, value: &Value) -> Result<bool, StoreError> {
        let mut documents = lock(&self.documents);
        if documents.contains_key(name) {
            return Ok(false);
        }
        documents.insert(name.to_string(), value.clone());
        Ok(true)
    }

    async fn read(&self, name: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.get(name))
    }
}

/// A call made against [`InMemoryNewsStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsStoreCall {
    DeleteAll,
    CreateNews(usize),
    CreateNewsItems(usize),
    CreateNewsItemTexts(usize),
}

#[derive(Debug, Default)]
struct NewsTables {
    news: Vec<NewsRow>,
    items: Vec<NewsItemRow>,
    texts: Vec<NewsItemTextRow>,
    calls: Vec<NewsStoreCall>,
}

/// The three news tables held in memory.
#[derive(Debug, Default)]
pub struct InMemoryNewsStore {
    tables: Mutex<NewsTables>,
}

impl InMemoryNewsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose tables already hold rows from an earlier run.
    pub fn with_rows(
        news: Vec<NewsRow>,
        items: Vec<NewsItemRow>,
        texts: Vec<NewsItemTextRow>,
    ) -> Self {
        Self {
            tables: Mutex::new(NewsTables {
                news,
                items,
                texts,
                calls: Vec::new(),
            }),
        }
    }

    pub fn calls(&self) -> Vec<NewsStoreCall> {
        lock(&self.tables).calls.clone()
    }

    pub fn news(&self) -> Vec<NewsRow> {
        lock(&self.tables).news.clone()
    }

    pub fn items(&self) -> Vec<NewsItemRow> {
        lock(&self.tables).items.clone()
    }

    pub fn texts(&self) -> Vec<NewsItemTextRow> {
        lock(&self.tables).texts.clone()
    }
}

#[async_trait::async_trait]
impl NewsStore for InMemoryNewsStore {
    async fn delete_all_news(&self) -> Result<(), StoreError> {
        let mut tables = lock(&self.tables);
        tables.news.clear();
        tables.items.clear();
        tables.texts.clear();
        tables.calls.push(NewsStoreCall::DeleteAll);
        Ok(())
    }

    async fn create_news(&self, rows: &[NewsRow]) -> Result<u64, StoreError> {
        let mut tables = lock(&self.tables);
        tables.news.extend_from_slice(rows);
        tables.calls.push(NewsStoreCall::CreateNews(rows.len()));
        Ok(rows.len() as u64)
    }

    async fn create_news_items(&self, rows: &[NewsItemRow]) -> Result<u64, StoreError> {
        let mut tables = lock(&self.tables);
        tables.items.extend_from_slice(rows);
        tables.calls.push(NewsStoreCall::CreateNewsItems(rows.len()));
        Ok(rows.len() as u64)
    }

    async fn create_news_item_texts(&self, rows: &[NewsItemTextRow]) -> Result<u64, StoreError> {
        let mut tables = lock(&self.tables);
        tables.texts.extend_from_slice(rows);
        tables
            .calls
            .push(NewsStoreCall::CreateNewsItemTexts(rows.len()));
        Ok(rows.len() as u64)
    }
}

/// The `stats_global` table held in memory.
///
/// Only keys seeded at construction can be updated, mirroring a table whose
/// rows are created by earlier system setup.
#[derive(Debug, Default)]
pub struct InMemoryStatsStore {
    values: Mutex<HashMap<String, f64>>,
    updates: Mutex<Vec<(String, f64)>>,
}

impl InMemoryStatsStore {
    /// Create a table holding `keys`, each with value 0.
    pub fn with_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let values = keys.into_iter().map(|key| (key.to_string(), 0.0)).collect();
        Self {
            values: Mutex::new(values),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        lock(&self.values).get(key).copied()
    }

    /// Successful updates in call order.
    pub fn updates(&self) -> Vec<(String, f64)> {
        lock(&self.updates).clone()
    }
}

#[async_trait::async_trait]
impl StatsStore for InMemoryStatsStore {
    async fn update_value(&self, key: &str, value: f64) -> Result<(), StoreError> {
        match lock(&self.values).get_mut(key) {
            Some(stored) => *stored = value,
            None => return Err(StoreError::MissingKey(key.to_string())),
        }
        lock(&self.updates).push((key.to_string(), value));
        Ok(())
    }
}
