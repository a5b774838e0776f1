//! Common test utilities for integration tests.
//!
//! Helpers build stores in known states so each test can focus on one
//! configurator behavior.

#![allow(dead_code)]

use std::path::PathBuf;

use domain::models::{NewsItemRow, NewsItemTextRow, NewsRow};
use domain::services::TUNABLE_KEYS;
use domain::store::{
    InMemoryNewsStore, InMemorySettingsStore, InMemoryStatsStore, NewsStore, StoreError,
};
use serde_json::{json, Value};

/// Settings store with the global toggles set as given.
pub fn settings_with_toggles(news: bool, tunables: bool) -> InMemorySettingsStore {
    InMemorySettingsStore::with_document(
        "settings",
        json!({ "news": { "enabled": news }, "tunables": { "enabled": tunables } }),
    )
}

/// `stats_global` seeded with every tunable key.
pub fn seeded_stats_store() -> InMemoryStatsStore {
    InMemoryStatsStore::with_keys(TUNABLE_KEYS)
}

/// News tables holding one entry, item and text from an earlier run.
pub fn news_store_with_previous_rows() -> InMemoryNewsStore {
    InMemoryNewsStore::with_rows(
        vec![NewsRow {
            name: "0".to_string(),
            start_at: Some(1),
            end_at: Some(2),
        }],
        vec![NewsItemRow {
            news_name: "0".to_string(),
            name: "0".to_string(),
            priority: 0,
            slot_0: true,
            slot_1: false,
            slot_2: false,
            platforms: None,
            image_index: 4,
        }],
        vec![NewsItemTextRow {
            news_name: "0".to_string(),
            item_name: "0".to_string(),
            title: "Old".to_string(),
            message: "Old news".to_string(),
            language: "en".to_string(),
        }],
    )
}

/// A news item document with one English text.
pub fn news_item(priority: i32, image_index: i32) -> Value {
    json!({
        "localization": { "en": { "title": "Title", "message": "Message" } },
        "priority": priority,
        "imageIndex": image_index
    })
}

/// Unique scratch directory under the system temp dir.
pub fn temp_settings_dir() -> PathBuf {
    std::env::temp_dir().join(format!("configurator-test-{}", uuid::Uuid::new_v4()))
}

/// News store whose every call fails.
pub struct FailingNewsStore;

fn unavailable() -> StoreError {
    StoreError::Io {
        name: "news".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::Other, "database unavailable"),
    }
}

#[async_trait::async_trait]
impl NewsStore for FailingNewsStore {
    async fn delete_all_news(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn create_news(&self, _rows: &[NewsRow]) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    async fn create_news_items(&self, _rows: &[NewsItemRow]) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    async fn create_news_item_texts(&self, _rows: &[NewsItemTextRow]) -> Result<u64, StoreError> {
        Err(unavailable())
    }
}
