//! Integration tests for the startup configurators.
//!
//! These run the full load → merge → project pipeline against in-memory
//! stores, and against the file-backed settings store in a scratch directory.

mod common;

use common::{
    news_item, news_store_with_previous_rows, seeded_stats_store, settings_with_toggles,
    temp_settings_dir, FailingNewsStore,
};
use configurator::error::ConfiguratorError;
use configurator::services::{self, configure_news, configure_tunables, NewsSummary};
use domain::models::{GlobalConfiguration, NewsConfiguration, TunablesConfiguration};
use domain::services::tunables_projection::{
    MATCH_XP_MULTIPLIER_KEY, MAX_CREW_MEMBERS_KEY, MAX_FRIENDS_KEY,
};
use domain::services::TUNABLE_KEYS;
use domain::store::{
    InMemoryNewsStore, InMemorySettingsStore, InMemoryStatsStore, NewsStoreCall, SettingsStore,
    StoreError,
};
use persistence::FileSettingsStore;
use serde_json::json;

#[tokio::test]
async fn test_first_run_creates_global_defaults_and_skips_everything() {
    let settings = InMemorySettingsStore::new();
    let news = InMemoryNewsStore::new();
    let stats = seeded_stats_store();

    let report = services::run(&settings, &news, &stats).await.unwrap();

    assert_eq!(report.global, GlobalConfiguration::default());
    assert_eq!(report.news, None);
    assert_eq!(report.tunables_updated, None);
    assert_eq!(
        settings.get("settings"),
        Some(serde_json::to_value(GlobalConfiguration::default()).unwrap())
    );
    // Disabled configurators never touch their documents or tables.
    assert_eq!(settings.get("news"), None);
    assert_eq!(settings.get("tunables"), None);
    assert!(news.calls().is_empty());
    assert!(stats.updates().is_empty());
}

#[tokio::test]
async fn test_news_enabled_writes_default_news_on_first_run() {
    let settings = settings_with_toggles(true, false);
    let news = InMemoryNewsStore::new();
    let stats = seeded_stats_store();

    let report = services::run(&settings, &news, &stats).await.unwrap();

    assert_eq!(
        report.news,
        Some(NewsSummary {
            entries: 2,
            items: 2,
            texts: 3,
        })
    );
    assert_eq!(
        settings.get("news"),
        Some(serde_json::to_value(NewsConfiguration::default()).unwrap())
    );
    assert_eq!(news.news().len(), 2);
    assert_eq!(news.texts()[2].language, "de");
    assert!(stats.updates().is_empty());
}

#[tokio::test]
async fn test_news_replaces_previous_rows() {
    let settings = settings_with_toggles(true, false);
    settings.insert(
        "news",
        json!({
            "news": [
                {
                    "startAt": 10,
                    "endAt": 20,
                    "items": { "slot1": news_item(0, 1), "slot2": news_item(1, 2) }
                },
                { "items": {} }
            ]
        }),
    );
    let news = news_store_with_previous_rows();

    let summary = configure_news(&settings, &news).await.unwrap();

    assert_eq!(
        summary,
        NewsSummary {
            entries: 2,
            items: 2,
            texts: 2,
        }
    );
    assert_eq!(
        news.calls(),
        vec![
            NewsStoreCall::DeleteAll,
            NewsStoreCall::CreateNews(2),
            NewsStoreCall::CreateNewsItems(2),
            NewsStoreCall::CreateNewsItemTexts(2),
        ]
    );
    assert!(news.texts().iter().all(|text| text.title != "Old"));
    assert!(news.items().iter().all(|item| item.news_name == "0"));
    assert_eq!(news.news()[0].start_at, Some(10));
    assert_eq!(news.news()[1].start_at, None);
}

#[tokio::test]
async fn test_invalid_news_clears_all_news() {
    let settings = settings_with_toggles(true, false);
    settings.insert("news", json!({ "news": "not a list" }));
    let news = news_store_with_previous_rows();

    let summary = configure_news(&settings, &news).await.unwrap();

    assert_eq!(summary, NewsSummary::default());
    assert_eq!(
        news.calls(),
        vec![
            NewsStoreCall::DeleteAll,
            NewsStoreCall::CreateNews(0),
            NewsStoreCall::CreateNewsItems(0),
            NewsStoreCall::CreateNewsItemTexts(0),
        ]
    );
    assert!(news.news().is_empty());
    assert!(news.items().is_empty());
    assert!(news.texts().is_empty());
    // The operator's document is left as-is for them to fix.
    assert_eq!(settings.get("news"), Some(json!({ "news": "not a list" })));
}

#[tokio::test]
async fn test_news_rows_follow_slot_encounter_order() {
    let settings = settings_with_toggles(true, false);
    settings.insert(
        "news",
        json!({
            "news": [{
                "items": {
                    "slot3": news_item(2, 30),
                    "slot1": {
                        "localization": {
                            "en": { "title": "Hello", "message": "World" },
                            "ja": { "title": "こんにちは", "message": "世界" }
                        },
                        "priority": 1,
                        "imageIndex": 10
                    }
                }
            }]
        }),
    );
    let news = InMemoryNewsStore::new();

    configure_news(&settings, &news).await.unwrap();

    let items = news.items();
    assert_eq!(items[0].name, "0");
    assert!(items[0].slot_2 && !items[0].slot_0 && !items[0].slot_1);
    assert_eq!(items[1].name, "1");
    assert!(items[1].slot_0 && !items[1].slot_1 && !items[1].slot_2);

    let texts = news.texts();
    let languages: Vec<(&str, &str)> = texts
        .iter()
        .map(|text| (text.item_name.as_str(), text.language.as_str()))
        .collect();
    assert_eq!(languages, vec![("0", "en"), ("1", "en"), ("1", "ja")]);
}

#[tokio::test]
async fn test_tunables_partial_override() {
    let settings = settings_with_toggles(false, true);
    settings.insert(
        "tunables",
        json!({
            "social": { "max_members_per_crew": 50 },
            "matchmaking": { "match_xp_multiplier": 1.25 }
        }),
    );
    let news = InMemoryNewsStore::new();
    let stats = seeded_stats_store();

    let report = services::run(&settings, &news, &stats).await.unwrap();

    assert_eq!(report.tunables_updated, Some(9));
    let keys: Vec<String> = stats.updates().into_iter().map(|(key, _)| key).collect();
    assert_eq!(keys, TUNABLE_KEYS.to_vec());
    assert_eq!(stats.value(MAX_CREW_MEMBERS_KEY), Some(50.0));
    assert_eq!(stats.value(MATCH_XP_MULTIPLIER_KEY), Some(1.25));
    assert_eq!(stats.value(MAX_FRIENDS_KEY), Some(2000.0));
    assert!(news.calls().is_empty());
}

#[tokio::test]
async fn test_tunables_first_run_writes_defaults() {
    let settings = InMemorySettingsStore::new();
    let stats = seeded_stats_store();

    let updated = configure_tunables(&settings, &stats).await.unwrap();

    assert_eq!(updated, 9);
    assert_eq!(
        settings.get("tunables"),
        Some(serde_json::to_value(TunablesConfiguration::default()).unwrap())
    );
    assert_eq!(stats.value(MAX_CREW_MEMBERS_KEY), Some(32.0));
}

#[tokio::test]
async fn test_tunables_missing_key_aborts() {
    let settings = InMemorySettingsStore::new();
    let stats = InMemoryStatsStore::with_keys(TUNABLE_KEYS.iter().copied().take(3));

    let err = configure_tunables(&settings, &stats).await.unwrap_err();

    assert!(matches!(
        err,
        ConfiguratorError::Store(StoreError::MissingKey(ref key)) if key == TUNABLE_KEYS[3]
    ));
    assert_eq!(stats.updates().len(), 3);
}

#[tokio::test]
async fn test_malformed_tunables_abort() {
    let settings = InMemorySettingsStore::with_document(
        "tunables",
        json!({ "inactivity": { "solo_inactivity_seconds": "ten minutes" } }),
    );
    let stats = seeded_stats_store();

    let err = configure_tunables(&settings, &stats).await.unwrap_err();

    assert!(matches!(
        err,
        ConfiguratorError::InvalidSettings { name: "tunables", .. }
    ));
    assert!(stats.updates().is_empty());
}

#[tokio::test]
async fn test_malformed_global_settings_abort() {
    let settings = InMemorySettingsStore::with_document("settings", json!({ "news": true }));
    let news = InMemoryNewsStore::new();
    let stats = seeded_stats_store();

    let err = services::run(&settings, &news, &stats).await.unwrap_err();

    assert!(matches!(
        err,
        ConfiguratorError::InvalidSettings { name: "settings", .. }
    ));
    assert!(news.calls().is_empty());
}

#[tokio::test]
async fn test_news_failure_stops_before_tunables() {
    let settings = settings_with_toggles(true, true);
    let stats = seeded_stats_store();

    let result = services::run(&settings, &FailingNewsStore, &stats).await;

    assert!(matches!(result, Err(ConfiguratorError::Store(_))));
    assert!(stats.updates().is_empty());
    assert_eq!(settings.get("tunables"), None);
}

#[tokio::test]
async fn test_file_backed_settings_end_to_end() {
    let directory = temp_settings_dir();
    let settings = FileSettingsStore::new(&directory);
    let news = InMemoryNewsStore::new();
    let stats = seeded_stats_store();

    // First boot writes the all-disabled defaults and does nothing else.
    let first = services::run(&settings, &news, &stats).await.unwrap();
    assert_eq!(first.news, None);
    assert!(settings.path_for("settings").exists());

    // The operator enables both configurators and lowers the crew size.
    std::fs::write(
        settings.path_for("settings"),
        r#"{ "news": { "enabled": true }, "tunables": { "enabled": true } }"#,
    )
    .unwrap();
    std::fs::write(
        settings.path_for("tunables"),
        r#"{ "social": { "max_members_per_crew": 16 } }"#,
    )
    .unwrap();

    let second = services::run(&settings, &news, &stats).await.unwrap();

    assert_eq!(second.news.map(|summary| summary.entries), Some(2));
    assert_eq!(second.tunables_updated, Some(9));
    assert_eq!(stats.value(MAX_CREW_MEMBERS_KEY), Some(16.0));
    assert!(settings.path_for("news").exists());
    // The operator's partial tunables document is never rewritten.
    assert_eq!(
        settings.read("tunables").await.unwrap(),
        Some(json!({ "social": { "max_members_per_crew": 16 } }))
    );

    std::fs::remove_dir_all(&directory).unwrap();
}
