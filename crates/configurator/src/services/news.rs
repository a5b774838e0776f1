//! News configurator.
//!
//! Replaces the content of the `news`, `news_items` and `news_item_text`
//! tables with the operator's news document. Defaults are only written on
//! first run; a stored document that fails the structural check clears all
//! news instead of falling back to the defaults.

use domain::models::news::NEWS_CONFIGURATION_NAME;
use domain::models::NewsConfiguration;
use domain::services::project_news;
use domain::store::{NewsStore, SettingsStore};
use tracing::{info, warn};

use super::settings::load_document;
use crate::error::ConfiguratorError;

/// Row counts written by one news run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewsSummary {
    pub entries: u64,
    pub items: u64,
    pub texts: u64,
}

/// Load the news document, or an empty configuration if it is not valid.
pub async fn read_news_configuration(
    store: &dyn SettingsStore,
) -> Result<NewsConfiguration, ConfiguratorError> {
    let content = load_document(
        store,
        NEWS_CONFIGURATION_NAME,
        "News Configuration",
        &NewsConfiguration::default(),
    )
    .await?;

    match NewsConfiguration::from_stored(content) {
        Ok(configuration) => Ok(configuration),
        Err(e) => {
            warn!(error = %e, "News Configuration not valid. Falling back to empty news.");
            Ok(NewsConfiguration::empty())
        }
    }
}

/// Rebuild all news tables from the stored news document.
pub async fn configure_news(
    settings: &dyn SettingsStore,
    news: &dyn NewsStore,
) -> Result<NewsSummary, ConfiguratorError> {
    info!("Configuring News");
    let configuration = read_news_configuration(settings).await?;
    let rows = project_news(&configuration);

    info!("Deleting old news...");
    news.delete_all_news().await?;

    info!("Creating news...");
    let summary = NewsSummary {
        entries: news.create_news(&rows.news).await?,
        items: news.create_news_items(&rows.items).await?,
        texts: news.create_news_item_texts(&rows.texts).await?,
    };

    info!(
        entries = summary.entries,
        items = summary.items,
        texts = summary.texts,
        "News configured"
    );

    Ok(summary)
}
