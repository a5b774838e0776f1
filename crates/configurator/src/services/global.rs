//! Global toggles loader.

use domain::models::global::GLOBAL_CONFIGURATION_NAME;
use domain::models::{parse_partial, GlobalConfiguration};
use domain::store::SettingsStore;
use tracing::info;

use super::settings::load_document;
use crate::error::ConfiguratorError;

/// Load the startup toggles, creating the all-disabled default on first run.
pub async fn load_global_configuration(
    store: &dyn SettingsStore,
) -> Result<GlobalConfiguration, ConfiguratorError> {
    let defaults = GlobalConfiguration::default();
    let content =
        load_document(store, GLOBAL_CONFIGURATION_NAME, "Global Settings", &defaults).await?;

    let stored = parse_partial(content).map_err(|source| ConfiguratorError::InvalidSettings {
        name: GLOBAL_CONFIGURATION_NAME,
        source,
    })?;
    let configuration = GlobalConfiguration::merge(&defaults, stored);

    info!(
        news_enabled = configuration.news.enabled,
        tunables_enabled = configuration.tunables.enabled,
        "Global settings loaded"
    );

    Ok(configuration)
}
