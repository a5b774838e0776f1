//! Tunables configurator.
//!
//! Writes each gameplay tunable onto its pre-existing `stats_global` row.

use domain::models::tunables::TUNABLES_CONFIGURATION_NAME;
use domain::models::{parse_partial, TunablesConfiguration};
use domain::services::project_tunables;
use domain::store::{SettingsStore, StatsStore};
use tracing::{debug, info};

use super::settings::load_document;
use crate::error::ConfiguratorError;

/// Load the tunables document merged over the defaults.
pub async fn read_tunables_configuration(
    store: &dyn SettingsStore,
) -> Result<TunablesConfiguration, ConfiguratorError> {
    let defaults = TunablesConfiguration::default();
    let content = load_document(
        store,
        TUNABLES_CONFIGURATION_NAME,
        "Tunables Configuration",
        &defaults,
    )
    .await?;

    let stored = parse_partial(content).map_err(|source| ConfiguratorError::InvalidSettings {
        name: TUNABLES_CONFIGURATION_NAME,
        source,
    })?;

    Ok(TunablesConfiguration::merge(&defaults, stored))
}

/// Update every tunable key in `stats_global`. Returns the number of updates.
pub async fn configure_tunables(
    settings: &dyn SettingsStore,
    stats: &dyn StatsStore,
) -> Result<usize, ConfiguratorError> {
    info!("Configuring Tunables");
    let configuration = read_tunables_configuration(settings).await?;
    let updates = project_tunables(&configuration);

    for update in &updates {
        stats.update_value(update.key, update.value).await?;
        debug!(key = update.key, value = update.value, "Tunable updated");
    }

    info!(updated = updates.len(), "Tunables configured");
    Ok(updates.len())
}
