//! Default-and-read step shared by every configurator.

use domain::store::SettingsStore;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::ConfiguratorError;

/// Ensure a document exists under `name`, then read it back.
///
/// `default` is written only when nothing is stored yet; an operator's
/// document is never replaced. The returned value is whatever is stored,
/// which may be partial.
pub async fn load_document<T: Serialize>(
    store: &dyn SettingsStore,
    name: &'static str,
    label: &str,
    default: &T,
) -> Result<Option<Value>, ConfiguratorError> {
    info!("Loading {}...", label);

    let default_value = serde_json::to_value(default)
        .map_err(|source| ConfiguratorError::Serialize { name, source })?;

    if store.create_default(name, &default_value).await? {
        info!(name, "Created default {}", label);
    }

    Ok(store.read(name).await?)
}
