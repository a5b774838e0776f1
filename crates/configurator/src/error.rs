use domain::store::StoreError;
use thiserror::Error;

/// Errors that abort a configurator run.
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Settings '{name}' do not match the expected shape: {source}")]
    InvalidSettings {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize default settings '{name}': {source}")]
    Serialize {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
