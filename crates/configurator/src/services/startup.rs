//! Startup orchestration.

use domain::models::GlobalConfiguration;
use domain::store::{NewsStore, SettingsStore, StatsStore};
use tracing::{error, info};

use super::{configure_news, configure_tunables, load_global_configuration, NewsSummary};
use crate::error::ConfiguratorError;

/// Outcome of a startup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupReport {
    pub global: GlobalConfiguration,
    /// Present when the news configurator ran.
    pub news: Option<NewsSummary>,
    /// Number of tunables written, when the tunables configurator ran.
    pub tunables_updated: Option<usize>,
}

/// Load the global toggles, then run each enabled configurator in turn.
///
/// News runs before tunables. The first failure aborts the run.
pub async fn run(
    settings: &dyn SettingsStore,
    news_store: &dyn NewsStore,
    stats_store: &dyn StatsStore,
) -> Result<StartupReport, ConfiguratorError> {
    let global = load_global_configuration(settings).await?;

    let news = if global.news.enabled {
        Some(configure_news(settings, news_store).await?)
    } else {
        info!("News disabled, skipping");
        None
    };

    let tunables_updated = if global.tunables.enabled {
        Some(configure_tunables(settings, stats_store).await?)
    } else {
        info!("Tunables disabled, skipping");
        None
    };

    Ok(StartupReport {
        global,
        news,
        tunables_updated,
    })
}

/// Log the outcome of [`run`] once and report whether it succeeded.
///
/// The binary maps the result to its exit status, so a failure is reported
/// here and nowhere else.
pub fn log_outcome(result: &Result<StartupReport, ConfiguratorError>) -> bool {
    match result {
        Ok(report) => {
            info!(
                news_configured = report.news.is_some(),
                tunables_configured = report.tunables_updated.is_some(),
                "Startup configuration complete"
            );
            true
        }
        Err(e) => {
            error!(error = %e, "Startup configuration failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::store::StoreError;

    #[test]
    fn test_log_outcome_success() {
        let report = StartupReport {
            global: GlobalConfiguration::default(),
            news: None,
            tunables_updated: Some(9),
        };
        assert!(log_outcome(&Ok(report)));
    }

    #[test]
    fn test_log_outcome_failure() {
        let result = Err(ConfiguratorError::Store(StoreError::MissingKey(
            "k_backend_tunable_max_friends".to_string(),
        )));
        assert!(!log_outcome(&result));
    }
}
