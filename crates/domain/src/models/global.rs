//! Global feature toggles deciding which configurators run at startup.

use serde::{Deserialize, Serialize};

/// Settings store name of the global toggles document.
pub const GLOBAL_CONFIGURATION_NAME: &str = "settings";

/// Top-level startup toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfiguration {
    pub news: ToggleSettings,
    pub tunables: ToggleSettings,
}

/// A single on/off switch for one configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSettings {
    pub enabled: bool,
}

/// Operator document as stored; any group or field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialGlobalConfiguration {
    pub news: Option<PartialToggleSettings>,
    pub tunables: Option<PartialToggleSettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialToggleSettings {
    pub enabled: Option<bool>,
}

impl Default for GlobalConfiguration {
    fn default() -> Self {
        Self {
            news: ToggleSettings { enabled: false },
            tunables: ToggleSettings { enabled: false },
        }
    }
}

impl GlobalConfiguration {
    /// Merge a stored document over `defaults`, group by group.
    ///
    /// Every field missing from a stored group falls back to the default
    /// group's field; a missing group takes the whole default group.
    pub fn merge(defaults: &Self, stored: PartialGlobalConfiguration) -> Self {
        Self {
            news: defaults.news.overridden_by(stored.news.unwrap_or_default()),
            tunables: defaults
                .tunables
                .overridden_by(stored.tunables.unwrap_or_default()),
        }
    }
}

impl ToggleSettings {
    fn overridden_by(&self, stored: PartialToggleSettings) -> Self {
        Self {
            enabled: stored.enabled.unwrap_or(self.enabled),
        }
    }
}
