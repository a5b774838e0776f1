//! Domain models for the game server configurator.

pub mod global;
pub mod news;
pub mod ordered;
pub mod rows;
pub mod tunables;
pub mod whole_number;

pub use global::{GlobalConfiguration, PartialGlobalConfiguration, ToggleSettings};
pub use news::{
    Language, NewsConfiguration, NewsEntry, NewsItem, NewsText, NewsValidationError, Slot,
};
pub use ordered::OrderedMap;
pub use rows::{NewsItemRow, NewsItemTextRow, NewsRow, NewsRows, StatUpdate};
pub use tunables::{
    InactivityTunables, MatchmakingTunables, PartialTunablesConfiguration, SocialTunables,
    TunablesConfiguration,
};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Shape a stored settings document into its partial type.
///
/// An absent document and a JSON `null` both yield the empty partial, so the
/// merge falls back to defaults for every group.
pub fn parse_partial<T>(content: Option<Value>) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    match content {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value),
    }
}
