//! News announcement configuration.
//!
//! The stored document is a list of timed entries. Each entry fills up to
//! three display slots, and each slot carries localized text, a priority and
//! an image index.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{whole_number, OrderedMap};

/// Settings store name of the news document.
pub const NEWS_CONFIGURATION_NAME: &str = "news";

/// Complete news configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsConfiguration {
    pub news: Vec<NewsEntry>,
}

/// One timed announcement. Its position in the list is its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEntry {
    /// Epoch seconds.
    #[serde(
        default,
        deserialize_with = "whole_number::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_at: Option<i64>,
    /// Epoch seconds.
    #[serde(
        default,
        deserialize_with = "whole_number::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_at: Option<i64>,
    pub items: OrderedMap<Slot, NewsItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub localization: OrderedMap<Language, NewsText>,
    /// Lower values take precedence.
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub priority: i32,
    #[serde(deserialize_with = "whole_number::deserialize")]
    pub image_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsText {
    pub title: String,
    pub message: String,
}

/// Display position of a news item within an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "slot1")]
    Slot1,
    #[serde(rename = "slot2")]
    Slot2,
    #[serde(rename = "slot3")]
    Slot3,
}

impl Slot {
    /// One-hot `(slot_0, slot_1, slot_2)` column flags for this slot.
    pub fn column_flags(self) -> [bool; 3] {
        match self {
            Slot::Slot1 => [true, false, false],
            Slot::Slot2 => [false, true, false],
            Slot::Slot3 => [false, false, true],
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Slot1 => write!(f, "slot1"),
            Slot::Slot2 => write!(f, "slot2"),
            Slot::Slot3 => write!(f, "slot3"),
        }
    }
}

/// Language codes the game client can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "tag")]
    Tag,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "it")]
    It,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "nl")]
    Nl,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "zh-cn")]
    ZhCn,
    #[serde(rename = "zh-tw")]
    ZhTw,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "pl")]
    Pl,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "en-gb")]
    EnGb,
    #[serde(rename = "fr-ca")]
    FrCa,
    #[serde(rename = "es-419")]
    Es419,
    #[serde(rename = "es-mx")]
    EsMx,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tag => "tag",
            Language::Fr => "fr",
            Language::It => "it",
            Language::De => "de",
            Language::Es => "es",
            Language::Ja => "ja",
            Language::Nl => "nl",
            Language::Ko => "ko",
            Language::ZhCn => "zh-cn",
            Language::ZhTw => "zh-tw",
            Language::Pt => "pt",
            Language::Pl => "pl",
            Language::Ru => "ru",
            Language::EnGb => "en-gb",
            Language::FrCa => "fr-ca",
            Language::Es419 => "es-419",
            Language::EsMx => "es-mx",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a stored news document was rejected.
#[derive(Debug, thiserror::Error)]
pub enum NewsValidationError {
    #[error("news configuration is missing")]
    Missing,

    #[error("news configuration has an invalid shape: {0}")]
    Shape(#[from] serde_json::Error),
}

impl NewsConfiguration {
    /// Configuration with no entries; projecting it clears all news.
    pub fn empty() -> Self {
        Self { news: Vec::new() }
    }

    /// Structural validity check for a stored news document.
    ///
    /// Rejects an absent document, a wrong top-level shape, slot keys other
    /// than `slot1..slot3`, unknown language codes, duplicate keys, and
    /// non-integer priorities, image indices or timestamps. Entries and their
    /// slots/languages keep document order.
    pub fn from_stored(content: Option<Value>) -> Result<Self, NewsValidationError> {
        match content {
            None | Some(Value::Null) => Err(NewsValidationError::Missing),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }
}

impl Default for NewsConfiguration {
    /// Sample announcements written on first run.
    fn default() -> Self {
        let english = NewsText {
            title: "News Title".to_string(),
            message: "Content for News".to_string(),
        };
        let german = NewsText {
            title: "Nachricht Titel".to_string(),
            message: "Inhalt der Nachricht".to_string(),
        };

        let first = NewsItem {
            localization: [(Language::En, english.clone())].into_iter().collect(),
            priority: 0,
            image_index: 10,
        };
        let second = NewsItem {
            localization: [(Language::En, english), (Language::De, german)]
                .into_iter()
                .collect(),
            priority: 1,
            image_index: 16,
        };

        Self {
            news: vec![
                NewsEntry {
                    start_at: Some(0),
                    end_at: Some(0),
                    items: [(Slot::Slot1, first)].into_iter().collect(),
                },
                NewsEntry {
                    start_at: Some(0),
                    end_at: Some(0),
                    items: [(Slot::Slot1, second)].into_iter().collect(),
                },
            ],
        }
    }
}
