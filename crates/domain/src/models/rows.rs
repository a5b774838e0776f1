//! Flat storage rows produced by the projection services.

/// Row of the `news` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRow {
    pub name: String,
    pub start_at: Option<i64>,
    pub end_at: Option<i64>,
}

/// Row of the `news_items` table. Exactly one of the slot flags is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItemRow {
    pub news_name: String,
    pub name: String,
    pub priority: i32,
    pub slot_0: bool,
    pub slot_1: bool,
    pub slot_2: bool,
    /// Always written as NULL.
    pub platforms: Option<String>,
    pub image_index: i32,
}

/// Row of the `news_item_text` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItemTextRow {
    pub news_name: String,
    pub item_name: String,
    pub title: String,
    pub message: String,
    pub language: String,
}

/// Full replacement content of the three news tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsRows {
    pub news: Vec<NewsRow>,
    pub items: Vec<NewsItemRow>,
    pub texts: Vec<NewsItemTextRow>,
}

/// Keyed value update on `stats_global`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatUpdate {
    pub key: &'static str,
    pub value: f64,
}
