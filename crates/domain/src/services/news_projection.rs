//! Projection of a news configuration onto the three news tables.
//!
//! Identity is positional: an entry's `name` is its index in the list and an
//! item's `name` is its index among the entry's present slots, counted in
//! encounter order. Text rows are emitted in the same pass as their item row
//! so `news_item_text.item_name` always matches `news_items.name`.

use crate::models::{NewsConfiguration, NewsItemRow, NewsItemTextRow, NewsRow, NewsRows};

/// Flatten `config` into replacement rows for `news`, `news_items` and
/// `news_item_text`.
pub fn project_news(config: &NewsConfiguration) -> NewsRows {
    let mut rows = NewsRows::default();

    for (news_index, entry) in config.news.iter().enumerate() {
        let news_name = news_index.to_string();

        rows.news.push(NewsRow {
            name: news_name.clone(),
            start_at: entry.start_at,
            end_at: entry.end_at,
        });

        for (item_index, (slot, item)) in entry.items.iter().enumerate() {
            let item_name = item_index.to_string();
            let [slot_0, slot_1, slot_2] = slot.column_flags();

            rows.items.push(NewsItemRow {
                news_name: news_name.clone(),
                name: item_name.clone(),
                priority: item.priority,
                slot_0,
                slot_1,
                slot_2,
                platforms: None,
                image_index: item.image_index,
            });

            for (language, text) in item.localization.iter() {
                rows.texts.push(NewsItemTextRow {
                    news_name: news_name.clone(),
                    item_name: item_name.clone(),
                    title: text.title.clone(),
                    message: text.message.clone(),
                    language: language.to_string(),
                });
            }
        }
    }

    rows
}
