//! News repository.
//!
//! Writes the `news`, `news_items` and `news_item_text` tables. Content is
//! always replaced wholesale, so there are no per-row reads or updates.

use domain::models::{NewsItemRow, NewsItemTextRow, NewsRow};
use domain::store::{NewsStore, StoreError};
use sqlx::PgPool;

use crate::metrics::{record_rows_written, QueryTimer};

/// Repository for news table operations.
#[derive(Clone)]
pub struct NewsRepository {
    pool: PgPool,
}

impl NewsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete all rows of the three news tables (within a transaction).
    ///
    /// Child tables are cleared before `news`.
    pub async fn delete_all(&self) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("delete_all_news");
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM news_item_text")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM news_items")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM news").execute(&mut *tx).await?;

        tx.commit().await?;
        timer.record();
        Ok(())
    }

    /// Insert multiple news rows in a batch (within a transaction).
    pub async fn insert_news_batch(&self, rows: &[NewsRow]) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("insert_news_batch");
        let mut tx = self.pool.begin().await?;

        for row in rows {
            sqlx::query(
                r#"
                INSERT INTO news (name, start_at, end_at)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&row.name)
            .bind(row.start_at)
            .bind(row.end_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        timer.record();
        Ok(rows.len() as u64)
    }

    /// Insert multiple news item rows in a batch (within a transaction).
    pub async fn insert_items_batch(&self, rows: &[NewsItemRow]) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("insert_news_items_batch");
        let mut tx = self.pool.begin().await?;

        for row in rows {
            sqlx::query(
                r#"
                INSERT INTO news_items (
                    news_name, name, priority, slot_0, slot_1, slot_2, platforms, image_index
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(&row.news_name)
            .bind(&row.name)
            .bind(row.priority)
            .bind(row.slot_0)
            .bind(row.slot_1)
            .bind(row.slot_2)
            .bind(row.platforms.as_deref())
            .bind(row.image_index)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        timer.record();
        Ok(rows.len() as u64)
    }

    /// Insert multiple news item text rows in a batch (within a transaction).
    pub async fn insert_texts_batch(&self, rows: &[NewsItemTextRow]) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("insert_news_item_text_batch");
        let mut tx = self.pool.begin().await?;

        for row in rows {
            sqlx::query(
                r#"
                INSERT INTO news_item_text (news_name, item_name, title, message, language)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&row.news_name)
            .bind(&row.item_name)
            .bind(&row.title)
            .bind(&row.message)
            .bind(&row.language)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        timer.record();
        Ok(rows.len() as u64)
    }
}

#[async_trait::async_trait]
impl NewsStore for NewsRepository {
    async fn delete_all_news(&self) -> Result<(), StoreError> {
        Ok(self.delete_all().await?)
    }

    async fn create_news(&self, rows: &[NewsRow]) -> Result<u64, StoreError> {
        let written = self.insert_news_batch(rows).await?;
        record_rows_written("news", written);
        Ok(written)
    }

    async fn create_news_items(&self, rows: &[NewsItemRow]) -> Result<u64, StoreError> {
        let written = self.insert_items_batch(rows).await?;
        record_rows_written("news_items", written);
        Ok(written)
    }

    async fn create_news_item_texts(&self, rows: &[NewsItemTextRow]) -> Result<u64, StoreError> {
        let written = self.insert_texts_batch(rows).await?;
        record_rows_written("news_item_text", written);
        Ok(written)
    }
}
