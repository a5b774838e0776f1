//! Global stats repository.
//!
//! Rows of `stats_global` are seeded by the game backend's own setup; this
//! repository only updates values of existing keys.

use domain::store::{StatsStore, StoreError};
use sqlx::PgPool;
use tracing::debug;

use crate::entities::StatGlobalEntity;
use crate::metrics::{record_rows_written, QueryTimer};

/// Repository for `stats_global` operations.
#[derive(Clone)]
pub struct StatsGlobalRepository {
    pool: PgPool,
}

impl StatsGlobalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Set the value of `key`.
    ///
    /// Returns `None` if no row has that key.
    pub async fn update_value(
        &self,
        key: &str,
        value: f64,
    ) -> Result<Option<StatGlobalEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_stat_value");

        let result = sqlx::query_as::<_, StatGlobalEntity>(
            r#"
            UPDATE stats_global
            SET "value" = $2
            WHERE "key" = $1
            RETURNING "key", "value"
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }
}

#[async_trait::async_trait]
impl StatsStore for StatsGlobalRepository {
    async fn update_value(&self, key: &str, value: f64) -> Result<(), StoreError> {
        match StatsGlobalRepository::update_value(self, key, value).await? {
            Some(stat) => {
                debug!(key = %stat.key, value = stat.value, "Updated stats_global value");
                record_rows_written("stats_global", 1);
                Ok(())
            }
            None => Err(StoreError::MissingKey(key.to_string())),
        }
    }
}
