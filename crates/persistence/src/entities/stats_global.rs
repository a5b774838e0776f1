//! Global stats database entity.

use sqlx::FromRow;

/// Row of `stats_global`, a key/value table read by the game backend.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StatGlobalEntity {
    pub key: String,
    pub value: f64,
}
