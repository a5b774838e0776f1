//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod stats_global;

pub use stats_global::StatGlobalEntity;
