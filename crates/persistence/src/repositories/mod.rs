//! Repository implementations for database operations.

pub mod news;
pub mod stats_global;

pub use news::NewsRepository;
pub use stats_global::StatsGlobalRepository;
