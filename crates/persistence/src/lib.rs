//! Persistence layer for the game server configurator.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations for the news and stats tables
//! - The file-backed settings document store

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod settings_file;

pub use settings_file::FileSettingsStore;
