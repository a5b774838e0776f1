//! Domain layer for the game server configurator.
//!
//! This crate contains:
//! - Configuration models (global toggles, news, tunables) with defaults and merge rules
//! - Projection services turning configuration into storage rows
//! - Storage seams implemented by the persistence layer

pub mod models;
pub mod services;
pub mod store;
