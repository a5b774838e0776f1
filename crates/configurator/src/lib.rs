//! Game server startup configurator.
//!
//! Loads the operator's settings documents and projects news and gameplay
//! tunables into the database before the game backend starts serving.

pub mod config;
pub mod error;
pub mod logging;
pub mod services;
