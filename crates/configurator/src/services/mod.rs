//! Startup configurators.
//!
//! Each configurator loads its settings document (creating the default on
//! first run), merges it, and projects the result into the database.

pub mod global;
pub mod news;
pub mod settings;
pub mod startup;
pub mod tunables;

pub use global::load_global_configuration;
pub use news::{configure_news, read_news_configuration, NewsSummary};
pub use startup::{log_outcome, run, StartupReport};
pub use tunables::{configure_tunables, read_tunables_configuration};
