//! Domain services for the game server configurator.
//!
//! Services contain the pure projection logic from configuration models to
//! storage rows.

pub mod news_projection;
pub mod tunables_projection;

pub use news_projection::project_news;
pub use tunables_projection::{project_tunables, TUNABLE_KEYS};
