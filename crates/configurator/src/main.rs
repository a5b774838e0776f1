use std::process::ExitCode;

use anyhow::Result;
use persistence::repositories::{NewsRepository, StatsGlobalRepository};
use persistence::FileSettingsStore;
use tracing::info;

use configurator::{config, logging, services};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    logging::init_logging(&config.logging);

    info!(
        "Starting game server configurator v{}",
        env!("CARGO_PKG_VERSION")
    );

    let settings = FileSettingsStore::new(&config.settings.directory);
    info!(directory = %settings.directory().display(), "Using settings directory");

    // Create database pool
    let pool = persistence::db::create_pool(&config.database).await?;
    let news = NewsRepository::new(pool.clone());
    let stats = StatsGlobalRepository::new(pool.clone());

    let result = services::run(&settings, &news, &stats).await;
    pool.close().await;

    // The failure is already logged; only the exit status remains.
    if services::log_outcome(&result) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
