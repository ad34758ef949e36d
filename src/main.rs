//! ClassHub Server — course and feed service
//!
//! Main entry point: loads configuration, initializes logging, and runs
//! the HTTP server.

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use classhub_core::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_configuration().context("Failed to load configuration")?;

    init_logging(&config);

    tracing::info!("Starting ClassHub v{}", env!("CARGO_PKG_VERSION"));

    classhub_api::run_server(config)
        .await
        .context("Server error")?;

    Ok(())
}

/// Load configuration from files and environment
fn load_configuration() -> anyhow::Result<AppConfig> {
    let env = std::env::var("CLASSHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = AppConfig::load(&env)?;

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
