//! PeacePal API Server
//!
//! Run with: cargo run --bin peacepal-api
//!
//! # Configuration
//!
//! Reads `config.toml` from the usual locations (see `peacepal config`), then
//! applies environment overrides:
//! - `PEACEPAL_CONFIG`: Explicit config file path
//! - `PEACEPAL_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `PEACEPAL_API_PORT`: Port to listen on (default: 8086)
//! - `PEACEPAL_USER_NAME`: Display name for the session (default: Alex)
//! - `PEACEPAL_RNG_SEED`: Fixed seed for message picks
//! - `PEACEPAL_LOG_LEVEL` / `PEACEPAL_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter, wins over the configured level

use peacepal::api::{serve, ApiState};
use peacepal::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("PEACEPAL_CONFIG") {
        Ok(path) => Config::load_with_env(std::path::Path::new(&path))?,
        Err(_) => Config::load_default(),
    };
    peacepal::logging::init(&config.logging);

    tracing::info!("Starting PeacePal API server v{}", env!("CARGO_PKG_VERSION"));

    let state = ApiState::from_config(&config);
    let (positive, negative) = state.classifier.lexicon().len();
    tracing::info!(positive, negative, "Lexicon loaded");
    if config.session.rng_seed.is_some() {
        tracing::info!("Session uses a fixed RNG seed");
    }

    serve(state, &config.api).await?;

    tracing::info!("PeacePal API server stopped");
    Ok(())
}
