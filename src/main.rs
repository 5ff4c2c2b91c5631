#![allow(clippy::result_large_err)]

use dotenvy::dotenv;
use inscription_buddy::{bot, config, core::market::MarketClient, errors::Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings (defaults when no config.toml exists)
    let settings = config::settings::load_default_settings()
        .inspect_err(|e| error!("Critical error loading settings: {}", e))?;
    info!("Successfully processed application settings.");

    // 4. Build the marketplace client shared by all commands
    let market = MarketClient::from_settings(&settings)
        .inspect(|_| info!("Marketplace client initialized."))
        .inspect_err(|e| error!("Failed to build marketplace client: {}", e))?;

    // 5. Run the bot
    // The token is loaded here, directly before use, not stored in Settings
    let token = config::discord::get_bot_token()
        .inspect_err(|e| error!("DISCORD_TOKEN not found: {}", e))?;

    bot::run_bot(token, Arc::new(settings), market).await
}
