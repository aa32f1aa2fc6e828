//! Application entry point — vocabulary tutor.
//!
//! # Startup sequence
//!
//! 1. Load `.env` (if present) and initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Build the chat client ([`ApiClient`] wrapped in [`RetryingClient`]).
//! 4. Run the [`Session`] on the terminal until stdin is closed.

use std::sync::Arc;

use anyhow::{Context, Result};
use vocab_tutor::{
    config::AppConfig,
    console::TerminalConsole,
    llm::{ApiClient, ChatClient, PromptBuilder, RetryingClient},
    tutor::{Checker, Session},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        log::error!("{err:#}");
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // 1. Environment + logging
    let dotenv = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Ok(path) = dotenv {
        log::info!("loaded environment from {}", path.display());
    }
    log::info!("vocab-tutor starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Chat client
    let api = ApiClient::from_config(&config.llm);
    if !api.has_api_key() {
        log::warn!(
            "no API key found in ${} or the settings file; requests will be unauthenticated",
            config.llm.api_key_env
        );
    }
    let client: Arc<dyn ChatClient> = Arc::new(RetryingClient::from_config(api, &config.llm));

    // 4. Session
    let prompts = PromptBuilder::new(
        &config.tutor.native_language,
        &config.tutor.target_language,
    );
    let checker = Checker::new(client, prompts);
    let mut session = Session::new(&config.tutor, checker, TerminalConsole::new())
        .context("cannot start a session")?;

    session.run().await.context("session ended unexpectedly")?;
    Ok(())
}
