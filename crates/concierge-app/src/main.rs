//! Concierge application binary - composition root.
//!
//! Ties together the Concierge crates into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Build the chat engine for the selected assistant variant
//! 3. Wrap it in the session-hosting chat service
//! 4. Start the axum REST API server

mod cli;

use clap::Parser;

use concierge_api::routes;
use concierge_api::state::AppState;
use concierge_chat::{ChatEngine, ChatService};
use concierge_core::config::{AssistantVariant, ConciergeConfig};

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first: the log level default may come from it.
    let config_file = args.resolve_config_path();
    let mut config = ConciergeConfig::load_or_default(&config_file);

    // Apply CLI/env overrides back into the config so the API layer sees
    // the effective values.
    config.general.port = args.resolve_port(config.general.port);
    if let Some(level) = args.resolve_log_level() {
        config.general.log_level = level;
    }
    config.assistant.variant = args.resolve_variant(config.assistant.variant);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.general.log_level.clone())
            }),
        )
        .init();

    tracing::info!("Starting Concierge v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Chat engine for the selected variant.
    let engine = match config.assistant.variant {
        AssistantVariant::Property => {
            tracing::info!(
                model = %config.model.model,
                base_url = %config.model.base_url,
                "Property assistant with hosted-model fallback"
            );
            ChatEngine::property_with_client(&config.model)
        }
        AssistantVariant::Storefront => {
            tracing::info!("Storefront assistant with static fallback");
            ChatEngine::storefront()
        }
    };

    let service = ChatService::new(engine, config.assistant.session_timeout_minutes);
    let state = AppState::new(config.clone(), service);

    routes::start_server(&config, state).await?;

    Ok(())
}
