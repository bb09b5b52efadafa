//! leasifai-server - LeasifAI backend server
//!
//! REST API for the LeasifAI leasing application: assistant chat and
//! feasibility-study orchestration over a text-generation provider.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use leasifai_core::provider::OpenAiProvider;

mod config;
mod error;
mod routes;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("leasifai_server=info".parse()?))
        .init();

    info!("leasifai-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = config::Config::load()?;
    info!(
        provider_url = %config.provider_api_url,
        chat_model = %config.chat_model,
        feasibility_model = %config.feasibility_model,
        "config loaded"
    );
    if !config.has_provider_key() {
        info!("no provider API key configured; assuming a local endpoint");
    }

    let provider = Arc::new(OpenAiProvider::new(
        config.provider_api_url.clone(),
        config.provider_api_key.clone(),
    ));

    let bind_addr = config.bind_addr;
    let state = state::AppState::new(config, provider);
    let router = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("listening on {}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
    }
}
