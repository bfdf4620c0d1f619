use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use crate::config::ServerConfig;

pub mod handlers;
mod relay;

pub use relay::Relay;

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let relay = Relay::new(config.provider);
    match relay.provider_kind() {
        Some(kind) => tracing::info!("Relaying chat messages to {}", kind),
        None => tracing::warn!(
            "Neither OPENAI_API_KEY nor GEMINI_API_KEY is set, chat requests will fail"
        ),
    }

    let router = handlers::build_router(Arc::new(relay), &config.static_dir);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, router.into_make_service())
        .await
        .context("Server terminated")
}
