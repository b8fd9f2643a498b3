mod analysis;
mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::narrative::{LlmNarrativeBackend, NarrativeBackend};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // The narrative backend is optional: without an API key the analysis
    // pipeline produces the deterministic fallback narrative.
    let narrative: Option<Arc<dyn NarrativeBackend>> = match &config.llm_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), &config.llm_base_url);
            info!("Narrative backend initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmNarrativeBackend(client)))
        }
        None => {
            info!("LLM_API_KEY not set; narratives will use the deterministic fallback");
            None
        }
    };

    let state = AppState { narrative };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
