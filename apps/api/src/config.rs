use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default or is optional; the service starts without a
/// configured LLM and falls back to deterministic narratives.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the OpenAI-compatible narrative backend.
    /// `None` means narrative generation uses the deterministic fallback.
    pub llm_api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    pub llm_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            llm_api_key: std::env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty()),
            llm_base_url: std::env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
