//! Environment configuration.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use persona_engine::security::ApiKey;
use std::env;

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rapidapi_key: ApiKey,
    pub firefly_token: ApiKey,
    pub openai_api_key: ApiKey,
    pub store_root: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            rapidapi_key: env::var("RAPID_API_KEY")
                .context("RAPID_API_KEY must be set")?
                .into(),
            firefly_token: env::var("FARCASTER_AUTH_TOKEN")
                .context("FARCASTER_AUTH_TOKEN must be set")?
                .into(),
            openai_api_key: env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set")?
                .into(),
            store_root: env::var("PERSONA_STORE_ROOT")
                .unwrap_or_else(|_| "/tmp/persona-store".to_string()),
        })
    }
}
