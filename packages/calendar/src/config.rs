//! Environment configuration.

use dotenvy::dotenv;
use std::env;

use crate::error::{CalendarError, Result};

/// Chat model used when `GROQ_MODEL` is not set.
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Application configuration loaded from environment variables.
///
/// Constructed once at startup and passed by reference into the client and
/// generation calls; never read from the ambient environment in deep call
/// paths. A missing API key is fatal — the application must not proceed to
/// accept requests.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key
    pub api_key: String,
    /// Chat model identifier
    pub model: String,
}

impl Config {
    /// Load configuration from environment variables, reading a `.env` file
    /// first if one is present (development).
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let api_key = env::var("GROQ_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CalendarError::Configuration("GROQ_API_KEY must be set".into()))?;

        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }
}
