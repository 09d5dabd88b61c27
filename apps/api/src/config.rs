use anyhow::{Context, Result};

use crate::errors::AppError;

const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
///
/// The provider credential is optional at startup: the service still answers
/// `/` and `/health` without it, and `/tailor` reports a configuration error.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub provider_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_api_url: optional_env("GROQ_API_URL")
                .unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string()),
            provider_timeout_secs: match optional_env("PROVIDER_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_PROVIDER_TIMEOUT_SECS,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the provider credential, or the configuration error surfaced as HTTP 500.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.groq_api_key.as_deref().ok_or_else(|| {
            AppError::Configuration("GROQ_API_KEY environment variable not set".to_string())
        })
    }
}

/// Reads an env var, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) fn test_config(api_key: Option<&str>) -> Config {
    Config {
        groq_api_key: api_key.map(str::to_string),
        groq_api_url: DEFAULT_GROQ_API_URL.to_string(),
        provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        port: 8000,
        rust_log: "info".to_string(),
    }
}
