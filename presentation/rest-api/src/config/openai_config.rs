use std::env;
use std::time::Duration;

use openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: API key (optional; AI endpoints answer 400 without it)
/// - OPENAI_MODEL: Model used for every call (default: "gpt-3.5-turbo")
/// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
/// - OPENAI_TIMEOUT_SECS: Request timeout in seconds (default: 30)
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout = match lookup("OPENAI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "invalid OPENAI_TIMEOUT_SECS, using default");
                    DEFAULT_TIMEOUT
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Self {
            api_key: lookup("OPENAI_API_KEY"),
            model: lookup("OPENAI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
        }
    }
}
