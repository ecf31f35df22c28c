use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};

use crate::mood::Preset;

pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.2";
pub const DEFAULT_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_TARGET_LENGTH: usize = 5;
pub const MAX_TARGET_LENGTH: usize = 10;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_token: String,
    pub timeout: Duration,
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub target_length: usize,
    pub classifier_enabled: bool,
    /// Preset substituted for non-emotional text; `None` means strict rejection
    pub fallback_mood: Option<Preset>,
    pub search_url: String,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    Config::from_lookup(|key| std::env::var(key).ok())
}

impl Config {
    /// Build a configuration from any key lookup, applying defaults for optional keys
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_token = get("VIBE_API_TOKEN")
            .ok_or_else(|| anyhow!("VIBE_API_TOKEN is not set; add it to your environment or .env file"))?;

        let timeout_secs = match get("VIBE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("VIBE_TIMEOUT_SECS must be a whole number, got '{raw}'"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("VIBE_TIMEOUT_SECS must be greater than zero");
        }

        let target_length = match get("VIBE_TARGET_LENGTH") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("VIBE_TARGET_LENGTH must be a whole number, got '{raw}'"))?,
            None => DEFAULT_TARGET_LENGTH,
        };
        validate_target_length(target_length)?;

        let max_new_tokens = match get("VIBE_MAX_NEW_TOKENS") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("VIBE_MAX_NEW_TOKENS must be a whole number, got '{raw}'"))?,
            None => 400,
        };

        let temperature = match get("VIBE_TEMPERATURE") {
            Some(raw) => raw
                .parse::<f32>()
                .with_context(|| format!("VIBE_TEMPERATURE must be a number, got '{raw}'"))?,
            None => 0.7,
        };

        let classifier_enabled = match get("VIBE_CLASSIFIER") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| anyhow!("VIBE_CLASSIFIER must be true or false, got '{raw}'"))?,
            None => true,
        };

        let fallback_mood = match get("VIBE_FALLBACK_MOOD") {
            Some(raw) => Some(
                raw.parse::<Preset>()
                    .map_err(|e| anyhow!("VIBE_FALLBACK_MOOD: {e}"))?,
            ),
            None => None,
        };

        Ok(Config {
            api_url: get("VIBE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token,
            timeout: Duration::from_secs(timeout_secs),
            max_new_tokens,
            temperature,
            target_length,
            classifier_enabled,
            fallback_mood,
            search_url: get("VIBE_SEARCH_URL").unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
        })
    }
}

pub fn validate_target_length(target_length: usize) -> Result<()> {
    if !(1..=MAX_TARGET_LENGTH).contains(&target_length) {
        bail!("target length must be between 1 and {MAX_TARGET_LENGTH}, got {target_length}");
    }
    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
