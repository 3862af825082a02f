//! Environment-style configuration for the bot process.

use anyhow::{Context, Result};
use std::env;

const DEFAULT_PORT: u16 = 3978;
const DEFAULT_SPELL_ENDPOINT: &str =
    "https://api.cognitive.microsoft.com/bing/v7.0/spellcheck";

/// Process configuration loaded from environment variables (a `.env` file is
/// honored when present, see `main`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot credential.
    pub bot_token: String,
    /// Port the webhook listener binds to. Unused in long-polling mode.
    pub port: u16,
    /// Public URL Telegram should deliver updates to. When unset the bot
    /// falls back to long polling.
    pub webhook_url: Option<String>,
    /// Remote intent-recognition model endpoint. When unset the built-in
    /// keyword recognizer is used.
    pub luis_model_url: Option<String>,
    /// Spell-correction settings; `None` disables the middleware entirely.
    pub spell: Option<SpellConfig>,
}

#[derive(Debug, Clone)]
pub struct SpellConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bot_token =
            env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {value}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let webhook_url = env::var("WEBHOOK_URL").ok();
        let luis_model_url = env::var("LUIS_MODEL_URL").ok();

        let spell_enabled = env::var("IS_SPELL_CORRECTION_ENABLED")
            .map(|value| matches!(value.trim(), "true" | "1"))
            .unwrap_or(false);
        let spell = if spell_enabled {
            let api_key = env::var("SPELL_CHECK_API_KEY")
                .context("SPELL_CHECK_API_KEY must be set when spell correction is enabled")?;
            let endpoint = env::var("SPELL_CHECK_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_SPELL_ENDPOINT.to_string());
            Some(SpellConfig { endpoint, api_key })
        } else {
            None
        };

        Ok(Self {
            bot_token,
            port,
            webhook_url,
            luis_model_url,
            spell,
        })
    }
}
