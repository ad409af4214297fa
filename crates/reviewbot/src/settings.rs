// Environment configuration
//
// Three secrets are mandatory; the process must stop before any network call
// when one is missing. The endpoint override exists for integration tests.

use std::env;

use anyhow::{bail, Result};

/// Default upstream endpoint for homework statuses
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Runtime configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// Upstream API token (`Authorization: OAuth <token>`)
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Destination chat id
    pub telegram_chat_id: String,
    /// Upstream endpoint, overridable via `POLL_ENDPOINT`
    pub endpoint: String,
}

impl Settings {
    /// Read configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRACTICUM_TOKEN`: upstream API token (required)
    /// - `TELEGRAM_TOKEN`: bot token (required)
    /// - `TELEGRAM_CHAT_ID`: destination chat (required)
    /// - `POLL_ENDPOINT`: upstream URL override (default: the Practicum API)
    pub fn from_env() -> Result<Self> {
        let practicum_token = require("PRACTICUM_TOKEN")?;
        let telegram_token = require("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require("TELEGRAM_CHAT_ID")?;

        let endpoint =
            env::var("POLL_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
        })
    }
}

fn require(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("required variable {name} is missing or empty"),
    }
}
