// Telegram Bot API sender

use serde::Serialize;

use reviewbot_core::{NotifyError, Result};

/// Default Bot API host
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Minimal Bot API client: one chat, one method (`sendMessage`)
pub struct TelegramBot {
    client: reqwest::Client,
    token: String,
    chat_id: String,
    base_url: String,
}

impl TelegramBot {
    /// Create a bot for the given token and destination chat
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(token, chat_id, TELEGRAM_API_BASE)
    }

    /// Create a bot pointed at a custom Bot API host (used by tests)
    pub fn with_base_url(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            chat_id: chat_id.into(),
            base_url: base_url.into(),
        }
    }

    /// Deliver `text` to the configured chat.
    ///
    /// Success is logged at debug level. Failure is logged, then surfaced as
    /// a `Send` error carrying the undelivered text and the cause; callers
    /// decide whether that stops the process (it does, on every path).
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let outcome = self.client.post(&url).json(&body).send().await;
        match outcome {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(text, "message delivered");
                Ok(())
            }
            Ok(response) => {
                let cause = format!("telegram returned status {}", response.status().as_u16());
                tracing::error!(%cause, text, "message delivery failed");
                Err(NotifyError::send(text, cause))
            }
            Err(error) => {
                tracing::error!(error = %error, text, "message delivery failed");
                Err(NotifyError::send(text, error.to_string()))
            }
        }
    }
}
