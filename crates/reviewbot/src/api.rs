// Fetcher for the homework-statuses API

use reqwest::StatusCode;
use serde_json::Value;

use reviewbot_core::{NotifyError, Result};

/// Client for the upstream homework review API
pub struct HomeworkApi {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HomeworkApi {
    /// Create a client for the given endpoint and API token.
    ///
    /// No request timeout is configured: a hung upstream blocks the cycle,
    /// matching the behavior this notifier inherits.
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Fetch homework statuses changed since `from_date` (Unix seconds).
    ///
    /// Returns the parsed body untouched; envelope validation is a separate
    /// step. Any non-200 status and any transport or decode failure becomes a
    /// `Fetch` error. No retry here: the next poll cycle is the retry unit.
    pub async fn get_api_answer(&self, from_date: i64) -> Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("from_date", from_date)])
            .header("Authorization", format!("OAuth {}", self.token))
            .send()
            .await
            .map_err(|error| NotifyError::fetch(format!("request failed: {error}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(NotifyError::fetch(format!(
                "server returned status {}",
                status.as_u16()
            )));
        }

        response
            .json()
            .await
            .map_err(|error| NotifyError::fetch(format!("body is not valid JSON: {error}")))
    }
}
