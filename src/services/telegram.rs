use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::error::AlarmError;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers alarm notifications over the Telegram bot API.
///
/// Missing credentials disable delivery instead of failing the process;
/// messages then only show up in the logs and count as delivered.
#[derive(Clone)]
pub struct TelegramNotifier {
    http: Client,
    base: String,
    bot_token: String,
    chat_id: Option<i64>,
}

impl TelegramNotifier {
    pub fn new(base: String, bot_token: String, chat_id: Option<i64>) -> Self {
        Self {
            http: Client::new(),
            base,
            bot_token,
            chat_id,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.bot_token.trim().is_empty() && self.chat_id.is_some()
    }

    /// Sends to the configured default chat.
    pub async fn send(&self, text: &str) -> Result<(), AlarmError> {
        match self.chat_id {
            Some(chat) => self.send_to(chat, text).await,
            None => {
                tracing::info!("telegram disabled, dropping message: {text}");
                Ok(())
            }
        }
    }

    /// Single attempt, no retry queue.
    pub async fn send_to(&self, chat_id: i64, text: &str) -> Result<(), AlarmError> {
        if self.bot_token.trim().is_empty() {
            tracing::info!("telegram disabled, dropping message: {text}");
            return Ok(());
        }

        let url = format!("{}/bot{}/sendMessage", self.base, self.bot_token);
        let res = self
            .http
            .post(&url)
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .timeout(SEND_TIMEOUT)
            .send()
            .await
            .map_err(|e| AlarmError::Dispatch(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AlarmError::Dispatch(format!(
                "Telegram sendMessage failed: {status} {body}"
            )));
        }

        Ok(())
    }
}
