//! Telegram bot notification channel.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::channel::NotifyChannel;
use crate::error::{NotifyError, NotifyResult};

/// Base URL of the Telegram bot API.
const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Default per-attempt request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Telegram channel.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token
    pub bot_token: String,
    /// Target chat id
    pub chat_id: String,
    /// Per-attempt request timeout
    pub timeout: Duration,
    /// Base URL of the bot API (overridable for tests)
    pub base_url: String,
}

impl TelegramConfig {
    /// Create config from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
    ///
    /// Returns `None` unless both are present and non-empty; a
    /// half-configured channel is treated as disabled.
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|s| !s.is_empty())?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .filter(|s| !s.is_empty())?;

        Some(Self {
            bot_token,
            chat_id,
            timeout: DEFAULT_TIMEOUT,
            base_url: TELEGRAM_API_BASE.to_string(),
        })
    }

    /// Override the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Sends alert messages through the Telegram bot API.
pub struct TelegramChannel {
    http: Client,
    config: TelegramConfig,
}

impl TelegramChannel {
    /// Create a new Telegram channel.
    pub fn new(config: TelegramConfig) -> NotifyResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(NotifyError::Network)?;

        Ok(Self { http, config })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.base_url, self.config.bot_token
        )
    }
}

#[async_trait]
impl NotifyChannel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, message: &str) -> NotifyResult<()> {
        let params = [
            ("chat_id", self.config.chat_id.as_str()),
            ("text", message),
            ("parse_mode", "Markdown"),
        ];

        let response = self
            .http
            .post(self.send_message_url())
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::api(status, body));
        }

        debug!(chat_id = %self.config.chat_id, "Telegram message delivered");
        Ok(())
    }
}
