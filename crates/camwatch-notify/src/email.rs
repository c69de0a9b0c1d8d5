//! Email notification channel (authenticated SMTP submission).

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use crate::channel::NotifyChannel;
use crate::error::{NotifyError, NotifyResult};

/// SMTP relay used for submission (STARTTLS on port 587).
const SMTP_RELAY: &str = "smtp.gmail.com";

/// Subject line for alert emails.
const ALERT_SUBJECT: &str = "🚨 Security Alert - Intrusion Detected";

/// Default per-attempt delivery timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the email channel.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Sender address, also used as the SMTP username
    pub from: String,
    /// SMTP password (an app password for Gmail accounts)
    pub password: String,
    /// Recipient address
    pub to: String,
    /// Per-attempt delivery timeout
    pub timeout: Duration,
    /// SMTP relay host
    pub relay: String,
}

impl EmailConfig {
    /// Create config from `EMAIL_FROM`, `EMAIL_PASSWORD` and `EMAIL_TO`.
    ///
    /// Returns `None` unless all three are present and non-empty; a
    /// half-configured channel is treated as disabled.
    pub fn from_env() -> Option<Self> {
        let from = std::env::var("EMAIL_FROM").ok().filter(|s| !s.is_empty())?;
        let password = std::env::var("EMAIL_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())?;
        let to = std::env::var("EMAIL_TO").ok().filter(|s| !s.is_empty())?;

        Some(Self {
            from,
            password,
            to,
            timeout: DEFAULT_TIMEOUT,
            relay: SMTP_RELAY.to_string(),
        })
    }

    /// Override the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Sends alert emails over authenticated STARTTLS SMTP.
pub struct EmailChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: EmailConfig,
}

impl EmailChannel {
    /// Create a new email channel.
    pub fn new(config: EmailConfig) -> NotifyResult<Self> {
        let credentials = Credentials::new(config.from.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.relay)?
            .credentials(credentials)
            .timeout(Some(config.timeout))
            .build();

        Ok(Self { transport, config })
    }
}

#[async_trait]
impl NotifyChannel for EmailChannel {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn send(&self, message: &str) -> NotifyResult<()> {
        let email = Message::builder()
            .from(self.config.from.parse()?)
            .to(self.config.to.parse()?)
            .subject(ALERT_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(message.to_string())?;

        self.transport.send(email).await?;

        debug!(to = %self.config.to, "Alert email delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EmailConfig {
        EmailConfig {
            from: "camera@example.com".to_string(),
            password: "secret".to_string(),
            to: "owner@example.com".to_string(),
            timeout: Duration::from_secs(1),
            relay: "127.0.0.1".to_string(),
        }
    }

    #[test]
    fn test_channel_builds_without_connecting() {
        assert!(EmailChannel::new(test_config()).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_sender_rejected_before_delivery() {
        let mut config = test_config();
        config.from = "not an address".to_string();

        let channel = EmailChannel::new(config).unwrap();
        let err = channel.send("intrusion").await.unwrap_err();

        assert!(matches!(err, NotifyError::Address(_)));
    }

    #[test]
    fn test_config_from_env_requires_all_fields() {
        // One test body so env mutations do not race across threads.
        std::env::remove_var("EMAIL_FROM");
        std::env::remove_var("EMAIL_PASSWORD");
        std::env::remove_var("EMAIL_TO");
        assert!(EmailConfig::from_env().is_none());

        std::env::set_var("EMAIL_FROM", "camera@example.com");
        std::env::set_var("EMAIL_PASSWORD", "secret");
        assert!(EmailConfig::from_env().is_none());

        std::env::set_var("EMAIL_TO", "owner@example.com");
        let config = EmailConfig::from_env().unwrap();
        assert_eq!(config.relay, SMTP_RELAY);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        std::env::remove_var("EMAIL_FROM");
        std::env::remove_var("EMAIL_PASSWORD");
        std::env::remove_var("EMAIL_TO");
    }
}
