//! Notification error types.

use thiserror::Error;

pub type NotifyResult<T> = Result<T, NotifyError>;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Invalid message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
}

impl NotifyError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        NotifyError::RequestFailed(msg.into())
    }

    pub fn api(status: u16, body: impl Into<String>) -> Self {
        NotifyError::Api {
            status,
            body: body.into(),
        }
    }

    /// True when the failure was a client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, NotifyError::Network(e) if e.is_timeout())
    }
}
