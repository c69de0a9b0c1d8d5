//! Monitor error types.

use thiserror::Error;

pub type MonitorResult<T> = Result<T, MonitorError>;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] camwatch_models::TaxonomyError),

    #[error("Notification setup error: {0}")]
    Notify(#[from] camwatch_notify::NotifyError),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MonitorError {
    pub fn feed(msg: impl Into<String>) -> Self {
        MonitorError::Feed(msg.into())
    }
}
