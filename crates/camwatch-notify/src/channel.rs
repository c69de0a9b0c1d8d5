//! Notification channel trait.

use async_trait::async_trait;

use crate::error::NotifyResult;

/// A remote notification channel.
///
/// Implementations are constructed only when their configuration is
/// complete, so every channel in a dispatch chain is viable to try.
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Short channel name used in logs and delivery reports.
    fn name(&self) -> &'static str;

    /// Deliver one message.
    ///
    /// Any error means "channel unavailable" for this alert; the
    /// dispatcher falls through to the next channel in the chain.
    async fn send(&self, message: &str) -> NotifyResult<()>;
}
