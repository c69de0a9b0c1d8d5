//! Multi-channel notification dispatch with fallback.

use serde::Serialize;
use tracing::{info, warn};

use crate::channel::NotifyChannel;

/// Outcome of one dispatch across the channel chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum DeliveryOutcome {
    /// A channel accepted the message; later channels were not tried.
    Delivered { channel: &'static str },

    /// Every channel in the chain was tried and failed.
    AllFailed,

    /// The chain is empty: no channel has complete configuration.
    Unconfigured,
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }
}

/// Result of one channel's startup self-test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelTestResult {
    pub channel: &'static str,
    pub ok: bool,
}

/// Dispatches alert messages across channels in priority order.
///
/// Channels are tried one at a time and the first success stops the
/// chain. A failing channel is logged and the next one is tried.
/// Channels with incomplete configuration are never constructed into
/// the chain, so [`DeliveryOutcome::Unconfigured`] means the chain is
/// empty rather than that every attempt failed.
pub struct Dispatcher {
    channels: Vec<Box<dyn NotifyChannel>>,
}

impl Dispatcher {
    /// Create a dispatcher over an ordered channel chain.
    pub fn new(channels: Vec<Box<dyn NotifyChannel>>) -> Self {
        Self { channels }
    }

    /// Channel names in dispatch order.
    pub fn channel_names(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    /// True when at least one channel is configured.
    pub fn is_configured(&self) -> bool {
        !self.channels.is_empty()
    }

    /// Send one message through the chain, stopping at the first success.
    pub async fn dispatch(&self, message: &str) -> DeliveryOutcome {
        if self.channels.is_empty() {
            return DeliveryOutcome::Unconfigured;
        }

        for channel in &self.channels {
            match channel.send(message).await {
                Ok(()) => {
                    info!(channel = channel.name(), "Notification delivered");
                    return DeliveryOutcome::Delivered {
                        channel: channel.name(),
                    };
                }
                Err(e) => {
                    warn!(
                        channel = channel.name(),
                        error = %e,
                        "Notification channel failed"
                    );
                }
            }
        }

        DeliveryOutcome::AllFailed
    }

    /// Send a synthetic test message through every channel and report
    /// per-channel results.
    ///
    /// Unlike [`dispatch`](Self::dispatch) this does not short-circuit:
    /// each configured channel is exercised once. Failures are logged
    /// and never block startup.
    pub async fn self_test(&self, message: &str) -> Vec<ChannelTestResult> {
        let mut results = Vec::with_capacity(self.channels.len());

        for channel in &self.channels {
            let result = channel.send(message).await;
            match &result {
                Ok(()) => info!(channel = channel.name(), "Channel self-test passed"),
                Err(e) => warn!(
                    channel = channel.name(),
                    error = %e,
                    "Channel self-test failed"
                ),
            }
            results.push(ChannelTestResult {
                channel: channel.name(),
                ok: result.is_ok(),
            });
        }

        results
    }
}
