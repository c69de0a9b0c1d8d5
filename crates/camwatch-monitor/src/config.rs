//! Monitor configuration.

use std::time::Duration;

/// Monitor configuration.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Minimum confidence for a detection to enter the pipeline (exclusive bound)
    pub confidence_threshold: f32,
    /// Cooldown window between alerts for the same category
    pub alert_cooldown: Duration,
    /// Per-channel notification attempt timeout
    pub channel_timeout: Duration,
    /// Pacing interval between frames
    pub frame_interval: Duration,
    /// How often the agent emits its status line
    pub status_interval: Duration,
    /// Taxonomy JSON path (embedded COCO table when unset)
    pub taxonomy_path: Option<String>,
    /// JSONL detection feed path (synthetic walkthrough when unset)
    pub feed_path: Option<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            alert_cooldown: Duration::from_secs(3),
            channel_timeout: Duration::from_secs(10),
            frame_interval: Duration::from_millis(100),
            status_interval: Duration::from_secs(5),
            taxonomy_path: None,
            feed_path: None,
        }
    }
}

impl MonitorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            confidence_threshold: std::env::var("MONITOR_CONFIDENCE_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.5),
            alert_cooldown: Duration::from_secs(
                std::env::var("MONITOR_COOLDOWN_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3),
            ),
            channel_timeout: Duration::from_secs(
                std::env::var("MONITOR_CHANNEL_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            frame_interval: Duration::from_millis(
                std::env::var("MONITOR_FRAME_INTERVAL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(100),
            ),
            status_interval: Duration::from_secs(
                std::env::var("MONITOR_STATUS_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            taxonomy_path: std::env::var("MONITOR_TAXONOMY_PATH").ok(),
            feed_path: std::env::var("MONITOR_FEED_PATH").ok(),
        }
    }
}
