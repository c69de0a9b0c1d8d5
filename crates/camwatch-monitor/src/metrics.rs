//! Prometheus metrics for the monitor agent.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // Pipeline metrics
    pub const FRAMES_PROCESSED_TOTAL: &str = "camwatch_frames_processed_total";
    pub const DETECTIONS_TOTAL: &str = "camwatch_detections_total";

    // Alert metrics
    pub const ALERTS_FIRED_TOTAL: &str = "camwatch_alerts_fired_total";
    pub const ALERTS_SUPPRESSED_TOTAL: &str = "camwatch_alerts_suppressed_total";

    // Delivery metrics
    pub const DELIVERIES_TOTAL: &str = "camwatch_deliveries_total";
}

/// Record a processed frame.
pub fn record_frame() {
    counter!(names::FRAMES_PROCESSED_TOTAL).increment(1);
}

/// Record classified detections for a category.
pub fn record_detections(category: &str, count: u64) {
    let labels = [("category", category.to_string())];
    counter!(names::DETECTIONS_TOTAL, &labels).increment(count);
}

/// Record an alert that cleared the cooldown gate.
pub fn record_alert_fired(category: &str) {
    let labels = [("category", category.to_string())];
    counter!(names::ALERTS_FIRED_TOTAL, &labels).increment(1);
}

/// Record an alert suppressed by the cooldown gate.
pub fn record_alert_suppressed(category: &str) {
    let labels = [("category", category.to_string())];
    counter!(names::ALERTS_SUPPRESSED_TOTAL, &labels).increment(1);
}

/// Record a dispatch outcome.
pub fn record_delivery(outcome: &str, channel: &str) {
    let labels = [
        ("outcome", outcome.to_string()),
        ("channel", channel.to_string()),
    ];
    counter!(names::DELIVERIES_TOTAL, &labels).increment(1);
}
