//! The detection-to-alert pipeline.
//!
//! Per frame: filter raw detections by confidence, classify the
//! survivors into security categories, update aggregate counters, pick
//! one representative per category, run the cooldown gate, and for
//! admitted categories fire the local signal, render the alert and
//! dispatch it. Categories are processed in fixed priority order and
//! never block one another.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error, info};

use camwatch_models::{Alert, AlertMessage, Category, Detection, RawDetection, Taxonomy};
use camwatch_notify::{DeliveryOutcome, Dispatcher};

use crate::actuator::AlertActuator;
use crate::cooldown::CooldownGate;
use crate::counters::DetectionCounters;
use crate::metrics;

/// Maximum object names listed per category in a status line.
const MAX_LISTED: usize = 3;

/// Record of one alert fired during a frame.
#[derive(Debug, Clone, Serialize)]
pub struct AlertRecord {
    pub alert: Alert,
    pub message: AlertMessage,
    pub outcome: DeliveryOutcome,
}

/// Per-frame processing result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameSummary {
    /// Classified detections in fixed category order, bounding boxes
    /// untouched, for overlay rendering
    pub detections: Vec<Detection>,
    /// Alerts admitted by the gate this frame, with delivery outcomes
    pub alerts: Vec<AlertRecord>,
    /// Per-category status lines in fixed category order
    pub status_lines: Vec<String>,
    /// True when any category had at least one detection this frame
    pub breach: bool,
}

/// Owns the pipeline stages and their state.
///
/// There is exactly one mutator of cooldown and counter state: frames
/// are processed to completion one at a time.
pub struct Pipeline {
    confidence_threshold: f32,
    taxonomy: Taxonomy,
    gate: CooldownGate,
    counters: DetectionCounters,
    actuator: AlertActuator,
    dispatcher: Dispatcher,
}

impl Pipeline {
    pub fn new(
        confidence_threshold: f32,
        taxonomy: Taxonomy,
        gate: CooldownGate,
        actuator: AlertActuator,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            confidence_threshold,
            taxonomy,
            gate,
            counters: DetectionCounters::new(),
            actuator,
            dispatcher,
        }
    }

    /// Aggregate detection totals.
    pub fn counters(&self) -> &DetectionCounters {
        &self.counters
    }

    /// Process one frame's detection batch.
    pub async fn process_frame(&mut self, batch: &[RawDetection]) -> FrameSummary {
        let now = Instant::now();

        // Confidence filter is a strict bound; classification drops
        // unmapped ids. Batch order is preserved within each group so
        // the first member is the representative.
        let mut groups: HashMap<Category, Vec<Detection>> = HashMap::new();
        for raw in batch {
            if raw.confidence <= self.confidence_threshold {
                continue;
            }
            let Some(category) = Category::from_class_id(raw.class_id) else {
                continue;
            };
            let name = self.taxonomy.name(raw.class_id);
            groups
                .entry(category)
                .or_default()
                .push(Detection::new(category, name, raw.confidence, raw.bbox));
        }

        let mut summary = FrameSummary {
            breach: !groups.is_empty(),
            ..Default::default()
        };

        for &category in Category::ALL {
            let detections = groups.get(&category).map(Vec::as_slice).unwrap_or(&[]);
            summary.status_lines.push(status_line(category, detections));

            if detections.is_empty() {
                continue;
            }

            // Counters track every observation, gated or not.
            self.counters.add(category, detections.len() as u64);
            metrics::record_detections(category.as_str(), detections.len() as u64);

            if !self.gate.admit(category, now) {
                metrics::record_alert_suppressed(category.as_str());
                continue;
            }

            let alert = Alert::new(category, detections[0].object_name.clone(), Utc::now());
            metrics::record_alert_fired(category.as_str());

            self.actuator.actuate(category);

            let message = alert.render();
            info!(alert_id = %alert.id, category = %category, "{}", message.console);

            let outcome = self.dispatcher.dispatch(&message.notification).await;
            match &outcome {
                DeliveryOutcome::Delivered { channel } => {
                    metrics::record_delivery("delivered", channel);
                }
                DeliveryOutcome::AllFailed => {
                    error!(alert_id = %alert.id, "All notification channels failed");
                    metrics::record_delivery("all_failed", "none");
                }
                DeliveryOutcome::Unconfigured => {
                    debug!(alert_id = %alert.id, "No notification channels configured");
                    metrics::record_delivery("unconfigured", "none");
                }
            }

            summary.alerts.push(AlertRecord {
                alert,
                message,
                outcome,
            });
        }

        for &category in Category::ALL {
            if let Some(mut group) = groups.remove(&category) {
                summary.detections.append(&mut group);
            }
        }

        metrics::record_frame();
        summary
    }
}

/// Renders one category's status line: up to [`MAX_LISTED`] names plus
/// an overflow count, or `None` when nothing was detected.
fn status_line(category: Category, detections: &[Detection]) -> String {
    if detections.is_empty() {
        return format!("{}: None", category.label());
    }

    let mut listed = detections
        .iter()
        .take(MAX_LISTED)
        .map(|d| d.object_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if detections.len() > MAX_LISTED {
        listed.push_str(&format!(" +{}", detections.len() - MAX_LISTED));
    }

    format!("{}: {}", category.label(), listed)
}
