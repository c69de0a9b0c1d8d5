//! CamWatch monitor agent.
//!
//! Wires the detection-to-alert pipeline: feeds supply per-frame
//! detection batches; the pipeline classifies them into security
//! categories, throttles per-category alerts, renders messages and
//! dispatches them across notification channels; the agent paces
//! frames and reports status.

pub mod actuator;
pub mod agent;
pub mod config;
pub mod cooldown;
pub mod counters;
pub mod error;
pub mod feed;
pub mod metrics;
pub mod pipeline;

pub use actuator::{AlertActuator, SignalSink, TerminalBell};
pub use agent::MonitorAgent;
pub use config::MonitorConfig;
pub use cooldown::CooldownGate;
pub use counters::DetectionCounters;
pub use error::{MonitorError, MonitorResult};
pub use feed::{DetectionFeed, JsonlFeed, SyntheticFeed};
pub use pipeline::{AlertRecord, FrameSummary, Pipeline};
