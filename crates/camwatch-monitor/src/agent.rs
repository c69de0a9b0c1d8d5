//! Monitor agent loop.
//!
//! Drives the pipeline from a detection feed: read one batch, process
//! it fully, pace to the frame interval, repeat. One batch is always
//! finished (classify, gate, notify) before the next frame is read.

use std::time::{Duration, Instant};

use tokio::sync::watch;
use tracing::info;

use camwatch_models::Category;

use crate::config::MonitorConfig;
use crate::error::MonitorResult;
use crate::feed::DetectionFeed;
use crate::pipeline::Pipeline;

/// Frame-rate tracker over a one-second window.
#[derive(Debug)]
struct FpsTracker {
    window_start: Instant,
    frames_in_window: u32,
    fps: u32,
}

impl FpsTracker {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames_in_window: 0,
            fps: 0,
        }
    }

    /// Count one frame and return the most recently completed rate.
    fn tick(&mut self, now: Instant) -> u32 {
        self.frames_in_window += 1;
        if now.duration_since(self.window_start) > Duration::from_secs(1) {
            self.fps = self.frames_in_window;
            self.frames_in_window = 0;
            self.window_start = now;
        }
        self.fps
    }
}

/// Runs the pipeline over a detection feed until shutdown or feed end.
pub struct MonitorAgent {
    config: MonitorConfig,
    pipeline: Pipeline,
    feed: Box<dyn DetectionFeed>,
    shutdown: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl MonitorAgent {
    pub fn new(config: MonitorConfig, pipeline: Pipeline, feed: Box<dyn DetectionFeed>) -> Self {
        let (shutdown, shutdown_rx) = watch::channel(false);
        Self {
            config,
            pipeline,
            feed,
            shutdown,
            shutdown_rx,
        }
    }

    /// Handle used to signal shutdown from outside the run loop.
    pub fn shutdown_handle(&self) -> watch::Sender<bool> {
        self.shutdown.clone()
    }

    /// Run the agent loop.
    ///
    /// Returns when the feed is exhausted, shutdown is signalled, or
    /// the feed fails (the only fatal condition).
    pub async fn run(&mut self) -> MonitorResult<()> {
        info!(
            frame_interval_ms = self.config.frame_interval.as_millis() as u64,
            "Starting monitor agent"
        );

        let mut shutdown_rx = self.shutdown_rx.clone();
        let mut fps = FpsTracker::new();
        let mut last_status = Instant::now();

        loop {
            tokio::select! {
                // Discard the watch::Ref inside the arm future: the guard it
                // wraps is !Send and would otherwise be held across the other
                // branch's awaits, making this future !Send.
                _ = async { let _ = shutdown_rx.wait_for(|stop| *stop).await; } => {
                    info!("Shutdown signal received, stopping agent");
                    break;
                }
                batch = self.feed.next_batch() => {
                    let Some(batch) = batch? else {
                        info!("Detection feed exhausted");
                        break;
                    };

                    let summary = self.pipeline.process_frame(&batch).await;
                    let rate = fps.tick(Instant::now());

                    if last_status.elapsed() >= self.config.status_interval {
                        last_status = Instant::now();
                        let counters = self.pipeline.counters();
                        info!(
                            fps = rate,
                            status = if summary.breach { "BREACH" } else { "SECURE" },
                            persons = counters.total(Category::Person),
                            animals = counters.total(Category::Animal),
                            vehicles = counters.total(Category::Vehicle),
                            "{}",
                            summary.status_lines.join(" | ")
                        );
                    }

                    tokio::time::sleep(self.config.frame_interval).await;
                }
            }
        }

        info!("Monitor agent stopped");
        Ok(())
    }
}
