//! Detection feed sources.
//!
//! The capture-and-detect stage is an external collaborator; feeds
//! replay its per-frame output. [`JsonlFeed`] reads one JSON batch per
//! line from a file, [`SyntheticFeed`] generates a built-in walkthrough
//! so the agent runs end-to-end without a camera.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use async_trait::async_trait;

use camwatch_models::{BoundingBox, RawDetection};

use crate::error::MonitorResult;

/// Source of per-frame detection batches.
#[async_trait]
pub trait DetectionFeed: Send {
    /// Next frame's batch. `Ok(None)` when the feed is exhausted.
    async fn next_batch(&mut self) -> MonitorResult<Option<Vec<RawDetection>>>;
}

/// Replays recorded detections from a JSONL file.
///
/// Each line holds one frame's batch as a JSON array of raw
/// detections; blank lines are skipped.
pub struct JsonlFeed {
    lines: Lines<BufReader<File>>,
}

impl JsonlFeed {
    /// Open a JSONL detection file.
    pub fn open(path: impl AsRef<Path>) -> MonitorResult<Self> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

#[async_trait]
impl DetectionFeed for JsonlFeed {
    async fn next_batch(&mut self) -> MonitorResult<Option<Vec<RawDetection>>> {
        for line in self.lines.by_ref() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let batch: Vec<RawDetection> = serde_json::from_str(trimmed)?;
            return Ok(Some(batch));
        }
        Ok(None)
    }
}

/// Built-in walkthrough feed, cycling indefinitely.
///
/// A person crosses the frame, a dog follows, a car passes; one frame
/// carries a low-confidence detection and one an unmapped class, so
/// the filtering stages are exercised too.
pub struct SyntheticFeed {
    frames: Vec<Vec<RawDetection>>,
    cursor: usize,
}

impl SyntheticFeed {
    pub fn new() -> Self {
        let person = |conf| RawDetection::new(0, conf, BoundingBox::new(120.0, 80.0, 260.0, 420.0));
        let dog = |conf| RawDetection::new(16, conf, BoundingBox::new(300.0, 260.0, 420.0, 400.0));
        let car = |conf| RawDetection::new(2, conf, BoundingBox::new(40.0, 200.0, 380.0, 380.0));
        let traffic_light = |conf| RawDetection::new(9, conf, BoundingBox::new(500.0, 10.0, 540.0, 90.0));

        let frames = vec![
            vec![],
            vec![person(0.91)],
            vec![person(0.88), dog(0.76)],
            vec![dog(0.82)],
            vec![],
            vec![car(0.67), traffic_light(0.90)],
            vec![person(0.42)],
            vec![],
        ];

        Self { frames, cursor: 0 }
    }
}

impl Default for SyntheticFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DetectionFeed for SyntheticFeed {
    async fn next_batch(&mut self) -> MonitorResult<Option<Vec<RawDetection>>> {
        let batch = self.frames[self.cursor % self.frames.len()].clone();
        self.cursor += 1;
        Ok(Some(batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MonitorError;
    use std::io::Write;

    #[tokio::test]
    async fn test_jsonl_feed_replays_batches() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"class_id": 0, "confidence": 0.9, "bbox": {{"x1": 1.0, "y1": 2.0, "x2": 3.0, "y2": 4.0}}}}]"#
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(file, "[]").unwrap();

        let mut feed = JsonlFeed::open(file.path()).unwrap();

        let first = feed.next_batch().await.unwrap().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].class_id, 0);

        // Blank line is skipped, empty batch comes through as a frame.
        let second = feed.next_batch().await.unwrap().unwrap();
        assert!(second.is_empty());

        assert!(feed.next_batch().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_jsonl_feed_malformed_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let mut feed = JsonlFeed::open(file.path()).unwrap();
        assert!(matches!(
            feed.next_batch().await,
            Err(MonitorError::Json(_))
        ));
    }

    #[test]
    fn test_jsonl_feed_missing_file() {
        assert!(JsonlFeed::open("/nonexistent/detections.jsonl").is_err());
    }

    #[tokio::test]
    async fn test_synthetic_feed_cycles() {
        let mut feed = SyntheticFeed::new();
        let period = feed.frames.len();

        let mut first_cycle = Vec::new();
        for _ in 0..period {
            first_cycle.push(feed.next_batch().await.unwrap().unwrap());
        }
        for expected in first_cycle {
            assert_eq!(feed.next_batch().await.unwrap().unwrap(), expected);
        }
    }

    #[test]
    fn test_synthetic_feed_has_person_frames() {
        let feed = SyntheticFeed::new();
        let persons = feed
            .frames
            .iter()
            .flatten()
            .filter(|d| d.class_id == 0 && d.confidence > 0.5)
            .count();
        assert!(persons > 0);
    }
}
