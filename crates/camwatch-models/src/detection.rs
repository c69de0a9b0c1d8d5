//! Detection models flowing through the pipeline.

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates.
///
/// `(x1, y1)` is the top-left corner, `(x2, y2)` the bottom-right.
/// Carried through untouched for the display collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        (self.x2 - self.x1).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).max(0.0)
    }
}

/// Raw per-frame detection as produced by the upstream detector.
///
/// Ephemeral: one instance per bounding box per frame, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Raw model class identifier (COCO index for the default taxonomy)
    pub class_id: u32,

    /// Detection confidence in [0.0, 1.0]
    pub confidence: f32,

    /// Bounding box in pixel coordinates
    #[serde(default)]
    pub bbox: BoundingBox,
}

impl RawDetection {
    pub fn new(class_id: u32, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            class_id,
            confidence,
            bbox,
        }
    }
}

/// A detection that cleared the confidence filter and classified into
/// a security category, with its object name resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Security category the raw class id mapped to
    pub category: Category,

    /// Human-readable object name resolved from the taxonomy
    pub object_name: String,

    /// Detection confidence in [0.0, 1.0]
    pub confidence: f32,

    /// Bounding box in pixel coordinates
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn new(
        category: Category,
        object_name: impl Into<String>,
        confidence: f32,
        bbox: BoundingBox,
    ) -> Self {
        Self {
            category,
            object_name: object_name.into(),
            confidence,
            bbox,
        }
    }
}
