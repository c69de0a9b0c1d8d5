//! Class-id to object-name resolution.
//!
//! The detector reports numeric class ids; alerts and the status panel
//! want names. The embedded COCO-80 table covers the default model, and
//! a JSON file (`{"0": "person", ...}`) can replace it for models with a
//! different label set. Lookup misses never fail: unknown ids resolve to
//! `class_<id>`.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Result type for taxonomy operations.
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse taxonomy file: {0}")]
    Json(#[from] serde_json::Error),
}

/// COCO class names indexed by class id.
pub const COCO_CLASSES: &[&str] = &[
    "person", "bicycle", "car", "motorcycle", "airplane", "bus", "train", "truck",
    "boat", "traffic light", "fire hydrant", "stop sign", "parking meter", "bench",
    "bird", "cat", "dog", "horse", "sheep", "cow", "elephant", "bear", "zebra",
    "giraffe", "backpack", "umbrella", "handbag", "tie", "suitcase", "frisbee",
    "skis", "snowboard", "sports ball", "kite", "baseball bat", "baseball glove",
    "skateboard", "surfboard", "tennis racket", "bottle", "wine glass", "cup",
    "fork", "knife", "spoon", "bowl", "banana", "apple", "sandwich", "orange",
    "broccoli", "carrot", "hot dog", "pizza", "donut", "cake", "chair", "couch",
    "potted plant", "bed", "dining table", "toilet", "tv", "laptop", "mouse",
    "remote", "keyboard", "cell phone", "microwave", "oven", "toaster", "sink",
    "refrigerator", "book", "clock", "vase", "scissors", "teddy bear", "hair drier",
    "toothbrush",
];

/// Maps raw class identifiers to human-readable object names.
///
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    names: HashMap<u32, String>,
}

impl Taxonomy {
    /// Builds the embedded COCO-80 taxonomy.
    pub fn coco() -> Self {
        let names = COCO_CLASSES
            .iter()
            .enumerate()
            .map(|(id, name)| (id as u32, (*name).to_string()))
            .collect();
        Self { names }
    }

    /// Loads a taxonomy from a JSON file mapping class ids to names.
    pub fn from_file(path: impl AsRef<Path>) -> TaxonomyResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let names: HashMap<u32, String> = serde_json::from_str(&raw)?;
        Ok(Self { names })
    }

    /// Resolves a class id to its object name.
    ///
    /// Unknown ids fall back to `class_<id>` so an out-of-range detector
    /// output still produces a readable alert.
    pub fn name(&self, class_id: u32) -> String {
        self.names
            .get(&class_id)
            .cloned()
            .unwrap_or_else(|| format!("class_{class_id}"))
    }

    /// Number of known class ids.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::coco()
    }
}
