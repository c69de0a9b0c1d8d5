//! Shared data models for the CamWatch security monitor.
//!
//! This crate provides Serde-serializable types for:
//! - Security categories and the class-id classifier
//! - Raw and classified detections
//! - Alerts and their rendered message forms
//! - The class-id to object-name taxonomy

pub mod alert;
pub mod category;
pub mod detection;
pub mod taxonomy;

// Re-export common types
pub use alert::{Alert, AlertId, AlertMessage};
pub use category::{Category, CategoryParseError};
pub use detection::{BoundingBox, Detection, RawDetection};
pub use taxonomy::{Taxonomy, TaxonomyError, TaxonomyResult, COCO_CLASSES};
