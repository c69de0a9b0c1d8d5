//! Security category definitions for the alert pipeline.
//!
//! This module defines the closed set of categories a detection can be
//! classified into, ordered by threat priority:
//!
//! - `Person`: highest priority, immediate breach
//! - `Animal`: medium priority, intrusion into the monitored zone
//! - `Vehicle`: lowest priority, activity in the monitored area

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Security category assigned to a classified detection.
///
/// Categories form a fixed closed set with a total priority order.
/// A higher priority rank means a more urgent alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A person in frame. Treated as a security breach.
    Person,

    /// An animal (bird through giraffe in the COCO ordering).
    Animal,

    /// A road vehicle (bicycle, car, motorcycle, bus, truck).
    Vehicle,
}

impl Category {
    /// All categories in fixed processing order, highest priority first.
    pub const ALL: &'static [Category] =
        &[Category::Person, Category::Animal, Category::Vehicle];

    /// Raw COCO class identifiers mapping to this category.
    pub fn class_ids(&self) -> &'static [u32] {
        match self {
            Category::Person => &[0],
            Category::Animal => &[14, 15, 16, 17, 18, 19, 20, 21, 22, 23],
            Category::Vehicle => &[1, 2, 3, 5, 7],
        }
    }

    /// Classifies a raw class identifier into a category.
    ///
    /// Pure lookup against the fixed id sets. Identifiers outside every
    /// set yield `None` and the detection is ignored upstream.
    pub fn from_class_id(class_id: u32) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.class_ids().contains(&class_id))
    }

    /// Threat priority rank (3 = most urgent, 1 = least).
    pub fn priority(&self) -> u8 {
        match self {
            Category::Person => 3,
            Category::Animal => 2,
            Category::Vehicle => 1,
        }
    }

    /// Overlay color for this category as an RGB triple.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Category::Person => (0, 255, 0),
            Category::Animal => (255, 165, 0),
            Category::Vehicle => (255, 255, 0),
        }
    }

    /// Returns the category name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Person => "person",
            Category::Animal => "animal",
            Category::Vehicle => "vehicle",
        }
    }

    /// Uppercase label used in alert headers and the status panel.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Person => "PERSON",
            Category::Animal => "ANIMAL",
            Category::Vehicle => "VEHICLE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "person" => Ok(Category::Person),
            "animal" => Ok(Category::Animal),
            "vehicle" => Ok(Category::Vehicle),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown category: {0}")]
pub struct CategoryParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_person() {
        assert_eq!(Category::from_class_id(0), Some(Category::Person));
    }

    #[test]
    fn test_classify_animals() {
        for id in 14..=23 {
            assert_eq!(Category::from_class_id(id), Some(Category::Animal));
        }
    }

    #[test]
    fn test_classify_vehicles() {
        for id in [1, 2, 3, 5, 7] {
            assert_eq!(Category::from_class_id(id), Some(Category::Vehicle));
        }
    }

    #[test]
    fn test_classify_unmapped() {
        // Ids that sit between or beyond the mapped sets.
        for id in [4, 6, 8, 13, 24, 79, 10_000] {
            assert_eq!(Category::from_class_id(id), None);
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        for id in 0..100 {
            assert_eq!(Category::from_class_id(id), Category::from_class_id(id));
        }
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Category::Person.priority() > Category::Animal.priority());
        assert!(Category::Animal.priority() > Category::Vehicle.priority());
    }

    #[test]
    fn test_processing_order() {
        let ranks: Vec<u8> = Category::ALL.iter().map(|c| c.priority()).collect();
        assert_eq!(ranks, vec![3, 2, 1]);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("person".parse::<Category>().unwrap(), Category::Person);
        assert_eq!("ANIMAL".parse::<Category>().unwrap(), Category::Animal);
        assert_eq!("vehicle".parse::<Category>().unwrap(), Category::Vehicle);
        assert!("drone".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Person.to_string(), "person");
        assert_eq!(Category::Vehicle.label(), "VEHICLE");
    }

    #[test]
    fn test_overlay_colors() {
        assert_eq!(Category::Person.color(), (0, 255, 0));
        assert_eq!(Category::Animal.color(), (255, 165, 0));
        assert_eq!(Category::Vehicle.color(), (255, 255, 0));
    }
}
