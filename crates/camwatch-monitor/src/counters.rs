//! Aggregate detection counters.

use std::collections::HashMap;

use camwatch_models::Category;

/// Running per-category detection totals for the process lifetime.
///
/// Counts every classified detection, independent of cooldown or
/// delivery outcome. Totals are monotonically non-decreasing and are
/// display-only state.
#[derive(Debug, Default)]
pub struct DetectionCounters {
    totals: HashMap<Category, u64>,
}

impl DetectionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations for a category.
    pub fn add(&mut self, category: Category, count: u64) {
        *self.totals.entry(category).or_insert(0) += count;
    }

    /// Total observed for one category.
    pub fn total(&self, category: Category) -> u64 {
        self.totals.get(&category).copied().unwrap_or(0)
    }

    /// Sum across all categories.
    pub fn grand_total(&self) -> u64 {
        self.totals.values().sum()
    }
}
