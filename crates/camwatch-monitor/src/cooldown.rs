//! Per-category alert throttling.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use camwatch_models::Category;

/// Check-and-set cooldown gate deciding whether a category may alert.
///
/// Tracks the instant of the last admitted alert per category. `admit`
/// both checks and records: a `true` return marks the category as
/// having fired at `now`, a `false` return leaves the stored instant
/// untouched. Callers must not probe speculatively.
#[derive(Debug)]
pub struct CooldownGate {
    window: Duration,
    last_fired: HashMap<Category, Instant>,
}

impl CooldownGate {
    /// Create a gate with the given cooldown window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: HashMap::new(),
        }
    }

    /// Returns true and records `now` iff the category may alert now.
    ///
    /// A category with no prior record is always admitted. An elapsed
    /// time exactly equal to the window is admitted (inclusive bound).
    pub fn admit(&mut self, category: Category, now: Instant) -> bool {
        if let Some(last) = self.last_fired.get(&category) {
            if now.duration_since(*last) < self.window {
                debug!(category = %category, "Alert suppressed by cooldown");
                return false;
            }
        }
        self.last_fired.insert(category, now);
        true
    }

    /// Cooldown window length.
    pub fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(3);

    #[test]
    fn test_first_alert_admitted() {
        let mut gate = CooldownGate::new(WINDOW);
        assert_eq!(gate.window(), WINDOW);
        assert!(gate.admit(Category::Person, Instant::now()));
    }

    #[test]
    fn test_within_window_suppressed() {
        let mut gate = CooldownGate::new(WINDOW);
        let t0 = Instant::now();

        assert!(gate.admit(Category::Person, t0));
        assert!(!gate.admit(Category::Person, t0 + Duration::from_secs(2)));
    }

    #[test]
    fn test_suppressed_call_leaves_state_unchanged() {
        let mut gate = CooldownGate::new(WINDOW);
        let t0 = Instant::now();

        assert!(gate.admit(Category::Person, t0));
        // Rejected at t0+2s; the window still counts from t0, so t0+3s
        // is admitted. A rejected call that reset the timer would keep
        // suppressing until t0+5s.
        assert!(!gate.admit(Category::Person, t0 + Duration::from_secs(2)));
        assert!(gate.admit(Category::Person, t0 + Duration::from_secs(3)));
    }

    #[test]
    fn test_exact_window_boundary_admitted() {
        let mut gate = CooldownGate::new(WINDOW);
        let t0 = Instant::now();

        assert!(gate.admit(Category::Vehicle, t0));
        assert!(gate.admit(Category::Vehicle, t0 + WINDOW));
    }

    #[test]
    fn test_admitted_alert_restarts_window() {
        let mut gate = CooldownGate::new(WINDOW);
        let t0 = Instant::now();

        assert!(gate.admit(Category::Animal, t0));
        assert!(gate.admit(Category::Animal, t0 + Duration::from_secs(4)));
        // Second admission at t0+4s; t0+6s is only 2s later.
        assert!(!gate.admit(Category::Animal, t0 + Duration::from_secs(6)));
        assert!(gate.admit(Category::Animal, t0 + Duration::from_secs(7)));
    }

    #[test]
    fn test_categories_do_not_interfere() {
        let mut gate = CooldownGate::new(WINDOW);
        let t0 = Instant::now();

        assert!(gate.admit(Category::Person, t0));
        assert!(gate.admit(Category::Animal, t0));
        assert!(gate.admit(Category::Vehicle, t0));
        assert!(!gate.admit(Category::Person, t0 + Duration::from_secs(1)));
        assert!(!gate.admit(Category::Vehicle, t0 + Duration::from_secs(1)));
    }
}
