//! Local audible alerting.

use std::io::Write;

use tracing::warn;

use camwatch_models::Category;

/// Pulses in the fallback bell burst.
const FALLBACK_BELLS: u32 = 3;

/// Sink for locally-perceptible alert signals.
///
/// The real implementation is environment-specific (speaker, buzzer,
/// terminal bell); tests substitute a recording sink.
pub trait SignalSink: Send {
    /// Emit `repeats` pulses at the given intensity (1 = low, 3 = high).
    fn emit(&mut self, intensity: u8, repeats: u32) -> std::io::Result<()>;
}

/// Default sink: writes BEL characters to stderr, one per pulse.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl SignalSink for TerminalBell {
    fn emit(&mut self, _intensity: u8, repeats: u32) -> std::io::Result<()> {
        let mut err = std::io::stderr();
        for _ in 0..repeats {
            err.write_all(b"\x07")?;
        }
        err.flush()
    }
}

/// Fires local signals keyed by category priority.
///
/// Person gets an insistent triple pulse, animal a double, vehicle a
/// single. A sink failure degrades to a minimal bell burst; failures
/// never reach the pipeline.
pub struct AlertActuator {
    sink: Box<dyn SignalSink>,
}

impl AlertActuator {
    pub fn new(sink: Box<dyn SignalSink>) -> Self {
        Self { sink }
    }

    /// Actuator over the default terminal bell sink.
    pub fn terminal() -> Self {
        Self::new(Box::new(TerminalBell))
    }

    /// Signal pulses for a category.
    fn repeats(category: Category) -> u32 {
        match category {
            Category::Person => 3,
            Category::Animal => 2,
            Category::Vehicle => 1,
        }
    }

    /// Fire the local signal for a category. Never fails.
    pub fn actuate(&mut self, category: Category) {
        let repeats = Self::repeats(category);
        if let Err(e) = self.sink.emit(category.priority(), repeats) {
            warn!(
                category = %category,
                error = %e,
                "Signal sink failed, falling back to bell"
            );
            fallback_bell();
        }
    }
}

/// Minimal fallback: a burst of terminal bells, best effort.
fn fallback_bell() {
    let mut err = std::io::stderr();
    for _ in 0..FALLBACK_BELLS {
        let _ = err.write_all(b"\x07");
    }
    let _ = err.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingSink {
        calls: Arc<Mutex<Vec<(u8, u32)>>>,
        fail: bool,
    }

    impl RecordingSink {
        fn new(fail: bool) -> (Self, Arc<Mutex<Vec<(u8, u32)>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    calls: calls.clone(),
                    fail,
                },
                calls,
            )
        }
    }

    impl SignalSink for RecordingSink {
        fn emit(&mut self, intensity: u8, repeats: u32) -> std::io::Result<()> {
            self.calls.lock().unwrap().push((intensity, repeats));
            if self.fail {
                Err(std::io::Error::other("no audio device"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_priority_patterns() {
        let (sink, calls) = RecordingSink::new(false);
        let mut actuator = AlertActuator::new(Box::new(sink));

        actuator.actuate(Category::Person);
        actuator.actuate(Category::Animal);
        actuator.actuate(Category::Vehicle);

        assert_eq!(*calls.lock().unwrap(), vec![(3, 3), (2, 2), (1, 1)]);
    }

    #[test]
    fn test_sink_failure_never_propagates() {
        let (sink, calls) = RecordingSink::new(true);
        let mut actuator = AlertActuator::new(Box::new(sink));

        actuator.actuate(Category::Person);
        actuator.actuate(Category::Person);

        assert_eq!(calls.lock().unwrap().len(), 2);
    }
}
