//! Wall-clock source for the engines.
//!
//! The engines never read the system time directly; they go through
//! [`Clock`] so tests can drive time by hand instead of sleeping.

use std::cell::Cell;
use std::rc::Rc;

/// Supplies wall-clock readings in milliseconds.
pub trait Clock {
    /// Current reading in milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// Production clock backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Manually advanced clock. Clones share the same reading, so a test
/// can keep one handle and hand another to an engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self(Rc::new(Cell::new(start_ms)))
    }

    pub fn advance(&self, delta_ms: u64) {
        self.0.set(self.0.get() + delta_ms);
    }

    pub fn set(&self, now_ms: u64) {
        self.0.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let a = ManualClock::new(100);
        let b = a.clone();
        a.advance(50);
        assert_eq!(b.now_ms(), 150);
        b.set(1000);
        assert_eq!(a.now_ms(), 1000);
    }
}
