//! Work/break phase configuration store.
//!
//! Process-wide, read-mostly state: the countdown engine re-reads the
//! active phase's duration on every start, reset, and phase transition.
//! Durations only change through the validated setters, so the engine
//! can trust any value it reads here to be positive.

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Default work phase duration (25 minutes).
pub const DEFAULT_WORK_MS: u64 = 25 * 60 * 1000;
/// Default break phase duration (5 minutes).
pub const DEFAULT_BREAK_MS: u64 = 5 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn opposite(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Work => write!(f, "work"),
            Phase::Break => write!(f, "break"),
        }
    }
}

/// The two configurable phase durations and the currently active phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseConfig {
    work_ms: u64,
    break_ms: u64,
    active: Phase,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            work_ms: DEFAULT_WORK_MS,
            break_ms: DEFAULT_BREAK_MS,
            active: Phase::Work,
        }
    }
}

impl PhaseConfig {
    /// Create a config with validated durations; the work phase starts
    /// active.
    pub fn new(work_ms: u64, break_ms: u64) -> Result<Self, TimerError> {
        let mut cfg = Self::default();
        cfg.set_duration(Phase::Work, work_ms)?;
        cfg.set_duration(Phase::Break, break_ms)?;
        Ok(cfg)
    }

    pub fn duration(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_ms,
            Phase::Break => self.break_ms,
        }
    }

    pub fn active_duration(&self) -> u64 {
        self.duration(self.active)
    }

    /// Update one phase's duration. Rejects zero, leaving the stored
    /// value untouched. Does not reset any running engine; callers
    /// decide whether to apply immediately.
    pub fn set_duration(&mut self, phase: Phase, ms: u64) -> Result<(), TimerError> {
        if ms == 0 {
            return Err(TimerError::InvalidDuration { ms });
        }
        match phase {
            Phase::Work => self.work_ms = ms,
            Phase::Break => self.break_ms = ms,
        }
        Ok(())
    }

    pub fn active_phase(&self) -> Phase {
        self.active
    }

    /// Pure state change; no time arithmetic happens here.
    pub fn set_active_phase(&mut self, phase: Phase) {
        self.active = phase;
    }
}
