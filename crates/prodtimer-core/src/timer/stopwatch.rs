//! Stopwatch engine: free-running up-counter with lap capture.
//!
//! A wall-clock-based state machine with no internal thread. The
//! elapsed value is derived on every read as `base + (now - anchor)`
//! while running; nothing is accumulated per poll, so a slow or
//! backgrounded caller reads exactly the same elapsed time as a fast
//! one.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> ...
//! reset() returns to Idle from any state and clears the laps.
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::EngineStatus;
use crate::clock::{Clock, SystemClock};
use crate::events::Event;

/// One recorded lap. Laps are stored newest-first; `index` is 1-based
/// and never reused within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapRecord {
    pub index: u32,
    pub duration_ms: u64,
    /// Strictly longer than the immediately previous lap. The first
    /// lap is the baseline and always reports `false`.
    pub longer_than_previous: bool,
}

pub struct StopwatchEngine<C: Clock = SystemClock> {
    clock: C,
    status: EngineStatus,
    /// Elapsed value frozen at the last transition out of Running.
    base_ms: u64,
    /// Wall-clock reading at the last transition into Running.
    anchor_ms: Option<u64>,
    /// Newest lap first.
    laps: Vec<LapRecord>,
    /// Elapsed value at the most recent lap.
    last_lap_ms: u64,
}

impl StopwatchEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for StopwatchEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> StopwatchEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            status: EngineStatus::Idle,
            base_ms: 0,
            anchor_ms: None,
            laps: Vec::new(),
            last_lap_ms: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn laps(&self) -> &[LapRecord] {
        &self.laps
    }

    /// Derived elapsed value. Recomputed from the anchor on every call
    /// while running; equals the frozen base otherwise.
    pub fn elapsed_ms(&self) -> u64 {
        match (self.status, self.anchor_ms) {
            (EngineStatus::Running, Some(anchor)) => {
                self.base_ms + self.clock.now_ms().saturating_sub(anchor)
            }
            _ => self.base_ms,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StopwatchSnapshot {
            status: self.status,
            elapsed_ms: self.elapsed_ms(),
            laps: self.laps.clone(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start from Idle or resume from Paused. No-op while Running.
    pub fn start(&mut self) -> Option<Event> {
        match self.status {
            EngineStatus::Idle | EngineStatus::Paused | EngineStatus::Completed => {
                self.anchor_ms = Some(self.clock.now_ms());
                self.status = EngineStatus::Running;
                Some(Event::StopwatchStarted { at: Utc::now() })
            }
            EngineStatus::Running => None,
        }
    }

    /// Pause, freezing the elapsed value. No-op unless Running.
    pub fn stop(&mut self) -> Option<Event> {
        if self.status != EngineStatus::Running {
            return None;
        }
        self.base_ms = self.elapsed_ms();
        self.anchor_ms = None;
        self.status = EngineStatus::Paused;
        Some(Event::StopwatchPaused {
            elapsed_ms: self.base_ms,
            at: Utc::now(),
        })
    }

    /// Return to Idle from any state and clear the lap sequence.
    pub fn reset(&mut self) -> Option<Event> {
        self.status = EngineStatus::Idle;
        self.base_ms = 0;
        self.anchor_ms = None;
        self.laps.clear();
        self.last_lap_ms = 0;
        Some(Event::StopwatchReset { at: Utc::now() })
    }

    /// Record a lap against the current derived elapsed value. Valid in
    /// any state; when not Running it measures against the frozen base.
    pub fn lap(&mut self) -> Option<Event> {
        let current = self.elapsed_ms();
        let duration_ms = current.saturating_sub(self.last_lap_ms);
        let longer_than_previous = self
            .laps
            .first()
            .is_some_and(|prev| duration_ms > prev.duration_ms);
        let index = self.laps.len() as u32 + 1;
        self.laps.insert(
            0,
            LapRecord {
                index,
                duration_ms,
                longer_than_previous,
            },
        );
        self.last_lap_ms = current;
        Some(Event::LapRecorded {
            index,
            duration_ms,
            longer_than_previous,
            at: Utc::now(),
        })
    }
}
