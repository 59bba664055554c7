use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{EngineStatus, LapRecord, Phase};

/// Every state change in the engines produces an Event.
/// The presentation layer polls for events and renders snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    StopwatchStarted {
        at: DateTime<Utc>,
    },
    StopwatchPaused {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    StopwatchReset {
        at: DateTime<Utc>,
    },
    LapRecorded {
        index: u32,
        duration_ms: u64,
        longer_than_previous: bool,
        at: DateTime<Utc>,
    },
    StopwatchSnapshot {
        status: EngineStatus,
        elapsed_ms: u64,
        /// Newest lap first.
        laps: Vec<LapRecord>,
        at: DateTime<Utc>,
    },
    CountdownStarted {
        phase: Phase,
        duration_ms: u64,
        at: DateTime<Utc>,
    },
    CountdownPaused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    CountdownResumed {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    /// A phase ran out. The engine has already flipped to `next_phase`
    /// and reloaded its duration, ready for the next start.
    CountdownCompleted {
        phase: Phase,
        next_phase: Phase,
        at: DateTime<Utc>,
    },
    CountdownReset {
        phase: Phase,
        duration_ms: u64,
        at: DateTime<Utc>,
    },
    PhaseSwitched {
        phase: Phase,
        duration_ms: u64,
        at: DateTime<Utc>,
    },
    CountdownSnapshot {
        status: EngineStatus,
        remaining_ms: u64,
        phase: Phase,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tag() {
        let event = Event::LapRecorded {
            index: 1,
            duration_ms: 1200,
            longer_than_previous: false,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "lap_recorded");
        assert_eq!(json["duration_ms"], 1200);
    }
}
