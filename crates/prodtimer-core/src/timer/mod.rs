mod countdown;
mod phase;
mod stopwatch;

pub use countdown::CountdownEngine;
pub use phase::{Phase, PhaseConfig, DEFAULT_BREAK_MS, DEFAULT_WORK_MS};
pub use stopwatch::{LapRecord, StopwatchEngine};

use serde::{Deserialize, Serialize};

/// Display re-publication interval in milliseconds. Purely a rendering
/// hint: the engines derive their values from wall-clock anchors, so
/// correctness never depends on how often the caller polls.
pub const DISPLAY_TICK_MS: u64 = 10;

/// Lifecycle status shared by both engines. The stopwatch never reaches
/// `Completed`; the countdown passes through it during the tick that
/// fires the completion notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    Idle,
    Running,
    Paused,
    Completed,
}
