//! # Prodtimer Core Library
//!
//! Core engine for the Prodtimer productivity timer: a free-running
//! stopwatch with lap capture and a dual-phase ("work"/"break")
//! countdown with automatic phase alternation.
//!
//! The engines are wall-clock-based state machines. They hold no
//! threads and run no timers of their own -- the caller polls `tick()`
//! and the derived-value getters at whatever display rate it likes.
//! While running, the displayed value is always derived as
//! `base +/- (now - anchor)`, never accumulated tick by tick, so
//! polling jitter cannot drift the measurement.
//!
//! ## Key Components
//!
//! - [`StopwatchEngine`]: free-running up-counter with lap capture
//! - [`CountdownEngine`]: down-counter with pause/resume and phase auto-switch
//! - [`PhaseConfig`]: validated work/break duration store
//! - [`Notifier`]: completion alert port
//! - [`Config`]: on-disk application configuration

pub mod clock;
pub mod error;
pub mod events;
pub mod format;
pub mod notify;
pub mod storage;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ConfigError, CoreError, TimerError};
pub use events::Event;
pub use format::{format_coarse, format_fine};
pub use notify::{Notifier, NullNotifier};
pub use storage::Config;
pub use timer::{
    CountdownEngine, EngineStatus, LapRecord, Phase, PhaseConfig, StopwatchEngine,
    DISPLAY_TICK_MS,
};
