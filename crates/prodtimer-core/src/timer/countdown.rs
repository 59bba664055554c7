//! Countdown engine: down-counter with pause/resume and automatic
//! work/break phase alternation.
//!
//! Like the stopwatch, this is a wall-clock state machine with no
//! internal thread: the caller polls `tick()` periodically, and the
//! remaining value is derived as `base - (now - anchor)` on every read.
//! `tick()` only ever *observes* the derived value; the stored base
//! moves on state transitions, never per poll.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> ... -> Completed -> Idle
//! ```
//!
//! Completion is handled inside the tick that observes remaining == 0:
//! the notification port fires exactly once, the active phase flips,
//! the new phase's duration is reloaded, and the engine settles in Idle
//! ready for the next `start()`.

use chrono::Utc;

use super::{EngineStatus, Phase, PhaseConfig};
use crate::clock::{Clock, SystemClock};
use crate::error::TimerError;
use crate::events::Event;
use crate::notify::Notifier;

pub struct CountdownEngine<C: Clock = SystemClock> {
    clock: C,
    notifier: Box<dyn Notifier>,
    config: PhaseConfig,
    status: EngineStatus,
    /// Remaining value frozen at the last transition out of Running.
    base_ms: u64,
    /// Wall-clock reading at the last transition into Running.
    anchor_ms: Option<u64>,
}

impl CountdownEngine<SystemClock> {
    pub fn new(config: PhaseConfig, notifier: Box<dyn Notifier>) -> Self {
        Self::with_clock(SystemClock, config, notifier)
    }
}

impl<C: Clock> CountdownEngine<C> {
    pub fn with_clock(clock: C, config: PhaseConfig, notifier: Box<dyn Notifier>) -> Self {
        let base_ms = config.active_duration();
        Self {
            clock,
            notifier,
            config,
            status: EngineStatus::Idle,
            base_ms,
            anchor_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn active_phase(&self) -> Phase {
        self.config.active_phase()
    }

    pub fn config(&self) -> &PhaseConfig {
        &self.config
    }

    pub fn duration(&self, phase: Phase) -> u64 {
        self.config.duration(phase)
    }

    /// Derived remaining value, clamped at zero. Recomputed from the
    /// anchor on every call while running; equals the frozen base
    /// otherwise.
    pub fn remaining_ms(&self) -> u64 {
        match (self.status, self.anchor_ms) {
            (EngineStatus::Running, Some(anchor)) => self
                .base_ms
                .saturating_sub(self.clock.now_ms().saturating_sub(anchor)),
            _ => self.base_ms,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::CountdownSnapshot {
            status: self.status,
            remaining_ms: self.remaining_ms(),
            phase: self.config.active_phase(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a fresh phase from Idle, or resume from Paused.
    ///
    /// No-op while Running, and while Paused at zero remaining (a
    /// countdown that ran out must be reset or auto-advanced before it
    /// can start again; this is what prevents a completion
    /// double-fire). The configured duration is re-read from the phase
    /// store on every fresh start; a non-positive value is rejected
    /// with `InvalidDuration` -- the store's setters should make that
    /// unreachable, but the engine defends anyway.
    pub fn start(&mut self) -> Result<Option<Event>, TimerError> {
        match self.status {
            EngineStatus::Running => Ok(None),
            EngineStatus::Completed => Ok(None),
            EngineStatus::Paused => {
                if self.base_ms == 0 {
                    return Ok(None);
                }
                self.anchor_ms = Some(self.clock.now_ms());
                self.status = EngineStatus::Running;
                Ok(Some(Event::CountdownResumed {
                    remaining_ms: self.base_ms,
                    at: Utc::now(),
                }))
            }
            EngineStatus::Idle => {
                let duration_ms = self.config.active_duration();
                if duration_ms == 0 {
                    return Err(TimerError::InvalidDuration { ms: duration_ms });
                }
                self.base_ms = duration_ms;
                self.anchor_ms = Some(self.clock.now_ms());
                self.status = EngineStatus::Running;
                Ok(Some(Event::CountdownStarted {
                    phase: self.config.active_phase(),
                    duration_ms,
                    at: Utc::now(),
                }))
            }
        }
    }

    /// Pause, freezing the remaining value (clamped at zero). Silences
    /// any in-progress alert. No-op unless Running.
    pub fn stop(&mut self) -> Option<Event> {
        if self.status != EngineStatus::Running {
            return None;
        }
        self.base_ms = self.remaining_ms();
        self.anchor_ms = None;
        self.status = EngineStatus::Paused;
        self.notifier.cancel_notification();
        Some(Event::CountdownPaused {
            remaining_ms: self.base_ms,
            at: Utc::now(),
        })
    }

    /// Reload the active phase's duration and return to Idle. Silences
    /// any in-progress alert.
    pub fn reset(&mut self) -> Option<Event> {
        self.status = EngineStatus::Idle;
        self.anchor_ms = None;
        self.base_ms = self.config.active_duration();
        self.notifier.cancel_notification();
        Some(Event::CountdownReset {
            phase: self.config.active_phase(),
            duration_ms: self.base_ms,
            at: Utc::now(),
        })
    }

    /// Make `phase` active and reset against its duration, even
    /// mid-run. Switching to the already-active phase still resets
    /// (degenerate single-phase mode).
    pub fn switch_phase(&mut self, phase: Phase) -> Option<Event> {
        self.config.set_active_phase(phase);
        self.status = EngineStatus::Idle;
        self.anchor_ms = None;
        self.base_ms = self.config.active_duration();
        self.notifier.cancel_notification();
        Some(Event::PhaseSwitched {
            phase,
            duration_ms: self.base_ms,
            at: Utc::now(),
        })
    }

    /// Update a configured phase duration. Does not disturb a running
    /// countdown; the new value is observed at the next reload.
    pub fn set_duration(&mut self, phase: Phase, ms: u64) -> Result<(), TimerError> {
        self.config.set_duration(phase, ms)
    }

    /// Call periodically while running. Returns the completion event on
    /// the tick that observes remaining == 0; by then the engine has
    /// fired the notification once, flipped to the opposite phase,
    /// reloaded its duration, and settled in Idle.
    pub fn tick(&mut self) -> Option<Event> {
        if self.status != EngineStatus::Running {
            return None;
        }
        if self.remaining_ms() > 0 {
            return None;
        }
        let finished = self.config.active_phase();
        self.status = EngineStatus::Completed;
        self.base_ms = 0;
        self.anchor_ms = None;
        self.notifier.notify_completion();
        let next_phase = finished.opposite();
        self.config.set_active_phase(next_phase);
        self.base_ms = self.config.active_duration();
        self.status = EngineStatus::Idle;
        Some(Event::CountdownCompleted {
            phase: finished,
            next_phase,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::clock::ManualClock;

    /// Counts port invocations so tests can assert exactly-once firing.
    #[derive(Default)]
    struct CountingNotifier {
        fired: Rc<Cell<u32>>,
        cancelled: Rc<Cell<u32>>,
    }

    impl Notifier for CountingNotifier {
        fn notify_completion(&mut self) {
            self.fired.set(self.fired.get() + 1);
        }
        fn cancel_notification(&mut self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    fn engine_with_counts(
        work_ms: u64,
        break_ms: u64,
    ) -> (
        ManualClock,
        CountdownEngine<ManualClock>,
        Rc<Cell<u32>>,
        Rc<Cell<u32>>,
    ) {
        let clock = ManualClock::new(0);
        let fired = Rc::new(Cell::new(0));
        let cancelled = Rc::new(Cell::new(0));
        let notifier = CountingNotifier {
            fired: fired.clone(),
            cancelled: cancelled.clone(),
        };
        let config = PhaseConfig::new(work_ms, break_ms).unwrap();
        let engine = CountdownEngine::with_clock(clock.clone(), config, Box::new(notifier));
        (clock, engine, fired, cancelled)
    }

    #[test]
    fn idle_engine_shows_active_phase_duration() {
        let (_, engine, _, _) = engine_with_counts(5000, 2000);
        assert_eq!(engine.status(), EngineStatus::Idle);
        assert_eq!(engine.remaining_ms(), 5000);
        assert_eq!(engine.active_phase(), Phase::Work);
    }

    #[test]
    fn completion_fires_once_flips_phase_and_reloads() {
        let (clock, mut engine, fired, _) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        clock.advance(4999);
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_ms(), 1);

        clock.advance(1);
        let event = engine.tick().expect("completion event");
        match event {
            Event::CountdownCompleted {
                phase, next_phase, ..
            } => {
                assert_eq!(phase, Phase::Work);
                assert_eq!(next_phase, Phase::Break);
            }
            other => panic!("expected CountdownCompleted, got {other:?}"),
        }
        assert_eq!(fired.get(), 1);
        assert_eq!(engine.status(), EngineStatus::Idle);
        assert_eq!(engine.active_phase(), Phase::Break);
        assert_eq!(engine.remaining_ms(), 2000);

        // Further ticks are no-ops and never re-fire.
        clock.advance(10_000);
        assert!(engine.tick().is_none());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn overshoot_tick_clamps_and_completes_once() {
        let (clock, mut engine, fired, _) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        // The caller was suspended well past the deadline.
        clock.advance(60_000);
        assert_eq!(engine.remaining_ms(), 0);
        assert!(engine.tick().is_some());
        assert_eq!(fired.get(), 1);
        assert_eq!(engine.active_phase(), Phase::Break);
    }

    #[test]
    fn pause_holds_remaining_across_wall_clock_delay() {
        let (clock, mut engine, _, cancelled) = engine_with_counts(10_000, 2000);
        engine.start().unwrap();
        clock.advance(3000);
        assert_eq!(engine.remaining_ms(), 7000);
        engine.stop();
        assert_eq!(cancelled.get(), 1);
        clock.advance(10_000);
        assert_eq!(engine.remaining_ms(), 7000);

        let event = engine.start().unwrap().expect("resume event");
        match event {
            Event::CountdownResumed { remaining_ms, .. } => assert_eq!(remaining_ms, 7000),
            other => panic!("expected CountdownResumed, got {other:?}"),
        }
        clock.advance(7000);
        assert_eq!(engine.remaining_ms(), 0);
    }

    #[test]
    fn start_is_a_noop_while_running() {
        let (clock, mut engine, _, _) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        clock.advance(1000);
        assert!(engine.start().unwrap().is_none());
        assert_eq!(engine.remaining_ms(), 4000);
    }

    #[test]
    fn start_is_a_noop_when_paused_at_zero() {
        let (clock, mut engine, fired, _) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        clock.advance(5000);
        // Paused exactly at the deadline, before any tick observed it.
        engine.stop();
        assert_eq!(engine.remaining_ms(), 0);
        assert!(engine.start().unwrap().is_none());
        assert_eq!(fired.get(), 0);

        // Reset unwedges it against the still-active work phase.
        engine.reset();
        assert_eq!(engine.remaining_ms(), 5000);
        assert!(engine.start().unwrap().is_some());
    }

    #[test]
    fn stop_while_idle_is_a_noop() {
        let (_, mut engine, _, cancelled) = engine_with_counts(5000, 2000);
        assert!(engine.stop().is_none());
        assert_eq!(cancelled.get(), 0);
    }

    #[test]
    fn reset_is_idempotent_and_cancels_alert() {
        let (clock, mut engine, _, cancelled) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        clock.advance(1000);
        engine.reset();
        let remaining = engine.remaining_ms();
        engine.reset();
        assert_eq!(engine.status(), EngineStatus::Idle);
        assert_eq!(engine.remaining_ms(), remaining);
        assert_eq!(cancelled.get(), 2);
    }

    #[test]
    fn switch_phase_mid_run_resets_against_new_duration() {
        let (clock, mut engine, _, cancelled) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        clock.advance(1000);
        let event = engine.switch_phase(Phase::Break).expect("switch event");
        match event {
            Event::PhaseSwitched {
                phase, duration_ms, ..
            } => {
                assert_eq!(phase, Phase::Break);
                assert_eq!(duration_ms, 2000);
            }
            other => panic!("expected PhaseSwitched, got {other:?}"),
        }
        assert_eq!(engine.status(), EngineStatus::Idle);
        assert_eq!(engine.remaining_ms(), 2000);
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn switch_to_same_phase_still_resets() {
        let (clock, mut engine, _, _) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        clock.advance(1000);
        engine.switch_phase(Phase::Work);
        assert_eq!(engine.remaining_ms(), 5000);
        assert_eq!(engine.status(), EngineStatus::Idle);
    }

    #[test]
    fn set_duration_applies_at_next_reload_only() {
        let (clock, mut engine, _, _) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        clock.advance(1000);
        engine.set_duration(Phase::Work, 8000).unwrap();
        // The running countdown is undisturbed.
        assert_eq!(engine.remaining_ms(), 4000);
        engine.reset();
        assert_eq!(engine.remaining_ms(), 8000);
    }

    #[test]
    fn set_duration_rejects_zero_without_touching_state() {
        let (_, mut engine, _, _) = engine_with_counts(5000, 2000);
        let err = engine.set_duration(Phase::Break, 0).unwrap_err();
        assert_eq!(err, TimerError::InvalidDuration { ms: 0 });
        assert_eq!(engine.duration(Phase::Break), 2000);
    }

    #[test]
    fn full_work_break_cycle_alternates() {
        let (clock, mut engine, fired, _) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        clock.advance(5000);
        engine.tick();
        assert_eq!(engine.active_phase(), Phase::Break);

        engine.start().unwrap();
        clock.advance(2000);
        engine.tick();
        assert_eq!(engine.active_phase(), Phase::Work);
        assert_eq!(engine.remaining_ms(), 5000);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn remaining_is_monotonic_while_running() {
        let (clock, mut engine, _, _) = engine_with_counts(5000, 2000);
        engine.start().unwrap();
        let mut prev = engine.remaining_ms();
        for _ in 0..20 {
            clock.advance(700);
            let now = engine.remaining_ms();
            assert!(now <= prev);
            prev = now;
            if engine.tick().is_some() {
                // Auto-advance reloaded the break phase; the run is over.
                break;
            }
        }
    }
}
