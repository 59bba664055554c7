use std::io::Write;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use clap::Subcommand;
use prodtimer_core::{
    format_coarse, Config, CoreError, CountdownEngine, EngineStatus, Event, Notifier,
    NullNotifier, Phase,
};

use super::PhaseArg;

/// Rings the terminal bell. The bell is one-shot, so cancellation has
/// nothing to silence.
struct BellNotifier;

impl Notifier for BellNotifier {
    fn notify_completion(&mut self) {
        // ASCII bell, fire-and-forget.
        print!("\x07");
        let _ = std::io::stdout().flush();
    }

    fn cancel_notification(&mut self) {}
}

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Run the countdown in the foreground
    Run {
        /// Phase to start in
        #[arg(long, value_enum, default_value = "work")]
        phase: PhaseArg,
        /// Stop after this many phase completions
        #[arg(long, default_value = "1")]
        cycles: u32,
        /// Override the configured work duration (minutes)
        #[arg(long)]
        work_min: Option<u64>,
        /// Override the configured break duration (minutes)
        #[arg(long)]
        break_min: Option<u64>,
        /// Print events and the final snapshot as JSON lines
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CountdownAction) -> Result<(), CoreError> {
    match action {
        CountdownAction::Run {
            phase,
            cycles,
            work_min,
            break_min,
            json,
        } => run_loop(phase.into(), cycles, work_min, break_min, json),
    }
}

fn emit(event: &Event, json: bool) -> Result<(), CoreError> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}

fn run_loop(
    phase: Phase,
    cycles: u32,
    work_min: Option<u64>,
    break_min: Option<u64>,
    json: bool,
) -> Result<(), CoreError> {
    let mut cfg = Config::load_or_default();
    if let Some(minutes) = work_min {
        cfg.set_duration(Phase::Work, minutes)?;
    }
    if let Some(minutes) = break_min {
        cfg.set_duration(Phase::Break, minutes)?;
    }

    let tick = Duration::from_millis(cfg.display.tick_ms.max(1));
    let notifier: Box<dyn Notifier> = if cfg.notifications.enabled && cfg.notifications.bell {
        Box::new(BellNotifier)
    } else {
        Box::new(NullNotifier)
    };
    let mut engine = CountdownEngine::new(cfg.phase_config(phase)?, notifier);
    let intents = super::stdin_intents();
    let mut out = std::io::stdout();

    if !json {
        eprintln!("p = pause/resume, s = switch phase, q = quit");
    }
    if let Some(event) = engine.start()? {
        emit(&event, json)?;
    }

    let mut completions = 0u32;
    loop {
        match intents.try_recv() {
            Ok(cmd) => match cmd.as_str() {
                "p" => {
                    let event = if engine.status() == EngineStatus::Running {
                        engine.stop()
                    } else {
                        engine.start()?
                    };
                    if let Some(event) = event {
                        emit(&event, json)?;
                    }
                }
                "s" => {
                    if let Some(event) = engine.switch_phase(engine.active_phase().opposite()) {
                        emit(&event, json)?;
                    }
                    if let Some(event) = engine.start()? {
                        emit(&event, json)?;
                    }
                }
                "q" => break,
                _ => {}
            },
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
        }

        if let Some(event) = engine.tick() {
            emit(&event, json)?;
            if let Event::CountdownCompleted {
                phase, next_phase, ..
            } = event
            {
                completions += 1;
                if !json {
                    writeln!(out, "\r{phase} phase complete -> {next_phase}")?;
                }
                if completions >= cycles {
                    break;
                }
                // Roll straight into the next phase.
                if let Some(event) = engine.start()? {
                    emit(&event, json)?;
                }
            }
        }

        if !json {
            write!(
                out,
                "\r[{}] {}",
                engine.active_phase(),
                format_coarse(engine.remaining_ms())
            )?;
            out.flush()?;
        }
        std::thread::sleep(tick);
    }

    engine.stop();
    if json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    } else {
        writeln!(out)?;
    }
    Ok(())
}
